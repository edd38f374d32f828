//! # XERR Inspect Library
//!
//! Command implementations behind the `xerr_inspect` binary. Each command
//! takes an already materialized hierarchy and returns its rendered output,
//! so the binary only deals with arguments, logging, and exit status.
//!
//! # Module Structure
//!
//! - [`commands`] - Subcommand definitions and execution
//! - [`config`] - `inspect.toml` loading
//! - [`render`] - Text rendering of trees and ancestor chains

pub mod commands;
pub mod config;
pub mod render;
