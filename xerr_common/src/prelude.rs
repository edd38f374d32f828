//! Prelude module for common re-exports.
//!
//! This module provides convenient re-exports of commonly used types
//! so that consumers can do `use xerr_common::prelude::*;` and get
//! the most important types without listing individual paths.
//!
//! # Usage
//!
//! ```rust
//! use xerr_common::prelude::*;
//! ```

// ─── Logging ────────────────────────────────────────────────────────
pub use crate::config::LogLevel;

// ─── Configuration ──────────────────────────────────────────────────
pub use crate::config::{ConfigError, ConfigLoader, SharedConfig};

// ─── Taxonomy ───────────────────────────────────────────────────────
pub use crate::error::{HierarchyError, MalformedReason};
pub use crate::error_tree;
pub use crate::hierarchy::ErrorHierarchy;
pub use crate::kind::{ErrorKind, KindId};
pub use crate::materialize::materialize;
pub use crate::standard::{ROOT_KIND, standard, standard_tree};
pub use crate::tree::ErrorTreeNode;

// ─── Faults ─────────────────────────────────────────────────────────
pub use crate::codes::{ErrorCodeMap, ResolvedCodeMap};
pub use crate::fault::Fault;
