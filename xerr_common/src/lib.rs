//! XERR Common Library
//!
//! This crate declares the taxonomy of errors returned by exchange APIs and
//! turns it into a flat, queryable hierarchy of error kinds. Matching on a
//! parent kind also matches every descendant kind.
//!
//! # Module Structure
//!
//! - [`tree`] - Declarative tree model and the [`error_tree!`] literal macro
//! - [`materialize`] - Tree → hierarchy materialization
//! - [`hierarchy`] - Name lookup and ancestor-chain queries
//! - [`standard`] - The standard exchange taxonomy, cached process-wide
//! - [`fault`] - Constructible error values matchable by ancestor
//! - [`codes`] - Exchange code / message tables mapped to kinds
//! - [`config`] - Configuration and tree file loading
//! - [`prelude`] - Common re-exports for convenience
//!
//! # Usage
//!
//! ```rust
//! use xerr_common::prelude::*;
//!
//! let taxonomy = standard();
//! assert!(taxonomy.is_a_name("RateLimitExceeded", "NetworkError").unwrap());
//!
//! let fault = Fault::standard("OrderNotFound", "order 42").unwrap();
//! assert!(fault.is("InvalidOrder"));
//! ```

pub mod codes;
pub mod config;
pub mod error;
pub mod fault;
pub mod hierarchy;
pub mod kind;
pub mod materialize;
pub mod prelude;
pub mod standard;
pub mod tree;
