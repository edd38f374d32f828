//! Failures of the taxonomy itself, distinct from the error kinds it defines.
//!
//! `DuplicateName` and `Malformed` are load-time configuration errors and
//! should abort startup. `UnknownKind` is returned by name lookups.

use thiserror::Error;

/// Error type for materialization and name lookups.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HierarchyError {
    /// Two nodes anywhere in the tree share a name.
    #[error("duplicate error kind '{name}' at '{path}' (first seen at '{first_seen}')")]
    DuplicateName {
        name: String,
        /// Path of the offending node.
        path: String,
        /// Path of the node that claimed the name first.
        first_seen: String,
    },

    /// The input is not a well-formed tree.
    #[error("malformed error tree at '{path}': {reason}")]
    Malformed {
        path: String,
        reason: MalformedReason,
    },

    /// No kind with this name exists in the hierarchy.
    #[error("unknown error kind '{0}'")]
    UnknownKind(String),
}

/// Why a tree (or a table derived from it) was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedReason {
    #[error("empty kind name")]
    EmptyName,

    #[error("kind name {0:?} contains whitespace or control characters")]
    InvalidName(String),

    #[error("expected exactly one root kind, found {0}")]
    RootCount(usize),

    #[error("nesting deeper than {0} levels")]
    TooDeep(usize),

    #[error("more than {0} kinds")]
    TooManyKinds(usize),

    #[error("kind '{0}' is declared inside its own subtree")]
    SelfDescendant(String),

    #[error("empty broad match pattern for kind '{0}'")]
    EmptyPattern(String),

    #[error("code {0:?} is mapped more than once")]
    DuplicateCode(String),
}

impl HierarchyError {
    /// Returns true for errors in the tree definition itself.
    pub const fn is_definition_error(&self) -> bool {
        matches!(self, Self::DuplicateName { .. } | Self::Malformed { .. })
    }
}
