//! Constructible error values carrying an [`ErrorKind`].
//!
//! A `Fault` matches its own kind and every ancestor kind, so callers can
//! handle a whole branch of the taxonomy at once:
//!
//! ```rust
//! use xerr_common::fault::Fault;
//!
//! let fault = Fault::standard("RateLimitExceeded", "429 Too Many Requests").unwrap();
//! assert!(fault.is("NetworkError"));
//! assert!(!fault.is("ExchangeError"));
//! ```

use core::fmt;

use crate::error::HierarchyError;
use crate::hierarchy::ErrorHierarchy;
use crate::kind::{ErrorKind, KindId};
use crate::standard::standard;

/// An error of a specific kind with a free-form message.
#[derive(Clone)]
pub struct Fault<'h> {
    hierarchy: &'h ErrorHierarchy,
    kind: &'h ErrorKind,
    message: String,
}

impl<'h> Fault<'h> {
    /// Construct a fault by kind name.
    ///
    /// # Errors
    ///
    /// Returns `HierarchyError::UnknownKind` if `hierarchy` has no such kind.
    pub fn new(
        hierarchy: &'h ErrorHierarchy,
        kind: &str,
        message: impl Into<String>,
    ) -> Result<Self, HierarchyError> {
        let kind = hierarchy
            .get(kind)
            .ok_or_else(|| HierarchyError::UnknownKind(kind.to_string()))?;
        Ok(Self {
            hierarchy,
            kind,
            message: message.into(),
        })
    }

    /// Construct a fault by kind id. `None` if the id is not from `hierarchy`.
    pub fn from_kind(
        hierarchy: &'h ErrorHierarchy,
        kind: KindId,
        message: impl Into<String>,
    ) -> Option<Self> {
        Some(Self {
            hierarchy,
            kind: hierarchy.kind(kind)?,
            message: message.into(),
        })
    }

    #[inline]
    pub fn kind(&self) -> &'h ErrorKind {
        self.kind
    }

    #[inline]
    pub fn name(&self) -> &'h str {
        self.kind.name()
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns true if this fault's kind is `ancestor` or descends from it.
    ///
    /// Unknown names never match.
    pub fn is(&self, ancestor: &str) -> bool {
        self.hierarchy
            .id(ancestor)
            .is_some_and(|a| self.is_kind(a))
    }

    pub fn is_kind(&self, ancestor: KindId) -> bool {
        self.hierarchy.is_a(self.kind.id(), ancestor)
    }

    /// Own kind name followed by every ancestor name up to the root.
    pub fn lineage(&self) -> impl Iterator<Item = &'h str> {
        core::iter::once(self.kind)
            .chain(self.hierarchy.ancestors(self.kind.id()))
            .map(ErrorKind::name)
    }
}

impl Fault<'static> {
    /// Construct a fault of the [standard](crate::standard::standard) taxonomy.
    pub fn standard(kind: &str, message: impl Into<String>) -> Result<Self, HierarchyError> {
        Self::new(standard(), kind, message)
    }
}

impl fmt::Debug for Fault<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Fault")
            .field("kind", &self.kind.name())
            .field("message", &self.message)
            .finish()
    }
}

impl fmt::Display for Fault<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.message.is_empty() {
            f.write_str(self.kind.name())
        } else {
            write!(f, "{}: {}", self.kind.name(), self.message)
        }
    }
}

impl std::error::Error for Fault<'_> {}

impl PartialEq for Fault<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.hierarchy, other.hierarchy)
            && self.kind.id() == other.kind.id()
            && self.message == other.message
    }
}

impl Eq for Fault<'_> {}
