//! Materialized error kinds.

use core::fmt;

/// Arena index of an [`ErrorKind`] within one [`ErrorHierarchy`].
///
/// Ids are only meaningful for the hierarchy that produced them.
///
/// [`ErrorHierarchy`]: crate::hierarchy::ErrorHierarchy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct KindId(u32);

impl KindId {
    /// The root is always materialized first.
    pub const ROOT: Self = Self(0);

    #[inline]
    pub(crate) const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Position in the hierarchy's depth-first order.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for KindId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One distinguishable category of failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorKind {
    pub(crate) id: KindId,
    pub(crate) name: String,
    pub(crate) parent: Option<KindId>,
    pub(crate) depth: usize,
}

impl ErrorKind {
    #[inline]
    pub fn id(&self) -> KindId {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Parent kind, `None` for the root.
    #[inline]
    pub fn parent(&self) -> Option<KindId> {
        self.parent
    }

    /// Number of parent links between this kind and the root.
    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    #[inline]
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
