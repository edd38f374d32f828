//! Materialized error hierarchy — flat name → kind table with ancestor queries.
//!
//! Built once by [`materialize`](crate::materialize::materialize). Immutable
//! after construction, so it can be shared across threads without locking.
//!
//! Kinds are stored in depth-first pre-order: the root is at index 0 and the
//! descendants of any kind occupy the contiguous range right after it.

use std::collections::HashMap;

use static_assertions::assert_impl_all;

use crate::error::HierarchyError;
use crate::kind::{ErrorKind, KindId};
use crate::tree::ErrorTreeNode;

/// Separator used by [`ErrorHierarchy::path`].
pub const PATH_SEPARATOR: &str = "/";

/// All kinds of one taxonomy plus a name index.
#[derive(Debug, Clone)]
pub struct ErrorHierarchy {
    pub(crate) kinds: Vec<ErrorKind>,
    pub(crate) children: Vec<Vec<KindId>>,
    pub(crate) by_name: HashMap<String, KindId>,
}

assert_impl_all!(ErrorHierarchy: Send, Sync);

impl ErrorHierarchy {
    /// Number of kinds.
    #[inline]
    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    /// The root kind.
    pub fn root(&self) -> &ErrorKind {
        &self.kinds[KindId::ROOT.index()]
    }

    /// All kinds in depth-first order.
    pub fn iter(&self) -> std::slice::Iter<'_, ErrorKind> {
        self.kinds.iter()
    }

    /// All kind names in depth-first order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.kinds.iter().map(ErrorKind::name)
    }

    // ─── Lookup ─────────────────────────────────────────────────────

    /// Look up a kind by name.
    pub fn get(&self, name: &str) -> Option<&ErrorKind> {
        self.id(name).map(|id| &self.kinds[id.index()])
    }

    /// Look up a kind id by name.
    #[inline]
    pub fn id(&self, name: &str) -> Option<KindId> {
        self.by_name.get(name).copied()
    }

    /// Like [`id`](Self::id) but reports unknown names as an error.
    pub fn resolve(&self, name: &str) -> Result<KindId, HierarchyError> {
        self.id(name)
            .ok_or_else(|| HierarchyError::UnknownKind(name.to_string()))
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Look up a kind by id.
    #[inline]
    pub fn kind(&self, id: KindId) -> Option<&ErrorKind> {
        self.kinds.get(id.index())
    }

    // ─── Ancestry ───────────────────────────────────────────────────

    /// Parent of `id`, `None` for the root.
    pub fn parent(&self, id: KindId) -> Option<&ErrorKind> {
        let parent = self.kind(id)?.parent?;
        self.kind(parent)
    }

    /// Ancestor chain of `id`, nearest first, ending at the root.
    ///
    /// Does not include `id` itself. The chain has exactly `depth` items.
    pub fn ancestors(&self, id: KindId) -> Ancestors<'_> {
        Ancestors {
            hierarchy: self,
            next: self.kind(id).and_then(|k| k.parent),
        }
    }

    pub fn depth(&self, id: KindId) -> Option<usize> {
        self.kind(id).map(ErrorKind::depth)
    }

    /// Root-to-kind path, e.g. `BaseError/NetworkError/RequestTimeout`.
    pub fn path(&self, id: KindId) -> Option<String> {
        let kind = self.kind(id)?;
        let mut names: Vec<&str> = self.ancestors(id).map(ErrorKind::name).collect();
        names.reverse();
        names.push(kind.name());
        Some(names.join(PATH_SEPARATOR))
    }

    /// Returns true if `ancestor` is `kind` or one of its ancestors.
    ///
    /// Walks up from `kind` only as far as `ancestor`'s depth.
    pub fn is_a(&self, kind: KindId, ancestor: KindId) -> bool {
        let Some(target_depth) = self.depth(ancestor) else {
            return false;
        };
        let mut current = kind;
        loop {
            let Some(entry) = self.kind(current) else {
                return false;
            };
            if entry.depth <= target_depth {
                return entry.depth == target_depth && current == ancestor;
            }
            match entry.parent {
                Some(parent) => current = parent,
                None => return false,
            }
        }
    }

    /// Name-based [`is_a`](Self::is_a).
    pub fn is_a_name(&self, kind: &str, ancestor: &str) -> Result<bool, HierarchyError> {
        Ok(self.is_a(self.resolve(kind)?, self.resolve(ancestor)?))
    }

    // ─── Descent ────────────────────────────────────────────────────

    /// Direct children of `id` in authored order.
    pub fn children(&self, id: KindId) -> &[KindId] {
        self.children
            .get(id.index())
            .map_or(&[][..], Vec::as_slice)
    }

    pub fn is_leaf(&self, id: KindId) -> bool {
        self.children(id).is_empty()
    }

    /// All descendants of `id` in depth-first order, excluding `id`.
    pub fn descendants(&self, id: KindId) -> &[ErrorKind] {
        let Some(kind) = self.kind(id) else {
            return &[];
        };
        let start = id.index() + 1;
        let end = self.kinds[start..]
            .iter()
            .position(|k| k.depth <= kind.depth)
            .map_or(self.kinds.len(), |offset| start + offset);
        &self.kinds[start..end]
    }

    /// Kinds without children, in depth-first order.
    pub fn leaves(&self) -> impl Iterator<Item = &ErrorKind> + '_ {
        self.kinds.iter().filter(|k| self.is_leaf(k.id))
    }

    /// Rebuild the declarative tree this hierarchy was materialized from.
    pub fn to_tree(&self) -> ErrorTreeNode {
        self.subtree(KindId::ROOT)
    }

    fn subtree(&self, id: KindId) -> ErrorTreeNode {
        let children = self
            .children(id)
            .iter()
            .map(|&child| self.subtree(child))
            .collect();
        ErrorTreeNode::new(self.kinds[id.index()].name.clone(), children)
    }
}

impl<'a> IntoIterator for &'a ErrorHierarchy {
    type Item = &'a ErrorKind;
    type IntoIter = std::slice::Iter<'a, ErrorKind>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ─── Ancestors ──────────────────────────────────────────────────────

/// Iterator over an ancestor chain, see [`ErrorHierarchy::ancestors`].
#[derive(Debug, Clone)]
pub struct Ancestors<'a> {
    hierarchy: &'a ErrorHierarchy,
    next: Option<KindId>,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = &'a ErrorKind;

    fn next(&mut self) -> Option<Self::Item> {
        let kind = self.hierarchy.kind(self.next?)?;
        self.next = kind.parent;
        Some(kind)
    }
}
