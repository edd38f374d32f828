//! Tree → flat hierarchy materialization.
//!
//! One pass, depth-first pre-order, children in authored order. Every node
//! becomes one [`ErrorKind`] linked to the already-built kind of its parent.
//! Returns the first definition error encountered.

use std::collections::HashMap;

use tracing::debug;

use crate::error::{HierarchyError, MalformedReason};
use crate::hierarchy::{ErrorHierarchy, PATH_SEPARATOR};
use crate::kind::{ErrorKind, KindId};
use crate::tree::ErrorTreeNode;

/// Deepest nesting accepted below the root.
pub const MAX_DEPTH: usize = 64;

/// Materialize `root` into an [`ErrorHierarchy`].
///
/// # Errors
///
/// - `HierarchyError::DuplicateName` if two nodes in different branches
///   share a name
/// - `HierarchyError::Malformed` for empty or non-printable names, a node
///   repeated inside its own subtree, nesting deeper than [`MAX_DEPTH`], or
///   more kinds than [`KindId`] can index
pub fn materialize(root: &ErrorTreeNode) -> Result<ErrorHierarchy, HierarchyError> {
    let mut builder = Builder::with_capacity(root.node_count());

    // (node, parent kind, depth)
    let mut stack: Vec<(&ErrorTreeNode, Option<KindId>, usize)> = vec![(root, None, 0)];
    while let Some((node, parent, depth)) = stack.pop() {
        let id = builder.push(node.name(), parent, depth)?;
        // Reversed so the first child is popped first.
        for child in node.children().iter().rev() {
            stack.push((child, Some(id), depth + 1));
        }
    }

    let hierarchy = builder.finish();
    debug!(
        root = hierarchy.root().name(),
        kinds = hierarchy.len(),
        leaves = hierarchy.leaves().count(),
        "materialized error hierarchy"
    );
    Ok(hierarchy)
}

impl ErrorHierarchy {
    /// Shorthand for [`materialize`].
    pub fn materialize(root: &ErrorTreeNode) -> Result<Self, HierarchyError> {
        materialize(root)
    }
}

impl TryFrom<&ErrorTreeNode> for ErrorHierarchy {
    type Error = HierarchyError;

    fn try_from(root: &ErrorTreeNode) -> Result<Self, Self::Error> {
        materialize(root)
    }
}

// ─── Builder ────────────────────────────────────────────────────────

struct Builder {
    hierarchy: ErrorHierarchy,
}

impl Builder {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            hierarchy: ErrorHierarchy {
                kinds: Vec::with_capacity(capacity),
                children: Vec::with_capacity(capacity),
                by_name: HashMap::with_capacity(capacity),
            },
        }
    }

    fn push(
        &mut self,
        name: &str,
        parent: Option<KindId>,
        depth: usize,
    ) -> Result<KindId, HierarchyError> {
        let malformed = |reason| HierarchyError::Malformed {
            path: self.child_path(parent, name),
            reason,
        };

        if name.is_empty() {
            return Err(malformed(MalformedReason::EmptyName));
        }
        if name.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return Err(malformed(MalformedReason::InvalidName(name.to_string())));
        }
        if depth > MAX_DEPTH {
            return Err(malformed(MalformedReason::TooDeep(MAX_DEPTH)));
        }
        let raw = u32::try_from(self.hierarchy.kinds.len())
            .map_err(|_| malformed(MalformedReason::TooManyKinds(u32::MAX as usize)))?;

        if let Some(&first) = self.hierarchy.by_name.get(name) {
            if parent.is_some_and(|p| self.hierarchy.is_a(p, first)) {
                return Err(malformed(MalformedReason::SelfDescendant(name.to_string())));
            }
            return Err(HierarchyError::DuplicateName {
                name: name.to_string(),
                path: self.child_path(parent, name),
                first_seen: self.hierarchy.path(first).unwrap_or_default(),
            });
        }

        let id = KindId::new(raw);
        self.hierarchy.kinds.push(ErrorKind {
            id,
            name: name.to_string(),
            parent,
            depth,
        });
        self.hierarchy.children.push(Vec::new());
        self.hierarchy.by_name.insert(name.to_string(), id);
        if let Some(parent) = parent {
            self.hierarchy.children[parent.index()].push(id);
        }
        Ok(id)
    }

    fn child_path(&self, parent: Option<KindId>, name: &str) -> String {
        match parent.and_then(|p| self.hierarchy.path(p)) {
            Some(prefix) => format!("{prefix}{PATH_SEPARATOR}{name}"),
            None => name.to_string(),
        }
    }

    fn finish(self) -> ErrorHierarchy {
        self.hierarchy
    }
}
