//! Declarative error tree — the input side of materialization.
//!
//! A tree is authored once as a literal and never mutated afterwards.
//! Rust sources use the [`error_tree!`](crate::error_tree) macro; files use
//! nested TOML tables or JSON objects keyed by kind name:
//!
//! ```toml
//! [BaseError.ExchangeError.InvalidOrder]
//! OrderNotFound = {}
//! CancelPending = {}
//!
//! [BaseError.NetworkError.DDoSProtection]
//! RateLimitExceeded = {}
//! ```
//!
//! Sibling order is kept as authored. It only affects iteration order of
//! the materialized hierarchy, never matching.

use core::fmt;
use serde::de::{self, Deserialize, Deserializer, MapAccess, Visitor};
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::error::{HierarchyError, MalformedReason};

// ─── ErrorTreeNode ──────────────────────────────────────────────────

/// One named node of an error tree with its ordered children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorTreeNode {
    name: String,
    children: Vec<ErrorTreeNode>,
}

impl ErrorTreeNode {
    /// Create a node with the given children.
    pub fn new(name: impl Into<String>, children: Vec<ErrorTreeNode>) -> Self {
        Self {
            name: name.into(),
            children,
        }
    }

    /// Create a node without children.
    pub fn leaf(name: impl Into<String>) -> Self {
        Self::new(name, Vec::new())
    }

    /// Kind name of this node.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Children in authored order.
    #[inline]
    pub fn children(&self) -> &[ErrorTreeNode] {
        &self.children
    }

    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Total number of nodes in this subtree, including `self`.
    ///
    /// Iterative, so it is safe on trees deeper than the materializer accepts.
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.children.iter());
        }
        count
    }

    /// Depth-first search for a node by name.
    pub fn find(&self, name: &str) -> Option<&ErrorTreeNode> {
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            if node.name == name {
                return Some(node);
            }
            stack.extend(node.children.iter().rev());
        }
        None
    }

    /// Build a tree from a parsed nested literal.
    ///
    /// The literal's top level must hold exactly one key: the root kind.
    pub fn from_nested(nested: NestedTree) -> Result<Self, HierarchyError> {
        let mut roots = nested.0;
        if roots.len() != 1 {
            return Err(HierarchyError::Malformed {
                path: String::new(),
                reason: MalformedReason::RootCount(roots.len()),
            });
        }
        Ok(roots.remove(0))
    }
}

impl TryFrom<NestedTree> for ErrorTreeNode {
    type Error = HierarchyError;

    fn try_from(nested: NestedTree) -> Result<Self, Self::Error> {
        Self::from_nested(nested)
    }
}

// ─── Nested literal (serde) ─────────────────────────────────────────

/// A parsed `name → { child → { ... } }` mapping, one level of siblings.
///
/// Used for both the top level of a tree file and every nested level.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NestedTree(pub Vec<ErrorTreeNode>);

struct NestedTreeVisitor;

impl<'de> Visitor<'de> for NestedTreeVisitor {
    type Value = NestedTree;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a nested table of error kind names")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut nodes = Vec::with_capacity(map.size_hint().unwrap_or(0));
        while let Some((name, sub)) = map.next_entry::<String, NestedTree>()? {
            nodes.push(ErrorTreeNode::new(name, sub.0));
        }
        Ok(NestedTree(nodes))
    }
}

impl<'de> Deserialize<'de> for NestedTree {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(NestedTreeVisitor)
    }
}

impl<'de> Deserialize<'de> for ErrorTreeNode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let nested = NestedTree::deserialize(deserializer)?;
        Self::from_nested(nested).map_err(de::Error::custom)
    }
}

/// Serializes a sibling list as `name → children` entries.
struct Siblings<'a>(&'a [ErrorTreeNode]);

impl Serialize for Siblings<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for node in self.0 {
            map.serialize_entry(&node.name, &Siblings(&node.children))?;
        }
        map.end()
    }
}

impl Serialize for ErrorTreeNode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        Siblings(core::slice::from_ref(self)).serialize(serializer)
    }
}

impl Serialize for NestedTree {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        Siblings(&self.0).serialize(serializer)
    }
}

// ─── Literal macro ──────────────────────────────────────────────────

/// Author an [`ErrorTreeNode`] as a nested literal.
///
/// ```rust
/// use xerr_common::error_tree;
///
/// let tree = error_tree!(BaseError {
///     NetworkError {
///         DDoSProtection { RateLimitExceeded },
///         RequestTimeout,
///     },
/// });
/// assert_eq!(tree.node_count(), 5);
/// ```
#[macro_export]
macro_rules! error_tree {
    ($name:ident) => {
        $crate::tree::ErrorTreeNode::leaf(stringify!($name))
    };
    ($name:ident { $( $child:ident $( { $($inner:tt)* } )? ),* $(,)? }) => {
        $crate::tree::ErrorTreeNode::new(
            stringify!($name),
            vec![ $( $crate::error_tree!($child $( { $($inner)* } )?) ),* ],
        )
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn macro_builds_nested_literal() {
        let tree = error_tree!(Root {
            A { A1, A2 {} },
            B,
        });

        assert_eq!(tree.name(), "Root");
        assert_eq!(tree.node_count(), 5);
        let names: Vec<_> = tree.children().iter().map(ErrorTreeNode::name).collect();
        assert_eq!(names, ["A", "B"]);
        assert!(tree.find("A2").unwrap().is_leaf());
        assert!(tree.find("Missing").is_none());
    }

    #[test]
    fn json_literal_keeps_sibling_order() {
        let json = r#"{"Root": {"Zeta": {}, "Alpha": {"Inner": {}}, "Mid": {}}}"#;
        let tree: ErrorTreeNode = serde_json::from_str(json).unwrap();

        let names: Vec<_> = tree.children().iter().map(ErrorTreeNode::name).collect();
        assert_eq!(names, ["Zeta", "Alpha", "Mid"]);
        assert_eq!(tree.find("Inner").map(ErrorTreeNode::name), Some("Inner"));
    }

    #[test]
    fn toml_literal_parses_headers_and_inline_tables() {
        let src = r#"
[Root.Network]
Timeout = {}

[Root.Exchange.InvalidOrder]
OrderNotFound = {}
"#;
        let tree: ErrorTreeNode = toml::from_str(src).unwrap();
        assert_eq!(tree.name(), "Root");
        assert_eq!(tree.node_count(), 6);
        assert!(tree.find("OrderNotFound").is_some());
    }

    #[test]
    fn multiple_roots_rejected() {
        let nested: NestedTree = serde_json::from_str(r#"{"A": {}, "B": {}}"#).unwrap();
        let err = ErrorTreeNode::from_nested(nested).unwrap_err();
        assert_eq!(
            err,
            HierarchyError::Malformed {
                path: String::new(),
                reason: MalformedReason::RootCount(2),
            }
        );

        assert!(serde_json::from_str::<ErrorTreeNode>("{}").is_err());
    }

    #[test]
    fn non_table_value_rejected() {
        let err = serde_json::from_str::<ErrorTreeNode>(r#"{"Root": {"Leaf": 1}}"#).unwrap_err();
        assert!(err.to_string().contains("nested table"), "{err}");
    }

    #[test]
    fn serializes_back_to_nested_shape() {
        let tree = error_tree!(Root { A { A1 }, B });
        let value = serde_json::to_value(&tree).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "Root": { "A": { "A1": {} }, "B": {} } })
        );
    }
}
