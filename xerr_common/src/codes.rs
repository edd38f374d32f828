//! Exchange-specific error code tables.
//!
//! Each exchange reports failures with its own codes and message texts. An
//! `ErrorCodeMap` translates them into kinds of a taxonomy:
//!
//! - `exact`: a code, or a whole message, mapped to a kind name
//! - `broad`: a substring of the message mapped to a kind name, checked in
//!   authored order, first match wins
//!
//! # TOML Example
//!
//! ```toml
//! [exact]
//! "-1021" = "InvalidNonce"
//! "-2013" = "OrderNotFound"
//!
//! [broad]
//! "Too many requests" = "RateLimitExceeded"
//! "Insufficient balance" = "InsufficientFunds"
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{HierarchyError, MalformedReason};
use crate::fault::Fault;
use crate::hierarchy::ErrorHierarchy;
use crate::kind::KindId;

/// Unresolved code table as authored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ErrorCodeMap {
    /// Code or full message → kind name.
    #[serde(default, with = "ordered")]
    pub exact: Vec<(String, String)>,

    /// Message substring → kind name.
    #[serde(default, with = "ordered")]
    pub broad: Vec<(String, String)>,
}

impl ErrorCodeMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an exact entry.
    pub fn exact(mut self, code: impl Into<String>, kind: impl Into<String>) -> Self {
        self.exact.push((code.into(), kind.into()));
        self
    }

    /// Add a broad entry.
    pub fn broad(mut self, pattern: impl Into<String>, kind: impl Into<String>) -> Self {
        self.broad.push((pattern.into(), kind.into()));
        self
    }

    /// Resolve every kind name against `hierarchy`.
    ///
    /// # Errors
    ///
    /// - `HierarchyError::UnknownKind` if an entry names a missing kind
    /// - `HierarchyError::Malformed` if an exact code appears twice, or a
    ///   broad pattern is empty, since it would match every message
    pub fn resolve<'h>(
        &self,
        hierarchy: &'h ErrorHierarchy,
    ) -> Result<ResolvedCodeMap<'h>, HierarchyError> {
        let mut exact = HashMap::with_capacity(self.exact.len());
        for (code, kind) in &self.exact {
            if exact.insert(code.clone(), hierarchy.resolve(kind)?).is_some() {
                return Err(HierarchyError::Malformed {
                    path: "exact".to_string(),
                    reason: MalformedReason::DuplicateCode(code.clone()),
                });
            }
        }

        let mut broad = Vec::with_capacity(self.broad.len());
        for (pattern, kind) in &self.broad {
            if pattern.is_empty() {
                return Err(HierarchyError::Malformed {
                    path: "broad".to_string(),
                    reason: MalformedReason::EmptyPattern(kind.clone()),
                });
            }
            broad.push((pattern.clone(), hierarchy.resolve(kind)?));
        }

        Ok(ResolvedCodeMap {
            hierarchy,
            exact,
            broad,
        })
    }
}

/// Code table bound to one hierarchy, ready for classification.
#[derive(Debug, Clone)]
pub struct ResolvedCodeMap<'h> {
    hierarchy: &'h ErrorHierarchy,
    exact: HashMap<String, KindId>,
    broad: Vec<(String, KindId)>,
}

impl<'h> ResolvedCodeMap<'h> {
    /// Classify an exchange failure.
    ///
    /// Tries an exact match on `code`, then an exact match on `message`,
    /// then the first broad pattern contained in `message`.
    pub fn classify(&self, code: Option<&str>, message: &str) -> Option<KindId> {
        code.and_then(|c| self.exact.get(c))
            .or_else(|| self.exact.get(message))
            .copied()
            .or_else(|| {
                self.broad
                    .iter()
                    .find(|(pattern, _)| message.contains(pattern.as_str()))
                    .map(|&(_, kind)| kind)
            })
    }

    /// Classify and wrap the message into a [`Fault`].
    pub fn fault(&self, code: Option<&str>, message: &str) -> Option<Fault<'h>> {
        let kind = self.classify(code, message)?;
        Fault::from_kind(self.hierarchy, kind, message)
    }

    pub fn hierarchy(&self) -> &'h ErrorHierarchy {
        self.hierarchy
    }

    /// Number of exact plus broad entries.
    pub fn len(&self) -> usize {
        self.exact.len() + self.broad.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Serde adapter keeping map entries in document order.
mod ordered {
    use core::fmt;

    use serde::de::{MapAccess, Visitor};
    use serde::ser::SerializeMap;
    use serde::{Deserializer, Serializer};

    pub fn serialize<S>(pairs: &[(String, String)], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(pairs.len()))?;
        for (key, value) in pairs {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<(String, String)>, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct PairsVisitor;

        impl<'de> Visitor<'de> for PairsVisitor {
            type Value = Vec<(String, String)>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a table of code → error kind name")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut pairs = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some(pair) = map.next_entry::<String, String>()? {
                    pairs.push(pair);
                }
                Ok(pairs)
            }
        }

        deserializer.deserialize_map(PairsVisitor)
    }
}
