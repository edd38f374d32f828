//! Tree and code table file loading tests.
//!
//! Tests for `load_tree()`, `load_hierarchy()` and `load_code_map()`: the
//! bundled TOML taxonomy, JSON trees, root count validation, duplicate
//! detection, and code tables naming unknown kinds.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use xerr_common::config::{load_code_map, load_hierarchy, load_tree, ConfigError};
use xerr_common::prelude::*;

fn data_file(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("data").join(name)
}

/// `(name, parent)` pairs of a hierarchy, independent of sibling order.
fn links(h: &ErrorHierarchy) -> BTreeSet<(String, Option<String>)> {
    h.iter()
        .map(|k| {
            (
                k.name().to_string(),
                h.parent(k.id()).map(|p| p.name().to_string()),
            )
        })
        .collect()
}

// ─── Tests ──────────────────────────────────────────────────────────

/// Test: bundled TOML taxonomy matches the built-in literal.
#[test]
fn bundled_toml_matches_standard() {
    let loaded = load_hierarchy(&data_file("standard.toml")).expect("should load");
    assert_eq!(loaded.len(), standard().len());
    assert_eq!(links(&loaded), links(standard()));
    assert_eq!(loaded.root().name(), ROOT_KIND);
}

/// Test: JSON export of the standard tree loads back unchanged.
#[test]
fn json_tree_round_trip() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("taxonomy.json");
    fs::write(&path, serde_json::to_string_pretty(&standard_tree()).unwrap()).unwrap();

    let tree = load_tree(&path).expect("should load");
    assert_eq!(tree, standard_tree());
}

/// Test: hand-written JSON tree with custom kinds.
#[test]
fn custom_json_tree() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("venue.json");
    fs::write(
        &path,
        r#"{
  "VenueError": {
    "Session": { "LoggedOut": {}, "SequenceGap": {} },
    "Throttled": {}
  }
}"#,
    )
    .unwrap();

    let h = load_hierarchy(&path).expect("should load");
    assert_eq!(h.len(), 5);
    assert!(h.is_a_name("SequenceGap", "Session").unwrap());
    assert!(!h.is_a_name("Throttled", "Session").unwrap());
}

/// Test: two top-level keys are rejected as a parse error.
#[test]
fn two_roots_rejected() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("two_roots.toml");
    fs::write(&path, "[BaseError]\n[OtherRoot]\n").unwrap();

    let err = load_tree(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError(ref msg) if msg.contains("exactly one root")), "{err}");
}

/// Test: non-table leaf value is rejected.
#[test]
fn scalar_leaf_rejected() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("scalar.toml");
    fs::write(&path, "[BaseError]\nNetworkError = true\n").unwrap();

    assert!(matches!(load_tree(&path), Err(ConfigError::ParseError(_))));
}

/// Test: duplicate kind across branches surfaces as a taxonomy error.
#[test]
fn duplicate_across_branches_rejected() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("dup.toml");
    fs::write(
        &path,
        r#"
[BaseError.ExchangeError.BadRequest]
BadSymbol = {}

[BaseError.NetworkError]
BadSymbol = {}
"#,
    )
    .unwrap();

    match load_hierarchy(&path) {
        Err(ConfigError::Taxonomy(HierarchyError::DuplicateName { path, first_seen, .. })) => {
            assert_eq!(path, "BaseError/NetworkError/BadSymbol");
            assert_eq!(first_seen, "BaseError/ExchangeError/BadRequest/BadSymbol");
        }
        other => panic!("expected duplicate error, got {other:?}"),
    }
}

/// Test: missing tree file.
#[test]
fn missing_tree_file() {
    let result = load_tree(Path::new("/nonexistent/taxonomy.toml"));
    assert!(matches!(result, Err(ConfigError::FileNotFound)));
}

/// Test: bundled code table resolves and classifies.
#[test]
fn bundled_code_map() {
    let map = load_code_map(&data_file("sample_codes.toml"), standard()).expect("should load");
    let resolved = map.resolve(standard()).unwrap();

    let fault = resolved
        .fault(Some("-1003"), "Too much request weight used")
        .expect("classified");
    assert_eq!(fault.name(), "RateLimitExceeded");
    assert!(fault.is("NetworkError"));

    let fault = resolved
        .fault(None, "Account has insufficient balance for requested action.")
        .expect("classified");
    assert!(fault.is("ExchangeError"));
    assert_eq!(fault.name(), "InsufficientFunds");
}

/// Test: code table naming an unknown kind is rejected.
#[test]
fn code_map_unknown_kind() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("codes.toml");
    fs::write(&path, "[exact]\n\"42\" = \"NoSuchKind\"\n").unwrap();

    let err = load_code_map(&path, standard()).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::Taxonomy(HierarchyError::UnknownKind(ref name)) if name == "NoSuchKind"
    ));
}
