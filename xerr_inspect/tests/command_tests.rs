//! Inspector command tests.
//!
//! Runs `execute()` for every subcommand against the standard taxonomy and
//! against small file-backed trees and code tables.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use xerr::error::HierarchyError;
use xerr::materialize::materialize;
use xerr::standard::standard;
use xerr::tree::ErrorTreeNode;
use xerr_inspect::commands::{execute, export, Command, ExportFormat, InspectError};

fn sample_codes() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../xerr_common/data/sample_codes.toml")
}

fn classify(code: Option<&str>, message: &str) -> Command {
    Command::Classify {
        codes: Some(sample_codes()),
        code: code.map(str::to_string),
        message: message.to_string(),
    }
}

// ─── Queries ────────────────────────────────────────────────────────

#[test]
fn tree_lists_every_kind() {
    let outcome = execute(&Command::Tree, standard(), None).unwrap();
    assert!(outcome.success);
    assert!(outcome.output.starts_with("BaseError\n"));
    assert_eq!(outcome.output.lines().count(), 34);
    assert!(outcome.output.contains("└── NetworkError\n"));
}

#[test]
fn ancestors_prints_chain() {
    let cmd = Command::Ancestors {
        name: "RateLimitExceeded".to_string(),
    };
    let outcome = execute(&cmd, standard(), None).unwrap();
    assert_eq!(
        outcome.output,
        "RateLimitExceeded → DDoSProtection → NetworkError → BaseError\n"
    );
}

#[test]
fn ancestors_unknown_kind() {
    let cmd = Command::Ancestors {
        name: "NoSuchKind".to_string(),
    };
    let err = execute(&cmd, standard(), None).unwrap_err();
    assert!(matches!(
        err,
        InspectError::Taxonomy(HierarchyError::UnknownKind(ref name)) if name == "NoSuchKind"
    ));
}

#[test]
fn is_a_sets_success() {
    let yes = Command::IsA {
        kind: "AccountNotEnabled".to_string(),
        ancestor: "ExchangeError".to_string(),
    };
    let outcome = execute(&yes, standard(), None).unwrap();
    assert_eq!(outcome.output, "true\n");
    assert!(outcome.success);

    let no = Command::IsA {
        kind: "AccountNotEnabled".to_string(),
        ancestor: "NetworkError".to_string(),
    };
    let outcome = execute(&no, standard(), None).unwrap();
    assert_eq!(outcome.output, "false\n");
    assert!(!outcome.success);
}

// ─── Export ─────────────────────────────────────────────────────────

#[test]
fn json_export_round_trips() {
    let json = export(standard(), ExportFormat::Json).unwrap();
    let tree: ErrorTreeNode = serde_json::from_str(&json).unwrap();
    assert_eq!(tree, standard().to_tree());
}

#[test]
fn toml_export_reloads() {
    let text = export(standard(), ExportFormat::Toml).unwrap();
    assert!(text.contains("OrderImmediatelyFillable"));

    let tree: ErrorTreeNode = toml::from_str(&text).unwrap();
    let h = materialize(&tree).unwrap();
    assert_eq!(h.len(), standard().len());
    assert!(h.is_a_name("OnMaintenance", "NetworkError").unwrap());
}

// ─── Classification ─────────────────────────────────────────────────

#[test]
fn classify_by_code() {
    let outcome = execute(&classify(Some("-2011"), "Unknown order sent."), standard(), None).unwrap();
    assert!(outcome.success);
    assert_eq!(
        outcome.output,
        "OrderNotFound → InvalidOrder → ExchangeError → BaseError\n"
    );
}

#[test]
fn classify_by_broad_message() {
    let outcome = execute(
        &classify(None, "System is under maintenance."),
        standard(),
        None,
    )
    .unwrap();
    assert!(outcome.output.starts_with("OnMaintenance → ExchangeNotAvailable"));
}

#[test]
fn classify_unmatched() {
    let outcome = execute(&classify(Some("-9999"), "something odd"), standard(), None).unwrap();
    assert_eq!(outcome.output, "unclassified\n");
    assert!(!outcome.success);
}

#[test]
fn classify_uses_configured_codes() {
    let cmd = Command::Classify {
        codes: None,
        code: Some("-1003".to_string()),
        message: String::new(),
    };
    let codes = sample_codes();
    let outcome = execute(&cmd, standard(), Some(codes.as_path())).unwrap();
    assert!(outcome.output.starts_with("RateLimitExceeded"));
}

#[test]
fn classify_without_codes() {
    let cmd = Command::Classify {
        codes: None,
        code: Some("-1003".to_string()),
        message: String::new(),
    };
    let err = execute(&cmd, standard(), None).unwrap_err();
    assert!(matches!(err, InspectError::MissingCodes));
}

// ─── Check ──────────────────────────────────────────────────────────

#[test]
fn check_standard() {
    let outcome = execute(&Command::Check { codes: None }, standard(), None).unwrap();
    assert_eq!(
        outcome.output,
        "ok: 34 kinds, 23 leaves, max depth 4, root BaseError\n"
    );
}

#[test]
fn check_with_code_table() {
    let cmd = Command::Check {
        codes: Some(sample_codes()),
    };
    let outcome = execute(&cmd, standard(), None).unwrap();
    assert!(outcome.success);
    assert!(outcome.output.ends_with("ok: 15 code entries\n"));
}

#[test]
fn check_rejects_code_table_for_other_taxonomy() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("codes.toml");
    fs::write(&path, "[broad]\n\"gateway\" = \"GatewayDown\"\n").unwrap();

    let cmd = Command::Check { codes: Some(path) };
    let err = execute(&cmd, standard(), None).unwrap_err();
    assert!(err.to_string().contains("GatewayDown"), "{err}");
}
