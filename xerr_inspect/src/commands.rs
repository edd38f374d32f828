//! Subcommands of `xerr_inspect`.

use clap::{Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};
use xerr::codes::ErrorCodeMap;
use xerr::config::{ConfigError, ConfigLoader};
use xerr::error::HierarchyError;
use xerr::hierarchy::ErrorHierarchy;

use crate::render::{max_depth, render_chain, render_tree};

/// Error type for command execution.
#[derive(Debug, Error)]
pub enum InspectError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Taxonomy(#[from] HierarchyError),

    #[error("Export failed: {0}")]
    Export(String),

    /// `classify` needs a code table from `--codes` or `[taxonomy] codes`.
    #[error("No code table given (use --codes or [taxonomy] codes in the config)")]
    MissingCodes,
}

/// Output format of `export`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Toml,
    Json,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Print the hierarchy as an indented tree.
    Tree,

    /// Print a kind followed by its ancestors up to the root.
    Ancestors {
        /// Kind name, e.g. RateLimitExceeded.
        name: String,
    },

    /// Check whether KIND is ANCESTOR or descends from it (exit status 1 if not).
    IsA { kind: String, ancestor: String },

    /// Print the taxonomy as a nested literal.
    Export {
        #[arg(long, value_enum, default_value_t = ExportFormat::Toml)]
        format: ExportFormat,
    },

    /// Classify an exchange error code and/or message with a code table.
    Classify {
        /// Code table TOML (overrides `[taxonomy] codes`).
        #[arg(long, value_name = "FILE")]
        codes: Option<PathBuf>,

        /// Exchange error code.
        #[arg(long)]
        code: Option<String>,

        /// Exchange error message.
        #[arg(long, default_value = "")]
        message: String,
    },

    /// Validate the taxonomy and, if given, a code table against it.
    Check {
        #[arg(long, value_name = "FILE")]
        codes: Option<PathBuf>,
    },
}

/// Rendered command result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub output: String,
    /// Maps to the process exit status.
    pub success: bool,
}

impl Outcome {
    fn ok(output: String) -> Self {
        Self {
            output,
            success: true,
        }
    }
}

/// Run `command` against `hierarchy`.
///
/// `default_codes` is the code table configured in `inspect.toml`, used
/// when the command has no `--codes` of its own.
pub fn execute(
    command: &Command,
    hierarchy: &ErrorHierarchy,
    default_codes: Option<&Path>,
) -> Result<Outcome, InspectError> {
    match command {
        Command::Tree => Ok(Outcome::ok(render_tree(hierarchy))),

        Command::Ancestors { name } => {
            let id = hierarchy.resolve(name)?;
            Ok(Outcome::ok(format!("{}\n", render_chain(hierarchy, id))))
        }

        Command::IsA { kind, ancestor } => {
            let result = hierarchy.is_a_name(kind, ancestor)?;
            debug!(kind = %kind, ancestor = %ancestor, result, "is-a query");
            Ok(Outcome {
                output: format!("{result}\n"),
                success: result,
            })
        }

        Command::Export { format } => export(hierarchy, *format).map(Outcome::ok),

        Command::Classify {
            codes,
            code,
            message,
        } => {
            let path = codes.as_deref().or(default_codes).ok_or(InspectError::MissingCodes)?;
            let map = ErrorCodeMap::load(path)?;
            let resolved = map.resolve(hierarchy)?;
            match resolved.classify(code.as_deref(), message) {
                Some(id) => Ok(Outcome::ok(format!("{}\n", render_chain(hierarchy, id)))),
                None => Ok(Outcome {
                    output: "unclassified\n".to_string(),
                    success: false,
                }),
            }
        }

        Command::Check { codes } => {
            let mut output = format!(
                "ok: {} kinds, {} leaves, max depth {}, root {}\n",
                hierarchy.len(),
                hierarchy.leaves().count(),
                max_depth(hierarchy),
                hierarchy.root().name()
            );
            if let Some(path) = codes.as_deref().or(default_codes) {
                let resolved = ErrorCodeMap::load(path)?.resolve(hierarchy)?;
                info!(path = %path.display(), entries = resolved.len(), "code table valid");
                output.push_str(&format!("ok: {} code entries\n", resolved.len()));
            }
            Ok(Outcome::ok(output))
        }
    }
}

/// Serialize the hierarchy back into its nested literal.
pub fn export(hierarchy: &ErrorHierarchy, format: ExportFormat) -> Result<String, InspectError> {
    let tree = hierarchy.to_tree();
    match format {
        ExportFormat::Toml => {
            toml::to_string(&tree).map_err(|e| InspectError::Export(e.to_string()))
        }
        ExportFormat::Json => serde_json::to_string_pretty(&tree)
            .map(|mut s| {
                s.push('\n');
                s
            })
            .map_err(|e| InspectError::Export(e.to_string())),
    }
}
