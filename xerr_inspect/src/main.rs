//! # XERR Inspect
//!
//! Loads an exchange error taxonomy, validates it, and answers queries
//! against it.
//!
//! The taxonomy comes from, in order of preference:
//! - `--tree <FILE>` (TOML, or JSON by `.json` extension)
//! - `[taxonomy] tree` in the `--config` file
//! - the built-in standard taxonomy
//!
//! A malformed or duplicate-laden tree is reported as FATAL with exit
//! status 1, which makes `xerr_inspect --tree FILE check` usable as a
//! startup gate for hand-authored trees.

use clap::Parser;
use std::path::PathBuf;
use std::process;
use tracing::{debug, error, info, Level};
use tracing_subscriber::EnvFilter;
use xerr::config::{load_hierarchy, LogLevel};
use xerr::hierarchy::ErrorHierarchy;
use xerr::standard::standard;
use xerr_inspect::commands::{execute, Command};
use xerr_inspect::config::InspectConfig;

/// XERR Inspect — exchange error taxonomy tool
#[derive(Parser, Debug)]
#[command(name = "xerr_inspect")]
#[command(author = "RTS007")]
#[command(version)]
#[command(about = "Inspect and validate exchange error taxonomies")]
struct Args {
    /// Taxonomy tree file (TOML or JSON). Defaults to the built-in taxonomy.
    #[arg(long, value_name = "FILE", global = true)]
    tree: Option<PathBuf>,

    /// Path to inspect.toml.
    #[arg(long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging (DEBUG level).
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output logs in JSON format.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

fn main() {
    let args = Args::parse();

    let config = args.config.as_deref().map(InspectConfig::load_from);
    let configured_level = match &config {
        Some(Ok(c)) => Some(c.shared.log_level),
        _ => None,
    };
    setup_tracing(&args, configured_level);

    debug!("XERR Inspect v{} starting...", env!("CARGO_PKG_VERSION"));

    let config = match config.transpose() {
        Ok(config) => config,
        Err(e) => {
            error!("FATAL: failed to load config: {e}");
            process::exit(1);
        }
    };

    match run(&args, config.as_ref()) {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(e) => {
            error!("FATAL: {e}");
            process::exit(1);
        }
    }
}

fn run(args: &Args, config: Option<&InspectConfig>) -> Result<bool, Box<dyn std::error::Error>> {
    let taxonomy = config.map(|c| &c.taxonomy);
    let tree_path = args
        .tree
        .clone()
        .or_else(|| taxonomy.and_then(|t| t.tree.clone()));

    let loaded: ErrorHierarchy;
    let hierarchy = match tree_path {
        Some(path) => {
            info!("Loading taxonomy from {}", path.display());
            loaded = load_hierarchy(&path)?;
            &loaded
        }
        None => {
            debug!("Using built-in standard taxonomy");
            standard()
        }
    };
    info!(
        "Taxonomy OK: root={}, kinds={}",
        hierarchy.root().name(),
        hierarchy.len()
    );

    let default_codes = taxonomy.and_then(|t| t.codes.as_deref());
    let outcome = execute(&args.command, hierarchy, default_codes)?;
    print!("{}", outcome.output);
    Ok(outcome.success)
}

fn setup_tracing(args: &Args, configured: Option<LogLevel>) {
    let level = if args.verbose {
        Level::DEBUG
    } else {
        configured.map_or(Level::WARN, Level::from)
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    // stdout carries command output; logs go to stderr.
    if args.json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .compact()
            .init();
    }
}
