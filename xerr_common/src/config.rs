//! Configuration loading traits and types.
//!
//! This module provides a standardized way to load TOML configuration files,
//! tree files and exchange code tables.
//!
//! # Usage
//!
//! ```rust,no_run
//! use xerr_common::config::{ConfigLoader, SharedConfig, ConfigError};
//! use serde::Deserialize;
//! use std::path::Path;
//!
//! #[derive(Debug, Deserialize)]
//! struct MyAppConfig {
//!     shared: SharedConfig,
//!     venue: String,
//! }
//!
//! fn main() -> Result<(), ConfigError> {
//!     let config = MyAppConfig::load(Path::new("config.toml"))?;
//!     println!("Service: {}", config.shared.service_name);
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::debug;

use crate::codes::ErrorCodeMap;
use crate::error::HierarchyError;
use crate::hierarchy::ErrorHierarchy;
use crate::materialize::materialize;
use crate::tree::ErrorTreeNode;

/// Error type for configuration loading operations.
///
/// This enum represents all possible errors that can occur when loading
/// configuration files.
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    /// Configuration file not found at specified path.
    #[error("Configuration file not found")]
    FileNotFound,

    /// TOML or JSON parsing failed.
    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    /// Semantic validation failed.
    #[error("Configuration validation failed: {0}")]
    ValidationError(String),

    /// The loaded tree or code table does not fit the taxonomy rules.
    #[error("Invalid error taxonomy: {0}")]
    Taxonomy(#[from] HierarchyError),
}

/// Log level for application logging.
///
/// Represents the verbosity level of logging output.
/// Uses lowercase serde values for TOML compatibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Most verbose, detailed tracing information.
    Trace,
    /// Debug information useful during development.
    Debug,
    /// General information about application operation.
    #[default]
    Info,
    /// Warning messages for potentially problematic situations.
    Warn,
    /// Error messages for serious problems.
    Error,
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => Self::TRACE,
            LogLevel::Debug => Self::DEBUG,
            LogLevel::Info => Self::INFO,
            LogLevel::Warn => Self::WARN,
            LogLevel::Error => Self::ERROR,
        }
    }
}

/// Common configuration fields shared across applications.
///
/// # TOML Example
///
/// ```toml
/// [shared]
/// log_level = "debug"
/// service_name = "xerr-inspect"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SharedConfig {
    /// Logging verbosity level.
    #[serde(default)]
    pub log_level: LogLevel,

    /// Application instance identifier.
    pub service_name: String,
}

impl SharedConfig {
    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValidationError` if:
    /// - `service_name` is empty
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.service_name.is_empty() {
            return Err(ConfigError::ValidationError(
                "service_name cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Trait for loading configuration from TOML files.
///
/// This trait provides a default implementation that works with any type
/// implementing `serde::de::DeserializeOwned`.
///
/// # Contract
///
/// - Returns `ConfigError::FileNotFound` if the file does not exist
/// - Returns `ConfigError::ParseError` if TOML syntax is invalid
pub trait ConfigLoader: Sized + serde::de::DeserializeOwned {
    /// Load configuration from a TOML file.
    fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = read_file(path)?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }
}

// Blanket implementation for all types that implement DeserializeOwned.
// This allows any serde-deserializable struct to use ConfigLoader.
impl<T: serde::de::DeserializeOwned> ConfigLoader for T {}

fn read_file(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ConfigError::FileNotFound
        } else {
            ConfigError::ParseError(e.to_string())
        }
    })
}

// ─── Tree files ─────────────────────────────────────────────────────

/// On-disk format of a nested tree literal, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeFormat {
    Toml,
    Json,
}

impl TreeFormat {
    /// `.json` → JSON, anything else → TOML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Toml,
        }
    }
}

/// Load a nested tree literal from a TOML or JSON file.
///
/// Only parses; duplicate names are caught by [`load_hierarchy`].
pub fn load_tree(path: &Path) -> Result<ErrorTreeNode, ConfigError> {
    let content = read_file(path)?;
    let tree = match TreeFormat::from_path(path) {
        TreeFormat::Json => serde_json::from_str(&content)
            .map_err(|e| ConfigError::ParseError(e.to_string()))?,
        TreeFormat::Toml => {
            toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))?
        }
    };
    Ok(tree)
}

/// Load and materialize a tree file.
pub fn load_hierarchy(path: &Path) -> Result<ErrorHierarchy, ConfigError> {
    let tree = load_tree(path)?;
    let hierarchy = materialize(&tree)?;
    debug!(
        path = %path.display(),
        kinds = hierarchy.len(),
        "loaded error taxonomy"
    );
    Ok(hierarchy)
}

/// Load an exchange code table and check it against `hierarchy`.
pub fn load_code_map(path: &Path, hierarchy: &ErrorHierarchy) -> Result<ErrorCodeMap, ConfigError> {
    let map = ErrorCodeMap::load(path)?;
    map.resolve(hierarchy)?;
    Ok(map)
}
