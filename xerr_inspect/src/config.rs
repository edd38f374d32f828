//! Inspector configuration.
//!
//! # TOML Example
//!
//! ```toml
//! [shared]
//! log_level = "debug"
//! service_name = "xerr-inspect"
//!
//! [taxonomy]
//! tree = "taxonomy/venue.toml"
//! codes = "taxonomy/venue_codes.toml"
//! ```
//!
//! Relative paths in `[taxonomy]` resolve against the config file's directory.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use xerr::config::{ConfigError, ConfigLoader, SharedConfig};

/// Top-level `inspect.toml`.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InspectConfig {
    pub shared: SharedConfig,
    #[serde(default)]
    pub taxonomy: TaxonomySection,
}

/// Optional taxonomy sources. Built-in standard taxonomy when `tree` is unset.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TaxonomySection {
    pub tree: Option<PathBuf>,
    pub codes: Option<PathBuf>,
}

impl InspectConfig {
    /// Load, validate, and resolve relative paths.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.shared.validate()?;
        if let Some(base) = path.parent() {
            config.taxonomy.resolve_relative(base);
        }
        Ok(config)
    }
}

impl TaxonomySection {
    fn resolve_relative(&mut self, base: &Path) {
        for path in [&mut self.tree, &mut self.codes].into_iter().flatten() {
            if path.is_relative() {
                *path = base.join(&*path);
            }
        }
    }
}
