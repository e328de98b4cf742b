//! Index configuration module.
//!
//! Handles loading and validating the optional `config.toml` in the content
//! root. User values are merged on top of stock defaults, unknown keys are
//! rejected to catch typos early, and the merged result is validated before
//! any file is read.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! content_ext = "mdx"     # Extension (without dot) that marks content files
//! encoding = "utf-8"      # Encoding tag for reading content files
//! heading_marker = "#"    # First character of a file's title line
//! ```
//!
//! The content root itself is not configured here — it's the `--source`
//! CLI flag, since `config.toml` lives inside it.

use crate::reader::Encoding;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Index configuration loaded from `config.toml`.
///
/// All fields have defaults; a config file need only override what it wants.
/// Unknown keys are rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IndexConfig {
    /// Extension (without the dot) that marks a file as tutorial content.
    pub content_ext: String,
    /// Encoding tag used to read content files. Must be in the recognized
    /// set (`utf-8`, `utf8`).
    pub encoding: String,
    /// The character a content file's first line must start with; the rest
    /// of that line is the tutorial's title.
    pub heading_marker: char,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            content_ext: "mdx".to_string(),
            encoding: "utf-8".to_string(),
            heading_marker: '#',
        }
    }
}

impl IndexConfig {
    /// Validate config values before the pipeline runs.
    ///
    /// A bad encoding tag fails here, at load time, rather than at the first
    /// file read.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.content_ext.is_empty() {
            return Err(ConfigError::Validation("content_ext must not be empty".into()));
        }
        if self.content_ext.starts_with('.') {
            return Err(ConfigError::Validation(
                "content_ext must not include the leading dot".into(),
            ));
        }
        if self.heading_marker.is_whitespace() {
            return Err(ConfigError::Validation(
                "heading_marker must not be whitespace".into(),
            ));
        }
        if Encoding::from_tag(&self.encoding).is_err() {
            return Err(ConfigError::Validation(format!(
                "unrecognized encoding tag '{}'",
                self.encoding
            )));
        }
        Ok(())
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// The canonical representation of all defaults, used as the base layer for
/// merging user overrides on top.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(IndexConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// Tables merge key-by-key; non-table overlay values replace base values;
/// base keys absent from the overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load a `config.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if no `config.toml` exists there.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = path.join("config.toml");
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<IndexConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: IndexConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `config.toml` in the content root.
///
/// Merges user values on top of stock defaults, rejects unknown keys, and
/// validates the result. Missing file means pure defaults.
pub fn load_config(root: &Path) -> Result<IndexConfig, ConfigError> {
    let base = stock_defaults_value();
    let overlay = load_raw_config(root)?;
    resolve_config(base, overlay)
}

/// Returns a fully-commented stock `config.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# mdx-index Configuration
# =======================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
#
# Place this file in the content root (next to your tutorial directories).
# Unknown keys will cause an error.

# Extension (without the dot) that marks a file as tutorial content.
# Files with any other extension are ignored by the indexer.
content_ext = "mdx"

# Encoding tag used to read content files.
# Recognized tags: "utf-8", "utf8".
encoding = "utf-8"

# The character a content file's first line must start with. The rest of
# that line becomes the tutorial's title, e.g.:
#   # Command Pattern
heading_marker = "#"
"##
}
