//! Gallery configuration module.
//!
//! Handles loading, validating, and merging `config.toml`. Stock defaults are
//! the base layer; a user `config.toml` next to the catalog overrides only the
//! keys it names.
//!
//! ## Config File Location
//!
//! ```text
//! gallery/
//! ├── config.toml      # Optional, overrides stock defaults
//! └── catalog.json     # Image records (path configurable)
//! ```
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! catalog = "catalog.json"  # Catalog file, relative to the config directory
//!
//! [search]
//! popular_tags = 8          # Tags suggested under the search bar
//!
//! [filters]
//! # Curated chips in the filter bar; other categories go under "More".
//! main_categories = ["All Images", "Landscape", "Mountains", "Forest",
//!                    "Water", "Wildlife", "Adventure", "Sunrise/Sunset"]
//! ```
//!
//! ## Partial Configuration
//!
//! ```toml
//! # Only change the number of suggested tags
//! [search]
//! popular_tags = 12
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use crate::filter::ALL_IMAGES;
use crate::search::DEFAULT_POPULAR_TAGS;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
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

/// Gallery configuration loaded from `config.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GalleryConfig {
    /// Catalog file, relative to the directory holding `config.toml`.
    #[serde(default = "default_catalog")]
    pub catalog: String,
    /// Search bar settings.
    pub search: SearchConfig,
    /// Filter bar settings.
    pub filters: FiltersConfig,
}

fn default_catalog() -> String {
    "catalog.json".to_string()
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            catalog: default_catalog(),
            search: SearchConfig::default(),
            filters: FiltersConfig::default(),
        }
    }
}

impl GalleryConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.catalog.trim().is_empty() {
            return Err(ConfigError::Validation("catalog must not be empty".into()));
        }
        if self.search.popular_tags == 0 {
            return Err(ConfigError::Validation(
                "search.popular_tags must be at least 1".into(),
            ));
        }
        if self.filters.main_categories.is_empty() {
            return Err(ConfigError::Validation(
                "filters.main_categories must not be empty".into(),
            ));
        }
        let mut seen = HashSet::new();
        for category in &self.filters.main_categories {
            if !seen.insert(category.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "filters.main_categories contains {category:?} twice"
                )));
            }
        }
        Ok(())
    }

    /// Resolve the catalog path against the config directory.
    pub fn catalog_path(&self, root: &Path) -> PathBuf {
        root.join(&self.catalog)
    }
}

/// Search bar settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchConfig {
    /// How many of the most frequent tags to suggest.
    pub popular_tags: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            popular_tags: DEFAULT_POPULAR_TAGS,
        }
    }
}

/// Filter bar settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FiltersConfig {
    /// Categories always shown as chips, in display order.
    pub main_categories: Vec<String>,
}

impl Default for FiltersConfig {
    fn default() -> Self {
        Self {
            main_categories: [
                ALL_IMAGES,
                "Landscape",
                "Mountains",
                "Forest",
                "Water",
                "Wildlife",
                "Adventure",
                "Sunrise/Sunset",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        }
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(GalleryConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay (including arrays) replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
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
/// Returns `Ok(None)` if no `config.toml` exists in the directory.
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
) -> Result<GalleryConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: GalleryConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `config.toml` in the given directory.
pub fn load_config(root: &Path) -> Result<GalleryConfig, ConfigError> {
    let overlay = load_raw_config(root)?;
    if overlay.is_some() {
        log::debug!("loaded config.toml from {}", root.display());
    }
    resolve_config(stock_defaults_value(), overlay)
}

/// Returns a fully-commented stock `config.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Trail Gallery Configuration
# ===========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
# Unknown keys will cause an error.

# Catalog file (JSON array of image records), relative to this file.
catalog = "catalog.json"

# ---------------------------------------------------------------------------
# Search
# ---------------------------------------------------------------------------
[search]
# Number of most frequent tags suggested under the search bar.
popular_tags = 8

# ---------------------------------------------------------------------------
# Filters
# ---------------------------------------------------------------------------
[filters]
# Categories always shown as chips in the filter bar, in order.
# Every other category found in the catalog tags is listed under "More".
# "All Images" clears the category filter.
main_categories = [
    "All Images",
    "Landscape",
    "Mountains",
    "Forest",
    "Water",
    "Wildlife",
    "Adventure",
    "Sunrise/Sunset",
]
"##
}
