// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, read from an
//! optional `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language
//! - `[viewer]` - Zoom limits and wheel step
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()` with an explicit path
//! 2. Pass a directory to `load_with_override()` (the `--config-dir` flag)
//! 3. Set the `YF_IMAGE_DECK_CONFIG_DIR` environment variable
//! 4. Falls back to the platform-specific config directory
//!
//! The viewer never writes this file; `save_to_path()` exists for tooling
//! and tests.
//!
//! # Examples
//!
//! ```no_run
//! use yf_image_deck::config;
//!
//! let (config, warning) = config::load();
//! if let Some(warning) = warning {
//!     eprintln!("{warning}");
//! }
//! let limits = config.viewer.zoom_limits();
//! assert!(limits.min() <= 1.0);
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::ui::state::ZoomLimits;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "zh-CN").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Zoom behaviour of the image viewer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ViewerConfig {
    #[serde(default = "default_min_scale", skip_serializing_if = "Option::is_none")]
    pub min_scale: Option<f32>,

    #[serde(default = "default_max_scale", skip_serializing_if = "Option::is_none")]
    pub max_scale: Option<f32>,

    /// Multiplicative step per wheel notch; must be greater than 1.
    #[serde(
        default = "default_zoom_factor",
        skip_serializing_if = "Option::is_none"
    )]
    pub zoom_factor: Option<f32>,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            min_scale: default_min_scale(),
            max_scale: default_max_scale(),
            zoom_factor: default_zoom_factor(),
        }
    }
}

impl ViewerConfig {
    /// Builds the zoom limits described by this section.
    ///
    /// Missing values take their defaults. A combination that would break the
    /// viewer (for instance `min_scale > 1`) is rejected as a whole and the
    /// defaults are used instead.
    #[must_use]
    pub fn zoom_limits(&self) -> ZoomLimits {
        let min = self.min_scale.unwrap_or(DEFAULT_MIN_SCALE);
        let max = self.max_scale.unwrap_or(DEFAULT_MAX_SCALE);
        let factor = self.zoom_factor.unwrap_or(DEFAULT_ZOOM_FACTOR);

        ZoomLimits::new(min, max, factor).unwrap_or_else(|| {
            log::warn!(
                "ignoring invalid zoom settings (min_scale={min}, max_scale={max}, zoom_factor={factor}); using defaults"
            );
            ZoomLimits::default()
        })
    }
}

// =============================================================================
// Main Config Struct
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub viewer: ViewerConfig,
}

fn default_min_scale() -> Option<f32> {
    Some(DEFAULT_MIN_SCALE)
}

fn default_max_scale() -> Option<f32> {
    Some(DEFAULT_MAX_SCALE)
}

fn default_zoom_factor() -> Option<f32> {
    Some(DEFAULT_ZOOM_FACTOR)
}

// =============================================================================
// Load Functions
// =============================================================================

/// Returns the config file path with an optional directory override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default location.
///
/// Returns a tuple of (config, optional_warning). A missing file is not an
/// error; an unreadable or malformed one yields defaults plus a warning.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    let Some(path) = get_config_path_with_override(base_dir) else {
        return (Config::default(), None);
    };

    if !path.exists() {
        log::debug!("no config file at {}, using defaults", path.display());
        return (Config::default(), None);
    }

    match load_from_path(&path) {
        Ok(config) => {
            log::info!("loaded config from {}", path.display());
            (config, None)
        }
        Err(err) => {
            let warning = format!("Failed to read {}: {err}", path.display());
            log::warn!("{warning}");
            (Config::default(), Some(warning))
        }
    }
}

/// Reads and parses a config file at an explicit path.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be read and [`Error::Config`] if
/// it is not valid TOML for this schema.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config = toml::from_str(&content)?;
    Ok(config)
}

/// Writes a config file, creating parent directories as needed.
///
/// # Errors
///
/// Returns an error if serialization or any filesystem operation fails.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}
