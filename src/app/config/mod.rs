// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[zoom]` - Double-tap target scale and zoom button step
//! - `[animation]` - Linear and spring curve tunables
//!
//! Out-of-range values are accepted on load and clamped when converted to
//! [`TransformSettings`].
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass `--config-dir` or set the `PINCH_LENS_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use pinch_lens::app::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.general.language = Some("fr".to_string());
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::ui::state::{ButtonStep, Easing, TransformSettings, ZoomScale};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

/// I18n key of the warning returned when an existing file cannot be used.
pub const LOAD_WARNING_KEY: &str = "config-warning-unreadable";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: default_theme_mode(),
        }
    }
}

/// Zoom gesture settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ZoomConfig {
    /// Scale reached when double tapping the fitted image.
    #[serde(
        default = "default_double_tap_scale",
        skip_serializing_if = "Option::is_none"
    )]
    pub double_tap_scale: Option<f32>,

    /// Scale increment of the zoom buttons.
    #[serde(
        default = "default_button_step",
        skip_serializing_if = "Option::is_none"
    )]
    pub button_step: Option<f32>,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            double_tap_scale: default_double_tap_scale(),
            button_step: default_button_step(),
        }
    }
}

/// Animation curve settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnimationConfig {
    /// Duration of the linear curve used while dragging and pinching.
    #[serde(
        default = "default_linear_duration_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub linear_duration_ms: Option<u32>,

    /// Period of the spring used for snaps.
    #[serde(
        default = "default_spring_response_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub spring_response_ms: Option<u32>,

    /// Damping fraction of the spring (1.0 is critically damped).
    #[serde(
        default = "default_spring_damping",
        skip_serializing_if = "Option::is_none"
    )]
    pub spring_damping: Option<f32>,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            linear_duration_ms: default_linear_duration_ms(),
            spring_response_ms: default_spring_response_ms(),
            spring_damping: default_spring_damping(),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Zoom gesture settings.
    #[serde(default)]
    pub zoom: ZoomConfig,

    /// Animation curve settings.
    #[serde(default)]
    pub animation: AnimationConfig,
}

impl Config {
    /// Builds the controller tunables, clamping every value to its range.
    #[must_use]
    pub fn transform_settings(&self) -> TransformSettings {
        let double_tap_scale = ZoomScale::new(
            self.zoom
                .double_tap_scale
                .unwrap_or(DEFAULT_DOUBLE_TAP_SCALE),
        );
        let button_step = ButtonStep::new(self.zoom.button_step.unwrap_or(DEFAULT_BUTTON_STEP));

        let linear_ms = self
            .animation
            .linear_duration_ms
            .unwrap_or(DEFAULT_LINEAR_DURATION_MS)
            .clamp(MIN_LINEAR_DURATION_MS, MAX_LINEAR_DURATION_MS);
        let response_ms = self
            .animation
            .spring_response_ms
            .unwrap_or(DEFAULT_SPRING_RESPONSE_MS)
            .clamp(MIN_SPRING_RESPONSE_MS, MAX_SPRING_RESPONSE_MS);
        let damping = self
            .animation
            .spring_damping
            .filter(|value| value.is_finite())
            .unwrap_or(DEFAULT_SPRING_DAMPING)
            .clamp(MIN_SPRING_DAMPING, MAX_SPRING_DAMPING);

        TransformSettings {
            double_tap_scale,
            button_step,
            spring: Easing::Spring {
                response: Duration::from_millis(u64::from(response_ms)),
                damping_fraction: damping,
            },
            linear: Easing::Linear {
                duration: Duration::from_millis(u64::from(linear_ms)),
            },
        }
    }
}

// =============================================================================
// Serde Default Helpers
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_double_tap_scale() -> Option<f32> {
    Some(DEFAULT_DOUBLE_TAP_SCALE)
}

fn default_button_step() -> Option<f32> {
    Some(DEFAULT_BUTTON_STEP)
}

fn default_linear_duration_ms() -> Option<u32> {
    Some(DEFAULT_LINEAR_DURATION_MS)
}

fn default_spring_response_ms() -> Option<u32> {
    Some(DEFAULT_SPRING_RESPONSE_MS)
}

fn default_spring_damping() -> Option<f32> {
    Some(DEFAULT_SPRING_DAMPING)
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with the i18n key of a warning explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    log::warn!("Ignoring {}: {err}", path.display());
                    return (Config::default(), Some(LOAD_WARNING_KEY.to_string()));
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
