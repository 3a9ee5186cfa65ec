//! Configuration and settings management for CollageKit
//!
//! Provides configuration file handling and validation for the layout editor.
//! Supports JSON and TOML file formats stored in a platform-specific directory.
//!
//! Configuration is organized into logical sections:
//! - Snapping (threshold, guide tolerance)
//! - Sizing (item size bounds)
//! - Breakpoints (surface width per breakpoint)

use std::path::{Path, PathBuf};

use collagekit_core::{Breakpoint, Extent, Span};
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, SettingsError, SettingsResult};

/// File name used inside the platform config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Snapping settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnappingSettings {
    /// Whether moves snap to neighbours at all
    pub enabled: bool,
    /// Snap distance in layout pixels
    pub threshold: f64,
    /// Alignment distance under which guides are drawn
    pub guide_tolerance: f64,
}

impl Default for SnappingSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            threshold: 8.0,
            guide_tolerance: 0.5,
        }
    }
}

/// Item size bounds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SizingSettings {
    /// Smallest width and height an item may be resized or cropped to
    pub min_item_size: f64,
    /// Widest an item may grow, as a fraction of the surface width
    pub max_item_fraction: f64,
}

impl Default for SizingSettings {
    fn default() -> Self {
        Self {
            min_item_size: 40.0,
            max_item_fraction: 1.0,
        }
    }
}

/// Surface width per breakpoint, in layout pixels
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BreakpointSettings {
    pub desktop: f64,
    pub tablet: f64,
    pub mobile: f64,
}

impl Default for BreakpointSettings {
    fn default() -> Self {
        Self {
            desktop: 1280.0,
            tablet: 768.0,
            mobile: 390.0,
        }
    }
}

impl BreakpointSettings {
    pub fn width(&self, breakpoint: Breakpoint) -> f64 {
        match breakpoint {
            Breakpoint::Desktop => self.desktop,
            Breakpoint::Tablet => self.tablet,
            Breakpoint::Mobile => self.mobile,
        }
    }
}

/// Complete editor configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Snapping settings
    pub snapping: SnappingSettings,
    /// Item size bounds
    pub sizing: SizingSettings,
    /// Breakpoint widths
    pub breakpoints: BreakpointSettings,
    /// Number of undo steps kept
    pub history_limit: usize,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            snapping: SnappingSettings::default(),
            sizing: SizingSettings::default(),
            breakpoints: BreakpointSettings::default(),
            history_limit: 100,
        }
    }
}

enum Format {
    Json,
    Toml,
}

fn format_of(path: &Path) -> SettingsResult<Format> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => Ok(Format::Json),
        Some("toml") => Ok(Format::Toml),
        Some(other) => Err(ConfigError::UnsupportedFormat(other.to_string()).into()),
        None => Err(ConfigError::MissingExtension.into()),
    }
}

impl EditorConfig {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = format_of(path)?;
        let content = std::fs::read_to_string(path)?;
        let config: Self = match format {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };
        config.validate()?;
        tracing::debug!("Loaded editor config from {}", path.display());
        Ok(config)
    }

    /// Load config from file, falling back to defaults when the file is missing
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        if !path.exists() {
            tracing::info!(
                "No config at {}, using defaults",
                path.display()
            );
            return Ok(Self::default());
        }
        Self::load_from_file(path)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;
        let content = match format_of(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        tracing::debug!("Saved editor config to {}", path.display());
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        let snapping = &self.snapping;
        if !snapping.threshold.is_finite() || snapping.threshold < 0.0 {
            return Err(SettingsError::invalid(
                "snapping.threshold",
                "must be finite and >= 0",
            ));
        }
        if !snapping.guide_tolerance.is_finite() || snapping.guide_tolerance < 0.0 {
            return Err(SettingsError::invalid(
                "snapping.guide_tolerance",
                "must be finite and >= 0",
            ));
        }

        let sizing = &self.sizing;
        if !sizing.min_item_size.is_finite() || sizing.min_item_size <= 0.0 {
            return Err(SettingsError::invalid(
                "sizing.min_item_size",
                "must be finite and > 0",
            ));
        }
        if !(sizing.max_item_fraction > 0.0 && sizing.max_item_fraction <= 1.0) {
            return Err(SettingsError::invalid(
                "sizing.max_item_fraction",
                "must be in (0, 1]",
            ));
        }

        for breakpoint in Breakpoint::ALL {
            let width = self.breakpoints.width(breakpoint);
            if !width.is_finite() || width <= 0.0 {
                return Err(SettingsError::invalid(
                    format!("breakpoints.{}", breakpoint),
                    "must be finite and > 0",
                ));
            }
            if width * sizing.max_item_fraction < sizing.min_item_size {
                return Err(SettingsError::invalid(
                    format!("breakpoints.{}", breakpoint),
                    "too narrow for the minimum item size",
                ));
            }
        }
        if self.breakpoints.desktop < self.breakpoints.tablet
            || self.breakpoints.tablet < self.breakpoints.mobile
        {
            return Err(SettingsError::invalid(
                "breakpoints",
                "widths must not increase from desktop to mobile",
            ));
        }

        if self.history_limit == 0 {
            return Err(SettingsError::invalid("history_limit", "must be > 0"));
        }
        Ok(())
    }

    /// Width and height bounds for items on a surface `surface_width` wide.
    ///
    /// Height is bounded below only.
    pub fn size_extent(&self, surface_width: f64) -> Extent {
        let min = self.sizing.min_item_size;
        let max = (surface_width * self.sizing.max_item_fraction).max(min);
        Extent::new(Span::new(min, max), Span::at_least(min))
    }

    /// Snap distance, zero when snapping is disabled.
    pub fn snap_threshold(&self) -> f64 {
        if self.snapping.enabled {
            self.snapping.threshold
        } else {
            0.0
        }
    }
}

/// Platform config file location, e.g. `~/.config/collagekit/config.toml`.
pub fn default_config_path() -> SettingsResult<PathBuf> {
    dirs::config_dir()
        .map(|dir| dir.join("collagekit").join(CONFIG_FILE_NAME))
        .ok_or_else(|| {
            SettingsError::ConfigDirectory("no platform config directory".to_string())
        })
}
