//! CollageKit Settings Crate
//!
//! Handles editor configuration and settings persistence.

pub mod config;
pub mod error;

pub use config::{
    default_config_path, BreakpointSettings, EditorConfig, SizingSettings, SnappingSettings,
    CONFIG_FILE_NAME,
};
pub use error::{ConfigError, SettingsError, SettingsResult};
