//! Configuration management for `ConnPane`
//!
//! This module provides the `ConfigManager` for locating configuration files
//! and loading/saving the TOML settings.

mod manager;
mod settings;

pub use manager::{CONFIG_DIR_ENV, ConfigManager};
pub use settings::{LoggingSettings, PaneBehaviorSettings, PaneSettings};
