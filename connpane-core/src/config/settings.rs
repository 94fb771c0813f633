//! User settings for the connections pane
//!
//! Stored as TOML. Every field has a default so partial files are valid.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Top-level settings file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaneSettings {
    /// Pane behaviour
    #[serde(default)]
    pub pane: PaneBehaviorSettings,
    /// Logging output
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Pane behaviour settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaneBehaviorSettings {
    /// Reopen the last explored connection when the pane loads
    #[serde(default = "default_true")]
    pub restore_explored_connection: bool,
    /// Ask for confirmation before removing a connection
    #[serde(default = "default_true")]
    pub confirm_removal: bool,
}

impl Default for PaneBehaviorSettings {
    fn default() -> Self {
        Self {
            restore_explored_connection: true,
            confirm_removal: true,
        }
    }
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Log level name (`error`, `warn`, `info`, `debug`, `trace`)
    #[serde(default = "default_level")]
    pub level: String,
    /// Custom `EnvFilter` directive, overrides `level` when set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
    /// Append log lines to this file instead of stderr
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_level(),
            filter: None,
            file: None,
        }
    }
}

const fn default_true() -> bool {
    true
}

fn default_level() -> String {
    "info".to_string()
}
