//! Configuration directory management
//!
//! Resolves where the pane's files live and loads/saves the TOML settings
//! file.

use std::path::{Path, PathBuf};

use super::settings::PaneSettings;
use crate::error::{ConfigError, ConfigResult};

/// Environment variable overriding the configuration directory
pub const CONFIG_DIR_ENV: &str = "CONNPANE_CONFIG_DIR";

const APP_DIR_NAME: &str = "connpane";
const SETTINGS_FILE: &str = "config.toml";
const SESSION_FILE: &str = "session.json";
const CLIENT_STATE_FILE: &str = "client-state.json";

/// Locates and reads configuration files
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config_dir: PathBuf,
}

impl ConfigManager {
    /// Creates a manager for the default configuration directory
    ///
    /// Uses `$CONNPANE_CONFIG_DIR` when set, otherwise
    /// `<user config dir>/connpane`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NoConfigDir`] if no directory can be determined.
    pub fn new() -> ConfigResult<Self> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|v| !v.is_empty()) {
            return Ok(Self::with_config_dir(PathBuf::from(dir)));
        }
        let base = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(Self::with_config_dir(base.join(APP_DIR_NAME)))
    }

    /// Creates a manager for an explicit configuration directory
    #[must_use]
    pub const fn with_config_dir(config_dir: PathBuf) -> Self {
        Self { config_dir }
    }

    /// Configuration directory
    #[must_use]
    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// Path of the TOML settings file
    #[must_use]
    pub fn settings_path(&self) -> PathBuf {
        self.config_dir.join(SETTINGS_FILE)
    }

    /// Default path of the session snapshot
    #[must_use]
    pub fn session_file_path(&self) -> PathBuf {
        self.config_dir.join(SESSION_FILE)
    }

    /// Default path of the client state file
    #[must_use]
    pub fn state_file_path(&self) -> PathBuf {
        self.config_dir.join(CLIENT_STATE_FILE)
    }

    /// Loads settings, falling back to defaults if the file does not exist
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_settings(&self) -> ConfigResult<PaneSettings> {
        let path = self.settings_path();
        let _span = tracing::debug_span!(
            crate::tracing::span_names::CONFIG_LOAD,
            path = %path.display()
        )
        .entered();

        if !path.exists() {
            tracing::debug!(path = %path.display(), "No settings file, using defaults");
            return Ok(PaneSettings::default());
        }
        let content = std::fs::read_to_string(&path)?;
        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Writes settings to the settings file
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or writing fails.
    pub fn save_settings(&self, settings: &PaneSettings) -> ConfigResult<()> {
        let content =
            toml::to_string(settings).map_err(|e| ConfigError::Serialize(e.to_string()))?;
        std::fs::create_dir_all(&self.config_dir)?;
        std::fs::write(self.settings_path(), content)?;
        Ok(())
    }
}
