//! Initial session snapshot
//!
//! The backend hands the pane its full connection list and active connection
//! ids once at startup. Afterwards the pane only learns about changes through
//! notifications.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{PaneError, PaneResult};
use crate::models::{Connection, ConnectionId};

/// Connection state of a backend session at one point in time
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    /// All known connections, in server order
    #[serde(default)]
    pub connection_list: Vec<Connection>,
    /// Ids of the connections that are currently live
    #[serde(default)]
    pub active_connections: Vec<ConnectionId>,
}

impl SessionSnapshot {
    /// Creates a snapshot from its parts
    #[must_use]
    pub fn new(connection_list: Vec<Connection>, active_connections: Vec<ConnectionId>) -> Self {
        Self {
            connection_list,
            active_connections,
        }
    }

    /// Serializes the snapshot to JSON
    ///
    /// # Errors
    /// Returns an error if serialization fails
    pub fn to_json(&self) -> PaneResult<String> {
        serde_json::to_string_pretty(self).map_err(PaneError::Snapshot)
    }

    /// Deserializes a snapshot from JSON
    ///
    /// # Errors
    /// Returns an error if the JSON is malformed
    pub fn from_json(json: &str) -> PaneResult<Self> {
        serde_json::from_str(json).map_err(PaneError::Snapshot)
    }

    /// Loads a snapshot from a file
    ///
    /// # Errors
    /// Returns an error if reading or parsing fails
    pub fn load_from_file(path: &Path) -> PaneResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Saves the snapshot to a file
    ///
    /// # Errors
    /// Returns an error if writing fails
    pub fn save_to_file(&self, path: &Path) -> PaneResult<()> {
        let json = self.to_json()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)?;
        Ok(())
    }
}
