//! Session-scoped client state
//!
//! [`ClientState`] is a small key/value store grouped by module. Values that
//! want to live in it implement [`StateValue`]: they are handed their stored
//! value once when they are set up, and on every save cycle they are asked
//! whether they changed since the store last saw them. Only changed values are
//! written back.

use std::collections::BTreeMap;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{StateError, StateResult};

/// Current version of the client state file format
pub const CLIENT_STATE_VERSION: u32 = 1;

/// A value persisted in [`ClientState`]
pub trait StateValue {
    /// Serialized representation
    type Value: Serialize + DeserializeOwned;

    /// Module the value is scoped to
    fn module(&self) -> &str;

    /// Field key inside the module
    fn key(&self) -> &str;

    /// Receives the stored value when the value is set up
    ///
    /// Implementations must treat the received value as already persisted so
    /// that loading never marks the value dirty.
    fn on_init(&mut self, value: Option<Self::Value>);

    /// Current value to persist
    fn value(&self) -> Option<Self::Value>;

    /// Reports whether the value changed since the store last observed it,
    /// and records the current value as observed
    fn has_changed(&mut self) -> bool;
}

/// Key/value client state grouped by module
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientState {
    /// Version for forward compatibility
    pub version: u32,
    /// When the state was last modified
    pub saved_at: DateTime<Utc>,
    /// Stored values, by module then key
    #[serde(default)]
    modules: BTreeMap<String, BTreeMap<String, Value>>,
}

impl Default for ClientState {
    fn default() -> Self {
        Self::new()
    }
}

impl ClientState {
    /// Creates an empty client state
    #[must_use]
    pub fn new() -> Self {
        Self {
            version: CLIENT_STATE_VERSION,
            saved_at: Utc::now(),
            modules: BTreeMap::new(),
        }
    }

    /// Returns the stored value for `module`/`key`
    #[must_use]
    pub fn get(&self, module: &str, key: &str) -> Option<&Value> {
        self.modules.get(module).and_then(|fields| fields.get(key))
    }

    /// Stores a value for `module`/`key`
    pub fn set(&mut self, module: &str, key: &str, value: Value) {
        self.modules
            .entry(module.to_owned())
            .or_default()
            .insert(key.to_owned(), value);
        self.touch();
    }

    /// Removes the value for `module`/`key`
    pub fn remove(&mut self, module: &str, key: &str) -> Option<Value> {
        let fields = self.modules.get_mut(module)?;
        let removed = fields.remove(key);
        if fields.is_empty() {
            self.modules.remove(module);
        }
        if removed.is_some() {
            self.touch();
        }
        removed
    }

    /// Returns true if nothing is stored
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Updates the saved_at timestamp
    pub fn touch(&mut self) {
        self.saved_at = Utc::now();
    }

    /// Hands the stored value to `target`
    ///
    /// A missing entry or JSON `null` is passed on as `None`.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::InvalidValue`] if the stored JSON does not match
    /// the target's value type. `target` is not initialized in that case.
    pub fn init_value<S: StateValue>(&self, target: &mut S) -> StateResult<()> {
        let stored = match self.get(target.module(), target.key()) {
            None | Some(Value::Null) => None,
            Some(value) => Some(serde_json::from_value(value.clone()).map_err(|e| {
                StateError::InvalidValue {
                    module: target.module().to_owned(),
                    key: target.key().to_owned(),
                    reason: e.to_string(),
                }
            })?),
        };
        target.on_init(stored);
        Ok(())
    }

    /// Runs one save cycle for `source`
    ///
    /// Writes the current value only if `source` reports a change. A `None`
    /// value is stored as JSON `null`. Returns whether a write happened.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::Serialization`] if the value cannot be encoded.
    pub fn collect_value<S: StateValue>(&mut self, source: &mut S) -> StateResult<bool> {
        if !source.has_changed() {
            return Ok(false);
        }

        let value = match source.value() {
            Some(v) => serde_json::to_value(v).map_err(StateError::Serialization)?,
            None => Value::Null,
        };
        let module = source.module().to_owned();
        let key = source.key().to_owned();
        self.set(&module, &key, value);

        tracing::debug!(module = %module, key = %key, "Client state value written");
        Ok(true)
    }

    /// Serializes the state to JSON
    ///
    /// # Errors
    /// Returns an error if serialization fails
    pub fn to_json(&self) -> StateResult<String> {
        serde_json::to_string_pretty(self).map_err(StateError::Serialization)
    }

    /// Deserializes the state from JSON
    ///
    /// # Errors
    /// Returns an error if the JSON is malformed or was written by a newer
    /// format version
    pub fn from_json(json: &str) -> StateResult<Self> {
        let state: Self = serde_json::from_str(json).map_err(StateError::Deserialization)?;
        if state.version > CLIENT_STATE_VERSION {
            return Err(StateError::VersionMismatch {
                expected: CLIENT_STATE_VERSION,
                actual: state.version,
            });
        }
        Ok(state)
    }

    /// Saves the state to a file
    ///
    /// # Errors
    /// Returns an error if writing fails
    pub fn save_to_file(&self, path: &Path) -> StateResult<()> {
        let json = self.to_json()?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, json)?;
        Ok(())
    }

    /// Loads the state from a file
    ///
    /// # Errors
    /// Returns an error if reading or parsing fails
    pub fn load_from_file(path: &Path) -> StateResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Loads the state from a file, starting empty if the file does not exist
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed
    pub fn load_or_default(path: &Path) -> StateResult<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            Ok(Self::new())
        }
    }
}
