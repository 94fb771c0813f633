//! Connection model.
//!
//! A [`Connection`] is a data-source endpoint the backend session knows about.
//! Identity is carried entirely by its compound [`ConnectionId`]; every other
//! field is descriptive payload the pane passes through untouched.

use std::fmt;
use std::hash::{Hash, Hasher};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Compound key identifying a connection
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ConnectionId {
    /// Connection type (driver or backend kind, e.g. `odbc`, `spark`)
    #[serde(rename = "type")]
    pub connection_type: String,
    /// Host the connection points at
    pub host: String,
}

impl ConnectionId {
    /// Creates a new connection identifier
    #[must_use]
    pub fn new(connection_type: impl Into<String>, host: impl Into<String>) -> Self {
        Self {
            connection_type: connection_type.into(),
            host: host.into(),
        }
    }

    /// Parses the `type://host` form produced by [`fmt::Display`]
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let (connection_type, host) = s.split_once("://")?;
        if connection_type.is_empty() || host.is_empty() {
            return None;
        }
        Some(Self::new(connection_type, host))
    }
}

impl fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}://{}", self.connection_type, self.host)
    }
}

/// A data-source connection known to the backend session
///
/// Equality and hashing only consider [`Connection::id`]: two values with the
/// same id denote the same connection even if their payload differs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Connection {
    /// Identifier of the connection
    pub id: ConnectionId,
    /// Human readable name shown in the list
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Code snippet used to locate the connection object in the session
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finder: Option<String>,
    /// Code snippet that re-establishes the connection
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connect_code: Option<String>,
    /// Last time the connection was used
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "chrono::serde::ts_seconds_option"
    )]
    pub last_used: Option<DateTime<Utc>>,
    /// Any other backend payload, preserved verbatim
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Connection {
    /// Creates a connection with only an identifier
    #[must_use]
    pub fn new(id: ConnectionId) -> Self {
        Self {
            id,
            display_name: None,
            finder: None,
            connect_code: None,
            last_used: None,
            extra: Map::new(),
        }
    }

    /// Sets the display name
    #[must_use]
    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    /// Sets the connect code
    #[must_use]
    pub fn with_connect_code(mut self, code: impl Into<String>) -> Self {
        self.connect_code = Some(code.into());
        self
    }

    /// Sets the last-used timestamp
    #[must_use]
    pub const fn with_last_used(mut self, at: DateTime<Utc>) -> Self {
        self.last_used = Some(at);
        self
    }

    /// Host the connection points at; this is what searches match against
    #[must_use]
    pub fn host(&self) -> &str {
        &self.id.host
    }

    /// Label for list rows: the display name, falling back to the host
    #[must_use]
    pub fn label(&self) -> &str {
        self.display_name.as_deref().unwrap_or_else(|| self.host())
    }
}

impl PartialEq for Connection {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Connection {}

impl Hash for Connection {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
