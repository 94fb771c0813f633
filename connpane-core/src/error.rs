//! Error types for `ConnPane`
//!
//! Each concern carries its own `thiserror` enum; [`PaneError`] wraps them
//! for callers that only need a single error type.

use thiserror::Error;

use crate::models::ConnectionId;

/// Top-level error type for the pane core library
#[derive(Debug, Error)]
pub enum PaneError {
    /// Client state persistence failed
    #[error("Client state error: {0}")]
    State(#[from] StateError),

    /// Configuration could not be loaded or saved
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Session snapshot could not be read or written
    #[error("Session snapshot error: {0}")]
    Snapshot(#[source] serde_json::Error),

    /// The presenter's event loop has stopped
    #[error("Pane event loop is closed")]
    EventLoopClosed,

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised by the client state store
#[derive(Debug, Error)]
pub enum StateError {
    /// I/O error while reading or writing the state file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[source] serde_json::Error),

    /// Deserialization error
    #[error("Deserialization error: {0}")]
    Deserialization(#[source] serde_json::Error),

    /// The stored value could not be converted into the expected type
    #[error("Invalid value for {module}/{key}: {reason}")]
    InvalidValue {
        /// Module the value is scoped to
        module: String,
        /// Field key inside the module
        key: String,
        /// Conversion failure
        reason: String,
    },

    /// Version mismatch
    #[error("Incompatible client state version: expected {expected}, got {actual}")]
    VersionMismatch {
        /// Expected version
        expected: u32,
        /// Actual version found
        actual: u32,
    },
}

/// Errors raised while handling configuration files
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Settings file could not be parsed
    #[error("Failed to parse settings: {0}")]
    Parse(String),

    /// Settings could not be serialized
    #[error("Failed to serialize settings: {0}")]
    Serialize(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// No configuration directory could be determined
    #[error("Could not determine configuration directory")]
    NoConfigDir,
}

/// Errors reported by the backend transport when removing a connection
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ServerError {
    /// The request failed in transit
    #[error("Transport error: {0}")]
    Transport(String),

    /// The backend does not know the connection
    #[error("Connection not found: {0}")]
    NotFound(ConnectionId),
}

/// Result type alias for pane operations
pub type PaneResult<T> = std::result::Result<T, PaneError>;

/// Result type alias for client state operations
pub type StateResult<T> = std::result::Result<T, StateError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for server requests
pub type ServerResult<T> = std::result::Result<T, ServerError>;
