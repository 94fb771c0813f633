//! CLI error types and exit codes.

use connpane_core::error::PaneError;

/// Exit codes for CLI operations
pub mod exit_codes {
    /// General error
    pub const GENERAL_ERROR: i32 = 1;
    /// The requested connection is not in the session's list
    pub const CONNECTION_NOT_FOUND: i32 = 2;
}

/// CLI error type
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Connection not found
    #[error("Connection not found: {0}")]
    ConnectionNotFound(String),

    /// Connection reference matches more than one connection
    #[error("Ambiguous connection '{query}'. Matches: {matches}")]
    Ambiguous {
        /// Reference given on the command line
        query: String,
        /// Comma separated ids of the candidates
        matches: String,
    },

    /// Session snapshot error
    #[error("Session error: {0}")]
    Session(String),

    /// Client state error
    #[error("Client state error: {0}")]
    State(String),

    /// Removal request failed
    #[error("Removal failed: {0}")]
    Removal(String),

    /// The presenter reported an error through its dialog surface
    #[error("{message}")]
    Dialog {
        /// Dialog caption
        caption: String,
        /// Dialog text
        message: String,
    },

    /// Output serialization error
    #[error("Output error: {0}")]
    Output(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<PaneError> for CliError {
    fn from(err: PaneError) -> Self {
        match err {
            PaneError::State(e) => Self::State(e.to_string()),
            PaneError::Config(e) => Self::Config(e.to_string()),
            PaneError::Snapshot(e) => Self::Session(e.to_string()),
            PaneError::EventLoopClosed => Self::Removal(err.to_string()),
            PaneError::Io(e) => Self::Io(e),
        }
    }
}

impl CliError {
    /// Returns the appropriate exit code for this error type.
    ///
    /// Exit codes:
    /// - 0: Success (not an error)
    /// - 1: General error
    /// - 2: Connection not found
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionNotFound(_) => exit_codes::CONNECTION_NOT_FOUND,
            Self::Config(_)
            | Self::Ambiguous { .. }
            | Self::Session(_)
            | Self::State(_)
            | Self::Removal(_)
            | Self::Dialog { .. }
            | Self::Output(_)
            | Self::Io(_) => exit_codes::GENERAL_ERROR,
        }
    }
}
