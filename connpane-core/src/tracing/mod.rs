//! Structured logging for the pane
//!
//! [`init_tracing`] installs a single `tracing_subscriber` registry filtered
//! by an `EnvFilter` directive. Log lines go to stderr, or are appended to a
//! file named in the `[logging]` settings. Stdout is left to the CLI's
//! tables and JSON.
//!
//! Pane operations open spans named from [`span_names`].

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use thiserror::Error;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::LoggingSettings;

static INSTALLED: AtomicBool = AtomicBool::new(false);

/// Errors raised while installing the subscriber
#[derive(Debug, Error)]
pub enum TracingError {
    /// A subscriber was already installed by this process
    #[error("Logging is already initialized")]
    AlreadyInitialized,

    /// The filter directive did not parse
    #[error("Invalid log filter '{directive}': {reason}")]
    InvalidFilter {
        /// Directive that was rejected
        directive: String,
        /// Parser message
        reason: String,
    },

    /// The log file could not be opened for appending
    #[error("Cannot open log file {}: {source}", .path.display())]
    LogFile {
        /// Requested log file
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// Another global subscriber won the race
    #[error("Failed to install log subscriber: {0}")]
    InitializationFailed(String),

    /// A level name was not recognised
    #[error("Unknown log level '{0}'")]
    UnknownLevel(String),
}

/// Result type for tracing operations
pub type TracingResult<T> = Result<T, TracingError>;

/// Verbosity of the pane's own log targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TracingLevel {
    /// Failures only
    Error,
    /// Failures and recoverable oddities such as duplicate ids
    Warn,
    /// Restores, removals and other user-visible actions
    #[default]
    Info,
    /// Every notification the presenter handles
    Debug,
    /// Everything, including per-event routing
    Trace,
}

impl TracingLevel {
    /// Every level, quietest first
    pub const ALL: [Self; 5] = [
        Self::Error,
        Self::Warn,
        Self::Info,
        Self::Debug,
        Self::Trace,
    ];

    /// Name used in settings files and filter directives
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }

    /// Maps a `-v` count to a level: 0 keeps `base`, then info, debug, trace
    #[must_use]
    pub const fn from_verbosity(base: Self, verbose: u8) -> Self {
        match verbose {
            0 => base,
            1 => Self::Info,
            2 => Self::Debug,
            _ => Self::Trace,
        }
    }
}

impl std::str::FromStr for TracingLevel {
    type Err = TracingError;

    /// Case-insensitive; `warning` is accepted for `warn`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        if wanted == "warning" {
            return Ok(Self::Warn);
        }
        Self::ALL
            .into_iter()
            .find(|level| level.name() == wanted)
            .ok_or_else(|| TracingError::UnknownLevel(s.to_owned()))
    }
}

impl std::fmt::Display for TracingLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Where log lines are written
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TracingOutput {
    /// Standard error, colored
    #[default]
    Stderr,
    /// A plain-text file, appended to
    File {
        /// Path to the log file
        path: PathBuf,
    },
}

impl TracingOutput {
    fn open(&self) -> TracingResult<(BoxMakeWriter, bool)> {
        match self {
            Self::Stderr => Ok((BoxMakeWriter::new(std::io::stderr), true)),
            Self::File { path } => {
                let file = OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(path)
                    .map_err(|source| TracingError::LogFile {
                        path: path.clone(),
                        source,
                    })?;
                Ok((BoxMakeWriter::new(Arc::new(file)), false))
            }
        }
    }
}

/// Logging setup assembled from settings and command-line flags
#[derive(Debug, Clone, Default)]
pub struct TracingConfig {
    /// Level applied to the pane's crates
    pub level: TracingLevel,
    /// Log destination
    pub output: TracingOutput,
    /// Raw `EnvFilter` directive; replaces `level` when set
    pub filter: Option<String>,
}

impl TracingConfig {
    /// Info level on stderr, no custom filter
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a configuration from the `[logging]` settings section
    ///
    /// Unknown level names fall back to info.
    #[must_use]
    pub fn from_settings(settings: &LoggingSettings) -> Self {
        let output = settings
            .file
            .clone()
            .map_or(TracingOutput::Stderr, |path| TracingOutput::File { path });
        Self {
            level: settings.level.parse().unwrap_or_default(),
            output,
            filter: settings.filter.clone(),
        }
    }

    /// Replaces the level
    #[must_use]
    pub const fn with_level(mut self, level: TracingLevel) -> Self {
        self.level = level;
        self
    }

    /// Replaces the destination
    #[must_use]
    pub fn with_output(mut self, output: TracingOutput) -> Self {
        self.output = output;
        self
    }

    /// Uses `filter` verbatim instead of the level
    #[must_use]
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    /// Filter directive the subscriber is built from
    #[must_use]
    pub fn filter_directive(&self) -> String {
        self.filter.clone().unwrap_or_else(|| {
            format!(
                "connpane_core={level},connpane_cli={level}",
                level = self.level
            )
        })
    }

    fn env_filter(&self) -> TracingResult<EnvFilter> {
        let directive = self.filter_directive();
        EnvFilter::try_new(&directive).map_err(|e| TracingError::InvalidFilter {
            directive,
            reason: e.to_string(),
        })
    }
}

/// Installs the global subscriber
///
/// Only the first call in a process can succeed.
///
/// # Errors
///
/// Returns an error on a second call, for a directive `EnvFilter` rejects,
/// or when the log file cannot be opened.
pub fn init_tracing(config: &TracingConfig) -> TracingResult<()> {
    if INSTALLED.swap(true, Ordering::SeqCst) {
        return Err(TracingError::AlreadyInitialized);
    }

    let filter = config.env_filter()?;
    let (writer, ansi) = config.output.open()?;

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_ansi(ansi)
                .with_writer(writer),
        )
        .try_init()
        .map_err(|e| TracingError::InitializationFailed(e.to_string()))?;

    tracing::debug!(level = %config.level, output = ?config.output, "Logging initialized");
    Ok(())
}

/// Opens an info-level span named after a pane operation
///
/// ```ignore
/// let _span = connpane_core::trace_operation!(
///     connpane_core::span_names::EXPLORE_CONNECTION,
///     connection_id = %connection.id
/// )
/// .entered();
/// ```
#[macro_export]
macro_rules! trace_operation {
    ($name:expr) => {
        tracing::info_span!($name)
    };
    ($name:expr, $($field:tt)*) => {
        tracing::info_span!($name, $($field)*)
    };
}

/// Span names for pane operations
pub mod span_names {
    /// Filtering the list with the current query
    pub const SEARCH_EXECUTE: &str = "search.execute";
    /// Drilling into a connection
    pub const EXPLORE_CONNECTION: &str = "pane.explore";
    /// Removal request sent to the backend
    pub const CONNECTION_REMOVE: &str = "connection.remove";
    /// Reading the settings file
    pub const CONFIG_LOAD: &str = "config.load";
}
