//! `ConnPane` Core Library
//!
//! This crate provides the core of the `ConnPane` connections pane. The
//! presenter sits between a backend session and the pane's widgets and owns
//! the pane state.
//!
//! # Crate Structure
//!
//! - [`models`] - Core data structures (Connection, `ConnectionId`, pane modes)
//! - [`connection`] - Authoritative connection list and active set
//! - [`search`] - Whitespace-token search filtering
//! - [`session`] - Client state persistence and session snapshots
//! - [`presenter`] - Pane presenter, collaborator traits and event loop
//! - [`config`] - Settings file and directory layout
//! - `testing` - Recording collaborators for tests (`testing` feature)
//! - [`tracing`] - Structured logging setup

// Enable missing_docs warning for public API documentation
#![warn(missing_docs)]

pub mod config;
pub mod connection;
pub mod error;
pub mod models;
pub mod presenter;
pub mod search;
pub mod session;
pub mod tracing;

// Recording collaborators are exposed for integration tests
#[cfg(any(test, feature = "testing"))]
pub mod testing;

// =============================================================================
// Convenience re-exports
//
// Flat re-exports used by the property and integration suites. Code in
// `connpane-cli` imports via modular paths (e.g.
// `connpane_core::models::Connection`).
// =============================================================================

pub use config::{ConfigManager, LoggingSettings, PaneBehaviorSettings, PaneSettings};
pub use connection::ConnectionStore;
pub use error::{
    ConfigError, ConfigResult, PaneError, PaneResult, ServerError, ServerResult, StateError,
    StateResult,
};
pub use models::{Connection, ConnectionId, PaneHeight, PaneMode};
pub use presenter::{
    Collaborators, ConnectionsPresenter, ConnectionsServer, ConnectionsView, DialogResponse,
    ExplorationState, GlobalDisplay, PaneEvent, PaneHandle, PresenterOptions, RemoveOutcome,
    run_event_loop, spawn_event_loop,
};
pub use search::{FilterEngine, SearchQuery, filter_connections};
pub use session::{CLIENT_STATE_VERSION, ClientState, SessionSnapshot, StateValue};
#[cfg(any(test, feature = "testing"))]
pub use testing::{DisplayedMessage, RecordingServer, RecordingView, ScriptedDisplay, ViewCall};
pub use tracing::{
    TracingConfig, TracingError, TracingLevel, TracingOutput, TracingResult, init_tracing,
    span_names,
};
