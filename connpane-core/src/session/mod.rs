//! Session state for the connections pane
//!
//! This module provides the initial session snapshot handed to the pane and
//! the session-scoped client state used to persist pane values across
//! reloads.

mod client_state;
mod snapshot;

pub use client_state::{CLIENT_STATE_VERSION, ClientState, StateValue};
pub use snapshot::SessionSnapshot;
