//! Presenter for the connections pane
//!
//! This module wires the connection store, the search filter and the
//! exploration state to the pane's collaborators:
//!
//! - [`ConnectionsPresenter`] routes backend notifications and user input
//! - [`ExplorationState`] tracks and persists the explored connection
//! - [`PaneEvent`] / [`run_event_loop`] serialize notifications on a runtime

mod collaborators;
mod event_loop;
mod events;
mod exploration;
#[allow(clippy::module_inception)]
mod presenter;

pub use collaborators::{ConnectionsServer, ConnectionsView, DialogResponse, GlobalDisplay};
pub use event_loop::{PaneHandle, run_event_loop, spawn_event_loop};
pub use events::PaneEvent;
pub use exploration::{ExplorationState, KEY_EXPLORED_CONNECTION, MODULE_CONNECTIONS};
pub use presenter::{
    Collaborators, ConnectionsPresenter, NEW_CONNECTION_CAPTION, NO_CONNECTION_SELECTED,
    NOT_YET_IMPLEMENTED, PresenterOptions, REMOVE_CONNECTION_CAPTION, REMOVE_CONNECTION_QUESTION,
    RemoveOutcome,
};
