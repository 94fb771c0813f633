//! Explored connection state
//!
//! Tracks the single connection the pane is drilled into and acts as the
//! [`StateValue`] that persists it in the client state.
//!
//! The dirty check compares connection ids: the value counts as changed when
//! the id of the explored connection (or its absence) differs from the one the
//! client state last observed. Re-exploring the same connection while it is
//! already explored is therefore not a change, while exploring, going back and
//! exploring again is one change per save cycle that sees a different value.

use crate::models::{Connection, ConnectionId, PaneMode};
use crate::session::StateValue;

/// Client state module the explored connection is stored under
pub const MODULE_CONNECTIONS: &str = "connections-pane";

/// Client state key of the explored connection
pub const KEY_EXPLORED_CONNECTION: &str = "exploredConnection";

/// The connection being explored, plus the persistence marker
#[derive(Debug, Clone, Default)]
pub struct ExplorationState {
    /// Connection shown in the explorer, if any
    explored: Option<Connection>,
    /// Id last observed by the client state
    last_observed: Option<ConnectionId>,
    /// Stored value could not be read and must be rewritten
    stale: bool,
}

impl ExplorationState {
    /// Creates a state with nothing explored
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Explores `connection`, replacing any previous target
    pub fn explore(&mut self, connection: Connection) {
        self.explored = Some(connection);
    }

    /// Stops exploring; returns the connection that was explored
    pub fn back(&mut self) -> Option<Connection> {
        self.explored.take()
    }

    /// Connection currently explored
    #[must_use]
    pub const fn explored(&self) -> Option<&Connection> {
        self.explored.as_ref()
    }

    /// Current pane mode
    #[must_use]
    pub const fn mode(&self) -> PaneMode {
        if self.explored.is_some() {
            PaneMode::Exploring
        } else {
            PaneMode::List
        }
    }

    /// Forces the next save cycle to write the current value, even if it
    /// matches the last observed one
    pub fn mark_stale(&mut self) {
        self.stale = true;
    }

    fn explored_id(&self) -> Option<ConnectionId> {
        self.explored.as_ref().map(|c| c.id.clone())
    }
}

impl StateValue for ExplorationState {
    type Value = Connection;

    fn module(&self) -> &str {
        MODULE_CONNECTIONS
    }

    fn key(&self) -> &str {
        KEY_EXPLORED_CONNECTION
    }

    fn on_init(&mut self, value: Option<Connection>) {
        self.explored = value;
        self.last_observed = self.explored_id();
        self.stale = false;
    }

    fn value(&self) -> Option<Connection> {
        self.explored.clone()
    }

    fn has_changed(&mut self) -> bool {
        let current = self.explored_id();
        let stale = std::mem::take(&mut self.stale);
        if current == self.last_observed && !stale {
            false
        } else {
            self.last_observed = current;
            true
        }
    }
}
