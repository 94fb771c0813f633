//! Authoritative connection state for the pane
//!
//! The store holds the full known-connections list and, independently, the
//! ids of the connections that are currently live. Both are replaced
//! wholesale on each backend notification; there is no merging and no local
//! optimistic mutation.

use std::collections::HashSet;

use crate::models::{Connection, ConnectionId};

/// In-memory connection store
#[derive(Debug, Clone, Default)]
pub struct ConnectionStore {
    /// Known connections in server order
    connections: Vec<Connection>,
    /// Ids of active connections, possibly stale
    active: Vec<ConnectionId>,
}

impl ConnectionStore {
    /// Creates an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store from an initial snapshot
    #[must_use]
    pub fn with_snapshot(connections: Vec<Connection>, active: Vec<ConnectionId>) -> Self {
        let mut store = Self::new();
        store.replace_all(connections);
        store.replace_active(active);
        store
    }

    /// Replaces the full connection list
    ///
    /// Server order is kept. If the backend sends the same id twice only the
    /// first occurrence is kept. Returns the number of stored connections.
    pub fn replace_all(&mut self, connections: Vec<Connection>) -> usize {
        let mut seen = HashSet::with_capacity(connections.len());
        let before = connections.len();

        self.connections = connections
            .into_iter()
            .filter(|c| seen.insert(c.id.clone()))
            .collect();

        let dropped = before - self.connections.len();
        if dropped > 0 {
            tracing::warn!(dropped, "Dropped duplicate connection ids from list update");
        }

        self.connections.len()
    }

    /// Replaces the active connection ids
    ///
    /// Ids need not refer to a stored connection.
    pub fn replace_active(&mut self, ids: Vec<ConnectionId>) -> usize {
        self.active = ids;
        self.active.len()
    }

    /// All known connections in server order
    #[must_use]
    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    /// Active connection ids as last reported
    #[must_use]
    pub fn active_connections(&self) -> &[ConnectionId] {
        &self.active
    }

    /// Looks up a connection by id
    #[must_use]
    pub fn find(&self, id: &ConnectionId) -> Option<&Connection> {
        self.connections.iter().find(|c| &c.id == id)
    }

    /// Returns true if the id is in the active set
    #[must_use]
    pub fn is_active(&self, id: &ConnectionId) -> bool {
        self.active.contains(id)
    }

    /// Number of known connections
    #[must_use]
    pub fn len(&self) -> usize {
        self.connections.len()
    }

    /// Returns true if no connections are known
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.connections.is_empty()
    }
}
