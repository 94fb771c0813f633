//! Notifications routed to the presenter.

use crate::models::{Connection, ConnectionId};

/// An external or user notification for the connections pane
#[derive(Debug, Clone)]
pub enum PaneEvent {
    /// The backend's connection list changed; carries the full new list
    ConnectionListChanged(Vec<Connection>),
    /// The backend's active connections changed; carries the full new set
    ActiveConnectionsChanged(Vec<ConnectionId>),
    /// A single connection was updated. Accepted and ignored.
    ConnectionUpdated(Connection),
    /// The search box text changed
    SearchQueryChanged(String),
    /// The list selection changed. Accepted and ignored; the selection is
    /// pulled from the view when it is needed.
    SelectionChanged(Option<ConnectionId>),
    /// The user opened a connection in the explorer
    ExploreConnection(Connection),
    /// The user pressed the back button in the explorer
    BackToConnections,
    /// The new-connection command was invoked
    NewConnection,
    /// The remove-connection command was invoked
    RemoveConnection,
    /// The client state save cycle is running
    SaveClientState,
}

impl PaneEvent {
    /// Short name used in log fields
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::ConnectionListChanged(_) => "connection_list_changed",
            Self::ActiveConnectionsChanged(_) => "active_connections_changed",
            Self::ConnectionUpdated(_) => "connection_updated",
            Self::SearchQueryChanged(_) => "search_query_changed",
            Self::SelectionChanged(_) => "selection_changed",
            Self::ExploreConnection(_) => "explore_connection",
            Self::BackToConnections => "back_to_connections",
            Self::NewConnection => "new_connection",
            Self::RemoveConnection => "remove_connection",
            Self::SaveClientState => "save_client_state",
        }
    }
}
