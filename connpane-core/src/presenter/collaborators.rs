//! Collaborator interfaces of the presenter
//!
//! The presenter never renders or talks to the network itself. It drives
//! these traits instead.

use async_trait::async_trait;

use crate::error::ServerResult;
use crate::models::{Connection, ConnectionId, PaneHeight};

/// The widget showing the connection list and the explorer
pub trait ConnectionsView: Send {
    /// Replaces the rows of the connection list
    fn set_connections(&mut self, connections: &[Connection]);

    /// Replaces the set of connections marked as active
    fn set_active_connections(&mut self, ids: &[ConnectionId]);

    /// Connection currently selected in the list, if any
    fn selected_connection(&self) -> Option<Connection>;

    /// Switches to the explorer for `connection`
    fn show_connection_explorer(&mut self, connection: &Connection);

    /// Switches back to the connection list
    fn show_connections_list(&mut self);

    /// Layout hint for the surrounding pane
    fn ensure_height(&mut self, height: PaneHeight);
}

/// Answer to a yes/no question
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogResponse {
    /// The user agreed
    Yes,
    /// The user declined or dismissed the dialog
    No,
}

impl DialogResponse {
    /// Returns true for [`DialogResponse::Yes`]
    #[must_use]
    pub const fn is_yes(self) -> bool {
        matches!(self, Self::Yes)
    }
}

/// Message and dialog surface
pub trait GlobalDisplay: Send {
    /// Shows an error message
    fn show_error_message(&mut self, caption: &str, message: &str);

    /// Asks a yes/no question
    fn confirm(&mut self, caption: &str, message: &str) -> DialogResponse;
}

/// Backend operations on the session's connections
#[async_trait]
pub trait ConnectionsServer: Send + Sync {
    /// Asks the backend to forget a connection
    ///
    /// The result is informational only; the backend reports the new list
    /// through a list-changed notification.
    async fn remove_connection(&self, id: ConnectionId) -> ServerResult<()>;
}
