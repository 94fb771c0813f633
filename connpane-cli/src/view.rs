//! Headless view for the CLI
//!
//! The CLI prints from the presenter's state once a command is done, so the
//! view only keeps the selection and logs what a widget would have shown.

use connpane_core::models::{Connection, ConnectionId, PaneHeight};
use connpane_core::presenter::ConnectionsView;

/// View backing a single CLI invocation
#[derive(Debug, Default)]
pub struct TerminalView {
    selected: Option<Connection>,
}

impl TerminalView {
    /// Creates a view with nothing selected
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a view with `connection` selected
    pub const fn with_selection(connection: Connection) -> Self {
        Self {
            selected: Some(connection),
        }
    }
}

impl ConnectionsView for TerminalView {
    fn set_connections(&mut self, connections: &[Connection]) {
        tracing::trace!(count = connections.len(), "View rows updated");
    }

    fn set_active_connections(&mut self, ids: &[ConnectionId]) {
        tracing::trace!(count = ids.len(), "View active markers updated");
    }

    fn selected_connection(&self) -> Option<Connection> {
        self.selected.clone()
    }

    fn show_connection_explorer(&mut self, connection: &Connection) {
        tracing::debug!(connection_id = %connection.id, "Explorer shown");
    }

    fn show_connections_list(&mut self) {
        tracing::debug!("Connection list shown");
    }

    fn ensure_height(&mut self, height: PaneHeight) {
        tracing::trace!(?height, "Pane height requested");
    }
}
