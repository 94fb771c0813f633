//! Connections pane presenter
//!
//! Owns the pane's connection state and mediates between backend
//! notifications, user input and the view. Every mutation goes through
//! `&mut self`, so a presenter is a single writer by construction.

use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::Instrument;

use super::collaborators::{ConnectionsServer, ConnectionsView, GlobalDisplay};
use super::events::PaneEvent;
use super::exploration::ExplorationState;
use crate::config::PaneSettings;
use crate::connection::ConnectionStore;
use crate::error::PaneResult;
use crate::models::{Connection, ConnectionId, PaneHeight, PaneMode};
use crate::search::FilterEngine;
use crate::session::{ClientState, SessionSnapshot};
use crate::tracing::span_names;

/// Caption of the remove-connection dialogs
pub const REMOVE_CONNECTION_CAPTION: &str = "Remove Connection";

/// Question asked before removing a connection
pub const REMOVE_CONNECTION_QUESTION: &str =
    "Are you sure you want to remove the selected connection from the list?";

/// Error shown when remove is invoked without a selection
pub const NO_CONNECTION_SELECTED: &str = "No connection currently selected.";

/// Caption of the new-connection error
pub const NEW_CONNECTION_CAPTION: &str = "Error";

/// Error shown for the new-connection command
pub const NOT_YET_IMPLEMENTED: &str = "Not Yet Implemented";

/// Behaviour switches for the presenter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresenterOptions {
    /// Reopen the persisted explored connection on construction
    pub restore_explored_connection: bool,
    /// Ask before removing a connection
    pub confirm_removal: bool,
}

impl Default for PresenterOptions {
    fn default() -> Self {
        Self {
            restore_explored_connection: true,
            confirm_removal: true,
        }
    }
}

impl From<&PaneSettings> for PresenterOptions {
    fn from(settings: &PaneSettings) -> Self {
        Self {
            restore_explored_connection: settings.pane.restore_explored_connection,
            confirm_removal: settings.pane.confirm_removal,
        }
    }
}

/// The view, dialog surface and backend a presenter drives
pub struct Collaborators {
    /// List/explorer widget
    pub view: Box<dyn ConnectionsView>,
    /// Message and dialog surface
    pub display: Box<dyn GlobalDisplay>,
    /// Backend transport
    pub server: Arc<dyn ConnectionsServer>,
}

/// What happened when the remove command ran
#[derive(Debug)]
pub enum RemoveOutcome {
    /// Nothing was selected; an error was shown
    NothingSelected,
    /// The user declined the confirmation
    Declined,
    /// No async runtime was available to send the request
    NoRuntime,
    /// The removal request was sent for this connection
    Dispatched {
        /// Connection the request is for
        id: ConnectionId,
        /// Task carrying the request; completes once the backend answered
        task: JoinHandle<()>,
    },
}

impl RemoveOutcome {
    /// Returns true if a request was sent to the backend
    #[must_use]
    pub const fn is_dispatched(&self) -> bool {
        matches!(self, Self::Dispatched { .. })
    }
}

/// Presenter for the connections pane
pub struct ConnectionsPresenter {
    view: Box<dyn ConnectionsView>,
    display: Box<dyn GlobalDisplay>,
    server: Arc<dyn ConnectionsServer>,
    client_state: ClientState,
    options: PresenterOptions,
    store: ConnectionStore,
    filter: FilterEngine,
    exploration: ExplorationState,
}

impl std::fmt::Debug for ConnectionsPresenter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConnectionsPresenter")
            .field("options", &self.options)
            .field("store", &self.store)
            .field("filter", &self.filter)
            .field("exploration", &self.exploration)
            .finish_non_exhaustive()
    }
}

impl ConnectionsPresenter {
    /// Creates a presenter from the session snapshot and client state
    ///
    /// Pushes the snapshot to the view, then restores the explored connection
    /// from `client_state`. A restored connection is shown in the explorer
    /// but is not considered changed, so the next save cycle does not write
    /// it back.
    pub fn new(
        collaborators: Collaborators,
        snapshot: SessionSnapshot,
        client_state: ClientState,
        options: PresenterOptions,
    ) -> Self {
        let Collaborators {
            view,
            display,
            server,
        } = collaborators;

        let mut presenter = Self {
            view,
            display,
            server,
            client_state,
            options,
            store: ConnectionStore::new(),
            filter: FilterEngine::new(),
            exploration: ExplorationState::new(),
        };

        presenter.on_connection_list_changed(snapshot.connection_list);
        presenter.on_active_connections_changed(snapshot.active_connections);
        presenter.restore_exploration();
        presenter
    }

    fn restore_exploration(&mut self) {
        if let Err(e) = self.client_state.init_value(&mut self.exploration) {
            tracing::warn!(error = %e, "Ignoring unreadable explored connection");
            self.exploration.mark_stale();
            return;
        }

        let Some(connection) = self.exploration.explored().cloned() else {
            return;
        };

        if self.options.restore_explored_connection {
            tracing::info!(connection_id = %connection.id, "Restoring explored connection");
            self.view.show_connection_explorer(&connection);
        } else {
            tracing::debug!(
                connection_id = %connection.id,
                "Explored connection restore disabled; starting in list mode"
            );
            self.exploration.back();
        }
    }

    /// Routes a notification to its handler
    ///
    /// # Errors
    ///
    /// Returns an error only for [`PaneEvent::SaveClientState`] when the
    /// explored connection cannot be serialized.
    pub fn handle_event(&mut self, event: PaneEvent) -> PaneResult<()> {
        tracing::trace!(event = event.name(), "Handling pane event");
        match event {
            PaneEvent::ConnectionListChanged(connections) => {
                self.on_connection_list_changed(connections);
            }
            PaneEvent::ActiveConnectionsChanged(ids) => self.on_active_connections_changed(ids),
            PaneEvent::ConnectionUpdated(connection) => self.on_connection_updated(&connection),
            PaneEvent::SearchQueryChanged(query) => self.on_search_query_changed(&query),
            PaneEvent::SelectionChanged(id) => self.on_selection_changed(id.as_ref()),
            PaneEvent::ExploreConnection(connection) => self.explore_connection(connection),
            PaneEvent::BackToConnections => self.back_to_connections(),
            PaneEvent::NewConnection => self.new_connection(),
            PaneEvent::RemoveConnection => {
                // The request task runs detached; its outcome is only logged.
                let _ = self.remove_connection();
            }
            PaneEvent::SaveClientState => {
                self.save_client_state()?;
            }
        }
        Ok(())
    }

    /// Replaces the connection list and re-applies the current search
    pub fn on_connection_list_changed(&mut self, connections: Vec<Connection>) {
        let count = self.store.replace_all(connections);
        tracing::debug!(count, "Connection list replaced");
        self.push_filtered();
    }

    /// Replaces the active connection ids
    pub fn on_active_connections_changed(&mut self, ids: Vec<ConnectionId>) {
        let count = self.store.replace_active(ids);
        tracing::debug!(count, "Active connections replaced");
        self.view
            .set_active_connections(self.store.active_connections());
    }

    /// Accepts a single-connection update without changing any state
    pub fn on_connection_updated(&mut self, connection: &Connection) {
        tracing::debug!(connection_id = %connection.id, "Connection update ignored");
    }

    /// Applies a new search query to the list
    pub fn on_search_query_changed(&mut self, query: &str) {
        self.filter.set_query(query);
        self.push_filtered();
    }

    /// Accepts a selection change without changing any state
    pub fn on_selection_changed(&mut self, id: Option<&ConnectionId>) {
        tracing::trace!(selected = ?id, "Selection changed");
    }

    /// Opens `connection` in the explorer and maximizes the pane
    pub fn explore_connection(&mut self, connection: Connection) {
        let _span = crate::trace_operation!(
            span_names::EXPLORE_CONNECTION,
            connection_id = %connection.id
        )
        .entered();

        self.exploration.explore(connection);
        if let Some(explored) = self.exploration.explored() {
            self.view.show_connection_explorer(explored);
        }
        self.view.ensure_height(PaneHeight::Maximized);
    }

    /// Leaves the explorer and restores the normal pane height
    pub fn back_to_connections(&mut self) {
        let previous = self.exploration.back();
        tracing::info!(
            connection_id = ?previous.as_ref().map(|c| c.id.to_string()),
            "Back to connection list"
        );
        self.view.show_connections_list();
        self.view.ensure_height(PaneHeight::Normal);
    }

    /// Handles the new-connection command, which is not available yet
    pub fn new_connection(&mut self) {
        self.display
            .show_error_message(NEW_CONNECTION_CAPTION, NOT_YET_IMPLEMENTED);
    }

    /// Handles the remove-connection command
    ///
    /// Removes the view's selected connection after confirmation. The request
    /// is sent on a background task and local state is left untouched: the
    /// list only changes when the backend reports the new list.
    pub fn remove_connection(&mut self) -> RemoveOutcome {
        let Some(connection) = self.view.selected_connection() else {
            self.display
                .show_error_message(REMOVE_CONNECTION_CAPTION, NO_CONNECTION_SELECTED);
            return RemoveOutcome::NothingSelected;
        };

        if self.options.confirm_removal {
            let answer = self
                .display
                .confirm(REMOVE_CONNECTION_CAPTION, REMOVE_CONNECTION_QUESTION);
            if !answer.is_yes() {
                tracing::debug!(connection_id = %connection.id, "Removal declined");
                return RemoveOutcome::Declined;
            }
        }

        let runtime = match tokio::runtime::Handle::try_current() {
            Ok(handle) => handle,
            Err(e) => {
                tracing::error!(error = %e, "No runtime available for removal request");
                return RemoveOutcome::NoRuntime;
            }
        };

        let id = connection.id;
        let server = Arc::clone(&self.server);
        let request_id = id.clone();
        let span = tracing::info_span!(span_names::CONNECTION_REMOVE, connection_id = %request_id);
        let task = runtime.spawn(
            async move {
                match server.remove_connection(request_id.clone()).await {
                    Ok(()) => tracing::info!("Removal request accepted"),
                    Err(e) => tracing::warn!(error = %e, "Removal request failed"),
                }
            }
            .instrument(span),
        );

        tracing::info!(connection_id = %id, "Removal request dispatched");
        RemoveOutcome::Dispatched { id, task }
    }

    /// Runs one client state save cycle
    ///
    /// Returns whether the explored connection was written.
    ///
    /// # Errors
    ///
    /// Returns an error if the explored connection cannot be serialized.
    pub fn save_client_state(&mut self) -> PaneResult<bool> {
        let written = self.client_state.collect_value(&mut self.exploration)?;
        tracing::debug!(written, "Client state save cycle");
        Ok(written)
    }

    fn push_filtered(&mut self) {
        let displayed = self.filter.apply(self.store.connections());
        self.view.set_connections(&displayed);
    }

    /// Connections currently displayed, i.e. the store filtered by the query
    #[must_use]
    pub fn displayed_connections(&self) -> Vec<Connection> {
        self.filter.apply(self.store.connections())
    }

    /// Connection store
    #[must_use]
    pub const fn store(&self) -> &ConnectionStore {
        &self.store
    }

    /// Raw text of the current search query
    #[must_use]
    pub fn query(&self) -> &str {
        self.filter.query().raw()
    }

    /// Connection shown in the explorer, if any
    #[must_use]
    pub const fn explored_connection(&self) -> Option<&Connection> {
        self.exploration.explored()
    }

    /// Current pane mode
    #[must_use]
    pub const fn mode(&self) -> PaneMode {
        self.exploration.mode()
    }

    /// Presenter options
    #[must_use]
    pub const fn options(&self) -> PresenterOptions {
        self.options
    }

    /// Client state as last written by a save cycle
    #[must_use]
    pub const fn client_state(&self) -> &ClientState {
        &self.client_state
    }

    /// Consumes the presenter and returns its client state
    #[must_use]
    pub fn into_client_state(self) -> ClientState {
        self.client_state
    }
}
