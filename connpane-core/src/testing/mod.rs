//! In-memory collaborators for driving a presenter without a UI
//!
//! [`RecordingView`], [`ScriptedDisplay`] and [`RecordingServer`] record every
//! call they receive. They are cheap to clone and clones share the same log,
//! so a caller can keep one clone for inspection and hand another to the
//! presenter.
//!
//! The module is compiled for unit tests and behind the `testing` feature,
//! which the crate's own dev-dependencies and `connpane-cli`'s turn on.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;

use crate::error::{ServerError, ServerResult};
use crate::models::{Connection, ConnectionId, PaneHeight};
use crate::presenter::{ConnectionsServer, ConnectionsView, DialogResponse, GlobalDisplay};

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// A call the presenter made on the view
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewCall {
    /// `set_connections` with the ids of the rows
    SetConnections(Vec<ConnectionId>),
    /// `set_active_connections`
    SetActiveConnections(Vec<ConnectionId>),
    /// `show_connection_explorer`
    ShowExplorer(ConnectionId),
    /// `show_connections_list`
    ShowList,
    /// `ensure_height`
    EnsureHeight(PaneHeight),
}

#[derive(Debug, Default)]
struct ViewLog {
    calls: Vec<ViewCall>,
    displayed: Vec<Connection>,
    active: Vec<ConnectionId>,
    selected: Option<Connection>,
}

/// View that records calls and remembers what it shows
#[derive(Debug, Clone, Default)]
pub struct RecordingView {
    log: Arc<Mutex<ViewLog>>,
}

impl RecordingView {
    /// Creates an empty recording view
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the connection returned by `selected_connection`
    pub fn select(&self, connection: Option<Connection>) {
        lock(&self.log).selected = connection;
    }

    /// All recorded calls, oldest first
    #[must_use]
    pub fn calls(&self) -> Vec<ViewCall> {
        lock(&self.log).calls.clone()
    }

    /// Forgets recorded calls
    pub fn clear_calls(&self) {
        lock(&self.log).calls.clear();
    }

    /// Rows last passed to `set_connections`
    #[must_use]
    pub fn displayed(&self) -> Vec<Connection> {
        lock(&self.log).displayed.clone()
    }

    /// Hosts of the rows last passed to `set_connections`
    #[must_use]
    pub fn displayed_hosts(&self) -> Vec<String> {
        lock(&self.log)
            .displayed
            .iter()
            .map(|c| c.host().to_owned())
            .collect()
    }

    /// Ids last passed to `set_active_connections`
    #[must_use]
    pub fn active(&self) -> Vec<ConnectionId> {
        lock(&self.log).active.clone()
    }
}

impl ConnectionsView for RecordingView {
    fn set_connections(&mut self, connections: &[Connection]) {
        let mut log = lock(&self.log);
        log.calls.push(ViewCall::SetConnections(
            connections.iter().map(|c| c.id.clone()).collect(),
        ));
        log.displayed = connections.to_vec();
    }

    fn set_active_connections(&mut self, ids: &[ConnectionId]) {
        let mut log = lock(&self.log);
        log.calls.push(ViewCall::SetActiveConnections(ids.to_vec()));
        log.active = ids.to_vec();
    }

    fn selected_connection(&self) -> Option<Connection> {
        lock(&self.log).selected.clone()
    }

    fn show_connection_explorer(&mut self, connection: &Connection) {
        lock(&self.log)
            .calls
            .push(ViewCall::ShowExplorer(connection.id.clone()));
    }

    fn show_connections_list(&mut self) {
        lock(&self.log).calls.push(ViewCall::ShowList);
    }

    fn ensure_height(&mut self, height: PaneHeight) {
        lock(&self.log).calls.push(ViewCall::EnsureHeight(height));
    }
}

/// A message shown through the display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayedMessage {
    /// Dialog caption
    pub caption: String,
    /// Dialog text
    pub message: String,
}

#[derive(Debug)]
struct DisplayLog {
    answer: DialogResponse,
    errors: Vec<DisplayedMessage>,
    questions: Vec<DisplayedMessage>,
}

/// Display that answers every question with a fixed response
#[derive(Debug, Clone)]
pub struct ScriptedDisplay {
    log: Arc<Mutex<DisplayLog>>,
}

impl ScriptedDisplay {
    /// Creates a display answering `answer` to every question
    #[must_use]
    pub fn answering(answer: DialogResponse) -> Self {
        Self {
            log: Arc::new(Mutex::new(DisplayLog {
                answer,
                errors: Vec::new(),
                questions: Vec::new(),
            })),
        }
    }

    /// Changes the scripted answer
    pub fn set_answer(&self, answer: DialogResponse) {
        lock(&self.log).answer = answer;
    }

    /// Error messages shown so far
    #[must_use]
    pub fn errors(&self) -> Vec<DisplayedMessage> {
        lock(&self.log).errors.clone()
    }

    /// Questions asked so far
    #[must_use]
    pub fn questions(&self) -> Vec<DisplayedMessage> {
        lock(&self.log).questions.clone()
    }
}

impl GlobalDisplay for ScriptedDisplay {
    fn show_error_message(&mut self, caption: &str, message: &str) {
        lock(&self.log).errors.push(DisplayedMessage {
            caption: caption.to_owned(),
            message: message.to_owned(),
        });
    }

    fn confirm(&mut self, caption: &str, message: &str) -> DialogResponse {
        let mut log = lock(&self.log);
        log.questions.push(DisplayedMessage {
            caption: caption.to_owned(),
            message: message.to_owned(),
        });
        log.answer
    }
}

#[derive(Debug, Default)]
struct ServerLog {
    removed: Vec<ConnectionId>,
    failure: Option<ServerError>,
}

/// Backend that records removal requests
#[derive(Debug, Clone, Default)]
pub struct RecordingServer {
    log: Arc<Mutex<ServerLog>>,
}

impl RecordingServer {
    /// Creates a server that accepts every request
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a server that records requests and then fails them
    #[must_use]
    pub fn failing(error: ServerError) -> Self {
        let server = Self::new();
        lock(&server.log).failure = Some(error);
        server
    }

    /// Ids of every removal request received
    #[must_use]
    pub fn removed(&self) -> Vec<ConnectionId> {
        lock(&self.log).removed.clone()
    }
}

#[async_trait]
impl ConnectionsServer for RecordingServer {
    async fn remove_connection(&self, id: ConnectionId) -> ServerResult<()> {
        let failure = {
            let mut log = lock(&self.log);
            log.removed.push(id);
            log.failure.clone()
        };
        failure.map_or(Ok(()), Err)
    }
}
