//! File-backed connections backend
//!
//! Stands in for the live session: a removal request rewrites the session
//! snapshot file without the connection and drops it from the active set.

use std::path::PathBuf;

use async_trait::async_trait;
use connpane_core::error::{ServerError, ServerResult};
use connpane_core::models::ConnectionId;
use connpane_core::presenter::ConnectionsServer;
use connpane_core::session::SessionSnapshot;

/// Backend that edits the session snapshot file
#[derive(Debug, Clone)]
pub struct SessionFileServer {
    path: PathBuf,
}

impl SessionFileServer {
    /// Creates a backend for the snapshot at `path`
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

#[async_trait]
impl ConnectionsServer for SessionFileServer {
    async fn remove_connection(&self, id: ConnectionId) -> ServerResult<()> {
        let json = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| ServerError::Transport(format!("{}: {e}", self.path.display())))?;
        let mut snapshot =
            SessionSnapshot::from_json(&json).map_err(|e| ServerError::Transport(e.to_string()))?;

        let before = snapshot.connection_list.len();
        snapshot.connection_list.retain(|c| c.id != id);
        if snapshot.connection_list.len() == before {
            return Err(ServerError::NotFound(id));
        }
        snapshot.active_connections.retain(|active| active != &id);

        let json = snapshot
            .to_json()
            .map_err(|e| ServerError::Transport(e.to_string()))?;
        tokio::fs::write(&self.path, json)
            .await
            .map_err(|e| ServerError::Transport(format!("{}: {e}", self.path.display())))?;

        tracing::info!(connection_id = %id, "Connection removed from session file");
        Ok(())
    }
}
