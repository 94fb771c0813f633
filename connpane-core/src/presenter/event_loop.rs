//! Single-writer event loop for the presenter
//!
//! On a multi-threaded runtime notifications can originate anywhere. They are
//! funnelled through one unbounded channel into a task that owns the
//! presenter, so state changes are
//! applied strictly in arrival order.

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use super::events::PaneEvent;
use super::presenter::ConnectionsPresenter;
use crate::error::{PaneError, PaneResult};

/// Sending side of a running pane event loop
#[derive(Debug, Clone)]
pub struct PaneHandle {
    tx: mpsc::UnboundedSender<PaneEvent>,
}

impl PaneHandle {
    /// Queues a notification for the presenter
    ///
    /// # Errors
    ///
    /// Returns [`PaneError::EventLoopClosed`] if the loop has stopped.
    pub fn send(&self, event: PaneEvent) -> PaneResult<()> {
        self.tx.send(event).map_err(|_| PaneError::EventLoopClosed)
    }

    /// Returns true once the event loop has stopped
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}

/// Feeds every received notification to `presenter` until all senders are
/// dropped, then hands the presenter back
///
/// Handler errors are logged and do not stop the loop.
pub async fn run_event_loop(
    mut presenter: ConnectionsPresenter,
    mut rx: mpsc::UnboundedReceiver<PaneEvent>,
) -> ConnectionsPresenter {
    tracing::debug!("Pane event loop started");
    while let Some(event) = rx.recv().await {
        let name = event.name();
        if let Err(e) = presenter.handle_event(event) {
            tracing::error!(event = name, error = %e, "Pane event failed");
        }
    }
    tracing::debug!("Pane event loop stopped");
    presenter
}

/// Spawns [`run_event_loop`] on the current runtime
///
/// The returned task resolves to the presenter once every [`PaneHandle`]
/// clone has been dropped.
///
/// # Panics
///
/// Panics if called outside a tokio runtime.
pub fn spawn_event_loop(
    presenter: ConnectionsPresenter,
) -> (PaneHandle, JoinHandle<ConnectionsPresenter>) {
    let (tx, rx) = mpsc::unbounded_channel();
    let task = tokio::spawn(run_event_loop(presenter, rx));
    (PaneHandle { tx }, task)
}
