//! Asynchronous removal requests

use std::sync::Arc;

use connpane_core::presenter::{NO_CONNECTION_SELECTED, REMOVE_CONNECTION_CAPTION};
use connpane_core::{
    ClientState, Collaborators, Connection, ConnectionId, ConnectionsPresenter, DialogResponse,
    PresenterOptions, RecordingServer, RecordingView, RemoveOutcome, ScriptedDisplay, ServerError,
    SessionSnapshot,
};

fn conn(host: &str) -> Connection {
    Connection::new(ConnectionId::new("jdbc", host))
}

fn presenter(
    view: &RecordingView,
    display: &ScriptedDisplay,
    server: &RecordingServer,
) -> ConnectionsPresenter {
    ConnectionsPresenter::new(
        Collaborators {
            view: Box::new(view.clone()),
            display: Box::new(display.clone()),
            server: Arc::new(server.clone()),
        },
        SessionSnapshot::new(vec![conn("one"), conn("two")], Vec::new()),
        ClientState::new(),
        PresenterOptions::default(),
    )
}

#[tokio::test]
async fn test_confirmed_removal_reaches_server() {
    let view = RecordingView::new();
    let display = ScriptedDisplay::answering(DialogResponse::Yes);
    let server = RecordingServer::new();
    let mut presenter = presenter(&view, &display, &server);

    view.select(Some(conn("two")));
    let RemoveOutcome::Dispatched { id, task } = presenter.remove_connection() else {
        panic!("expected dispatch");
    };
    task.await.expect("request task");

    assert_eq!(id, ConnectionId::new("jdbc", "two"));
    assert_eq!(server.removed(), vec![id]);
    assert_eq!(display.questions().len(), 1);
    // The list only changes when the backend reports it
    assert_eq!(presenter.store().len(), 2);
}

#[tokio::test]
async fn test_failed_removal_is_contained() {
    let view = RecordingView::new();
    let display = ScriptedDisplay::answering(DialogResponse::Yes);
    let server = RecordingServer::failing(ServerError::Transport("connection reset".into()));
    let mut presenter = presenter(&view, &display, &server);

    view.select(Some(conn("one")));
    let RemoveOutcome::Dispatched { task, .. } = presenter.remove_connection() else {
        panic!("expected dispatch");
    };
    task.await.expect("failure is logged, not propagated");

    assert_eq!(server.removed().len(), 1);
    assert!(display.errors().is_empty());
    assert_eq!(presenter.store().len(), 2);
}

#[tokio::test]
async fn test_declined_and_unselected_removals() {
    let view = RecordingView::new();
    let display = ScriptedDisplay::answering(DialogResponse::No);
    let server = RecordingServer::new();
    let mut presenter = presenter(&view, &display, &server);

    assert!(matches!(
        presenter.remove_connection(),
        RemoveOutcome::NothingSelected
    ));
    assert_eq!(display.errors()[0].caption, REMOVE_CONNECTION_CAPTION);
    assert_eq!(display.errors()[0].message, NO_CONNECTION_SELECTED);

    view.select(Some(conn("one")));
    assert!(matches!(presenter.remove_connection(), RemoveOutcome::Declined));

    tokio::task::yield_now().await;
    assert!(server.removed().is_empty());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_removal_on_multi_thread_runtime() {
    let view = RecordingView::new();
    let display = ScriptedDisplay::answering(DialogResponse::Yes);
    let server = RecordingServer::new();
    let mut presenter = presenter(&view, &display, &server);

    view.select(Some(conn("one")));
    view.select(Some(conn("two")));
    let mut tasks = Vec::new();
    for _ in 0..3 {
        if let RemoveOutcome::Dispatched { task, .. } = presenter.remove_connection() {
            tasks.push(task);
        }
    }
    for task in tasks {
        task.await.expect("request task");
    }

    assert_eq!(server.removed().len(), 3);
    assert!(
        server
            .removed()
            .iter()
            .all(|id| id == &ConnectionId::new("jdbc", "two"))
    );
}
