//! Event loop ordering and shutdown

use std::sync::Arc;

use connpane_core::{
    ClientState, Collaborators, Connection, ConnectionId, ConnectionsPresenter, DialogResponse,
    PaneError, PaneEvent, PaneMode, PresenterOptions, RecordingServer, RecordingView,
    ScriptedDisplay, SessionSnapshot, spawn_event_loop,
};

fn conn(host: &str) -> Connection {
    Connection::new(ConnectionId::new("odbc", host))
}

fn presenter(view: &RecordingView, server: &RecordingServer) -> ConnectionsPresenter {
    ConnectionsPresenter::new(
        Collaborators {
            view: Box::new(view.clone()),
            display: Box::new(ScriptedDisplay::answering(DialogResponse::Yes)),
            server: Arc::new(server.clone()),
        },
        SessionSnapshot::default(),
        ClientState::new(),
        PresenterOptions::default(),
    )
}

#[tokio::test]
async fn test_events_apply_in_order() {
    let view = RecordingView::new();
    let (handle, task) = spawn_event_loop(presenter(&view, &RecordingServer::new()));

    handle
        .send(PaneEvent::ConnectionListChanged(vec![conn("a1"), conn("b1")]))
        .expect("send");
    handle
        .send(PaneEvent::SearchQueryChanged("a".into()))
        .expect("send");
    handle
        .send(PaneEvent::ConnectionListChanged(vec![
            conn("a2"),
            conn("b2"),
            conn("a3"),
        ]))
        .expect("send");
    handle
        .send(PaneEvent::ExploreConnection(conn("a2")))
        .expect("send");
    handle.send(PaneEvent::SaveClientState).expect("send");
    drop(handle);

    let presenter = task.await.expect("event loop task");
    assert_eq!(view.displayed_hosts(), vec!["a2", "a3"]);
    assert_eq!(presenter.mode(), PaneMode::Exploring);
    assert!(!presenter.client_state().is_empty());
}

#[tokio::test]
async fn test_handles_from_many_tasks() {
    let view = RecordingView::new();
    let (handle, task) = spawn_event_loop(presenter(&view, &RecordingServer::new()));

    let mut senders = Vec::new();
    for i in 0..8 {
        let handle = handle.clone();
        senders.push(tokio::spawn(async move {
            handle
                .send(PaneEvent::ActiveConnectionsChanged(vec![ConnectionId::new(
                    "odbc",
                    format!("h{i}"),
                )]))
                .expect("send");
        }));
    }
    for sender in senders {
        sender.await.expect("sender task");
    }
    drop(handle);

    let presenter = task.await.expect("event loop task");
    assert_eq!(presenter.store().active_connections().len(), 1);
    assert_eq!(view.active().len(), 1);
}

#[tokio::test]
async fn test_remove_through_loop_reaches_server() {
    let view = RecordingView::new();
    let server = RecordingServer::new();
    view.select(Some(conn("x")));
    let (handle, task) = spawn_event_loop(presenter(&view, &server));

    handle.send(PaneEvent::RemoveConnection).expect("send");
    drop(handle);
    task.await.expect("event loop task");

    for _ in 0..100 {
        if !server.removed().is_empty() {
            break;
        }
        tokio::task::yield_now().await;
    }
    assert_eq!(server.removed(), vec![ConnectionId::new("odbc", "x")]);
}

#[tokio::test]
async fn test_send_after_stop_fails() {
    let view = RecordingView::new();
    let (handle, task) = spawn_event_loop(presenter(&view, &RecordingServer::new()));
    task.abort();
    let _ = task.await;

    assert!(handle.is_closed());
    assert!(matches!(
        handle.send(PaneEvent::BackToConnections),
        Err(PaneError::EventLoopClosed)
    ));
}
