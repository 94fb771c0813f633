//! Client state and snapshot files on disk

use std::sync::Arc;

use connpane_core::presenter::{KEY_EXPLORED_CONNECTION, MODULE_CONNECTIONS};
use connpane_core::{
    ClientState, Collaborators, ConfigManager, Connection, ConnectionId, ConnectionsPresenter,
    DialogResponse, PaneMode, PaneSettings, PresenterOptions, RecordingServer, RecordingView,
    ScriptedDisplay, SessionSnapshot,
};

fn open(
    view: &RecordingView,
    snapshot: SessionSnapshot,
    state: ClientState,
    options: PresenterOptions,
) -> ConnectionsPresenter {
    ConnectionsPresenter::new(
        Collaborators {
            view: Box::new(view.clone()),
            display: Box::new(ScriptedDisplay::answering(DialogResponse::Yes)),
            server: Arc::new(RecordingServer::new()),
        },
        snapshot,
        state,
        options,
    )
}

#[test]
fn test_explored_connection_survives_restart() {
    let temp_dir = tempfile::tempdir().expect("temp dir should be created");
    let config = ConfigManager::with_config_dir(temp_dir.path().to_path_buf());

    let explored = Connection::new(ConnectionId::new("spark", "cluster-1"))
        .with_display_name("Spark")
        .with_connect_code("sc <- spark_connect()");
    let snapshot = SessionSnapshot::new(vec![explored.clone()], Vec::new());
    snapshot
        .save_to_file(&config.session_file_path())
        .expect("snapshot saved");

    let view = RecordingView::new();
    let mut presenter = open(
        &view,
        SessionSnapshot::load_from_file(&config.session_file_path()).expect("snapshot"),
        ClientState::load_or_default(&config.state_file_path()).expect("state"),
        PresenterOptions::default(),
    );
    presenter.explore_connection(explored.clone());
    assert!(presenter.save_client_state().expect("save"));
    presenter
        .client_state()
        .save_to_file(&config.state_file_path())
        .expect("state saved");

    let view = RecordingView::new();
    let presenter = open(
        &view,
        SessionSnapshot::load_from_file(&config.session_file_path()).expect("snapshot"),
        ClientState::load_from_file(&config.state_file_path()).expect("state"),
        PresenterOptions::default(),
    );
    let restored = presenter.explored_connection().expect("restored");
    assert_eq!(restored.id, explored.id);
    assert_eq!(restored.connect_code.as_deref(), Some("sc <- spark_connect()"));
}

#[test]
fn test_restore_disabled_by_settings_file() {
    let temp_dir = tempfile::tempdir().expect("temp dir should be created");
    let config = ConfigManager::with_config_dir(temp_dir.path().to_path_buf());

    let mut settings = PaneSettings::default();
    settings.pane.restore_explored_connection = false;
    config.save_settings(&settings).expect("settings saved");

    let mut state = ClientState::new();
    state.set(
        MODULE_CONNECTIONS,
        KEY_EXPLORED_CONNECTION,
        serde_json::to_value(Connection::new(ConnectionId::new("odbc", "h"))).expect("json"),
    );

    let loaded = config.load_settings().expect("settings loaded");
    let view = RecordingView::new();
    let mut presenter = open(
        &view,
        SessionSnapshot::default(),
        state,
        PresenterOptions::from(&loaded),
    );
    assert_eq!(presenter.mode(), PaneMode::List);
    assert!(presenter.save_client_state().expect("save"));
}

#[test]
fn test_backend_payload_round_trips() {
    let json = r#"{
        "connectionList": [
            {
                "id": { "type": "odbc", "host": "db.example.com" },
                "displayName": "Warehouse",
                "lastUsed": 1700000000,
                "icon": "odbc.png",
                "actions": [{ "name": "Help" }]
            }
        ],
        "activeConnections": [{ "type": "odbc", "host": "db.example.com" }]
    }"#;

    let snapshot = SessionSnapshot::from_json(json).expect("valid snapshot");
    let connection = &snapshot.connection_list[0];
    assert_eq!(connection.label(), "Warehouse");
    assert_eq!(connection.extra.get("icon"), Some(&serde_json::json!("odbc.png")));
    assert_eq!(snapshot.active_connections.len(), 1);

    let reparsed = SessionSnapshot::from_json(&snapshot.to_json().expect("json")).expect("parse");
    assert_eq!(reparsed.connection_list[0].extra, connection.extra);
    assert_eq!(reparsed.connection_list[0].last_used, connection.last_used);
}
