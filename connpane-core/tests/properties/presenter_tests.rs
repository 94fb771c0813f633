//! Property tests for presenter state transitions
//!
//! A presenter is driven through random event sequences while a plain model
//! of the expected state is kept alongside. After every event the view must
//! show the model's filtered list and the pane mode must match.

use std::collections::HashSet;
use std::sync::Arc;

use proptest::prelude::*;
use connpane_core::{
    ClientState, Collaborators, Connection, ConnectionId, ConnectionsPresenter, DialogResponse,
    PaneEvent, PaneMode, PresenterOptions, RecordingServer, RecordingView, ScriptedDisplay,
    SearchQuery, SessionSnapshot, filter_connections,
};

#[derive(Debug, Clone)]
enum Action {
    ReplaceList(Vec<String>),
    Search(String),
    Explore(String),
    Back,
    Save,
    Updated(String),
}

fn arb_hosts() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("(prod|dev|test)-[a-c]{1,2}", 0..8)
}

fn arb_action() -> impl Strategy<Value = Action> {
    prop_oneof![
        arb_hosts().prop_map(Action::ReplaceList),
        "(prod|dev|a|b| |PROD a)?".prop_map(Action::Search),
        "(prod|dev)-[a-c]".prop_map(Action::Explore),
        Just(Action::Back),
        Just(Action::Save),
        "(prod|dev)-[a-c]".prop_map(Action::Updated),
    ]
}

fn conn(host: &str) -> Connection {
    Connection::new(ConnectionId::new("odbc", host))
}

fn dedup(hosts: &[String]) -> Vec<Connection> {
    let mut seen = HashSet::new();
    hosts
        .iter()
        .filter(|h| seen.insert((*h).clone()))
        .map(|h| conn(h))
        .collect()
}

fn presenter(view: &RecordingView, hosts: &[String]) -> ConnectionsPresenter {
    ConnectionsPresenter::new(
        Collaborators {
            view: Box::new(view.clone()),
            display: Box::new(ScriptedDisplay::answering(DialogResponse::No)),
            server: Arc::new(RecordingServer::new()),
        },
        SessionSnapshot::new(hosts.iter().map(|h| conn(h)).collect(), Vec::new()),
        ClientState::new(),
        PresenterOptions::default(),
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// The view always shows the current list filtered by the current query
    #[test]
    fn view_matches_model(
        initial in arb_hosts(),
        actions in prop::collection::vec(arb_action(), 0..25),
    ) {
        let view = RecordingView::new();
        let mut presenter = presenter(&view, &initial);

        let mut list = dedup(&initial);
        let mut query = String::new();
        let mut explored: Option<String> = None;

        prop_assert_eq!(view.displayed(), list.clone());

        for action in actions {
            let event = match action {
                Action::ReplaceList(hosts) => {
                    list = dedup(&hosts);
                    PaneEvent::ConnectionListChanged(hosts.iter().map(|h| conn(h)).collect())
                }
                Action::Search(raw) => {
                    query.clone_from(&raw);
                    PaneEvent::SearchQueryChanged(raw)
                }
                Action::Explore(host) => {
                    explored = Some(host.clone());
                    PaneEvent::ExploreConnection(conn(&host))
                }
                Action::Back => {
                    explored = None;
                    PaneEvent::BackToConnections
                }
                Action::Save => PaneEvent::SaveClientState,
                Action::Updated(host) => PaneEvent::ConnectionUpdated(conn(&host)),
            };
            presenter.handle_event(event).expect("handler should succeed");

            let expected = filter_connections(&list, &SearchQuery::parse(&query));
            prop_assert_eq!(view.displayed(), expected.clone());
            prop_assert_eq!(presenter.displayed_connections(), expected);
            prop_assert_eq!(presenter.store().connections(), list.as_slice());
            prop_assert_eq!(
                presenter.explored_connection().map(|c| c.host().to_owned()),
                explored.clone()
            );
            prop_assert_eq!(
                presenter.mode(),
                if explored.is_some() { PaneMode::Exploring } else { PaneMode::List }
            );
        }
    }

    /// Exploring never touches the list and list updates never touch the
    /// explored connection
    #[test]
    fn list_and_exploration_are_independent(
        initial in arb_hosts(),
        replacement in arb_hosts(),
        host in "(prod|dev)-[a-c]",
    ) {
        let view = RecordingView::new();
        let mut presenter = presenter(&view, &initial);

        presenter.explore_connection(conn(&host));
        let expected = dedup(&initial);
        prop_assert_eq!(presenter.store().connections(), expected.as_slice());

        presenter.on_connection_list_changed(replacement.iter().map(|h| conn(h)).collect());
        prop_assert_eq!(
            presenter.explored_connection().map(|c| c.host().to_owned()),
            Some(host)
        );
    }
}
