//! Property tests for client state persistence

use proptest::prelude::*;
use connpane_core::{ClientState, Connection, ConnectionId, ExplorationState, StateValue};
use serde_json::Value;

fn arb_key() -> impl Strategy<Value = String> {
    "[a-z][a-zA-Z0-9-]{0,15}"
}

fn arb_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        "[ -~]{0,20}".prop_map(Value::from),
    ]
}

fn arb_connection() -> impl Strategy<Value = Connection> {
    (
        "[a-z]{2,8}",
        "[a-z0-9.-]{1,20}",
        proptest::option::of("[ -~]{0,20}"),
        proptest::option::of(0i64..4_000_000_000),
    )
        .prop_map(|(kind, host, name, last_used)| {
            let mut connection = Connection::new(ConnectionId::new(kind, host));
            connection.display_name = name;
            connection.last_used = last_used.and_then(|s| chrono::DateTime::from_timestamp(s, 0));
            connection
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Every stored entry survives a JSON round-trip
    #[test]
    fn entries_survive_json(
        entries in prop::collection::vec((arb_key(), arb_key(), arb_value()), 0..10),
    ) {
        let mut state = ClientState::new();
        for (module, key, value) in &entries {
            state.set(module, key, value.clone());
        }

        let json = state.to_json().expect("serializable");
        let restored = ClientState::from_json(&json).expect("parsable");
        for (module, key, _) in &entries {
            prop_assert_eq!(restored.get(module, key), state.get(module, key));
        }
    }

    /// A written explored connection is restored with its full payload and
    /// is not dirty right after restore
    #[test]
    fn explored_connection_restores_clean(connection in arb_connection()) {
        let mut state = ClientState::new();
        let mut source = ExplorationState::new();
        source.explore(connection.clone());
        prop_assert!(state.collect_value(&mut source).expect("serializable"));

        let reloaded = ClientState::from_json(&state.to_json().expect("json")).expect("parse");
        let mut target = ExplorationState::new();
        reloaded.init_value(&mut target).expect("valid value");

        let restored = target.explored().cloned().expect("restored");
        prop_assert_eq!(&restored.id, &connection.id);
        prop_assert_eq!(&restored.display_name, &connection.display_name);
        prop_assert_eq!(restored.last_used, connection.last_used);
        prop_assert!(!target.has_changed());
    }
}
