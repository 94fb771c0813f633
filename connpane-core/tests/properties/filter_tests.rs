//! Property tests for the host search filter

use proptest::prelude::*;
use connpane_core::{Connection, ConnectionId, FilterEngine, SearchQuery, filter_connections};

// ========== Strategies ==========

fn arb_host() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9.-]{1,16}"
}

fn arb_connections() -> impl Strategy<Value = Vec<Connection>> {
    prop::collection::vec(arb_host(), 0..20).prop_map(|hosts| {
        hosts
            .into_iter()
            .map(|h| Connection::new(ConnectionId::new("odbc", h)))
            .collect()
    })
}

fn arb_query() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        "[ \t]{1,4}",
        "[a-zA-Z0-9.-]{1,4}",
        "[a-zA-Z0-9.-]{1,3}[ \t]{1,2}[a-zA-Z0-9.-]{1,3}",
    ]
}

fn is_subsequence(needle: &[Connection], haystack: &[Connection]) -> bool {
    let mut rest = haystack.iter();
    needle.iter().all(|n| rest.any(|h| h.id == n.id))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// The filtered list keeps input order and never invents rows
    #[test]
    fn filtered_list_is_subsequence(connections in arb_connections(), raw in arb_query()) {
        let query = SearchQuery::parse(&raw);
        let filtered = filter_connections(&connections, &query);
        prop_assert!(filtered.len() <= connections.len());
        prop_assert!(is_subsequence(&filtered, &connections));
    }

    /// Every kept row contains every token, every dropped row misses one
    #[test]
    fn filter_is_conjunctive(connections in arb_connections(), raw in arb_query()) {
        let query = SearchQuery::parse(&raw);
        let filtered = filter_connections(&connections, &query);
        for connection in &connections {
            let host = connection.host().to_lowercase();
            let all_tokens = query.tokens().iter().all(|t| host.contains(t.as_str()));
            let kept = filtered.iter().any(|c| c.id == connection.id);
            prop_assert_eq!(kept, all_tokens);
        }
    }

    /// Whitespace-only queries show everything
    #[test]
    fn blank_query_is_identity(connections in arb_connections(), raw in "[ \t\n]{0,6}") {
        let query = SearchQuery::parse(&raw);
        prop_assert!(query.is_empty());
        prop_assert_eq!(filter_connections(&connections, &query), connections);
    }

    /// Filtering is insensitive to query case
    #[test]
    fn filter_ignores_query_case(connections in arb_connections(), raw in arb_query()) {
        let lower = filter_connections(&connections, &SearchQuery::parse(&raw.to_lowercase()));
        let upper = filter_connections(&connections, &SearchQuery::parse(&raw.to_uppercase()));
        prop_assert_eq!(lower, upper);
    }

    /// Applying the same query twice gives the same rows as applying it once
    #[test]
    fn filter_is_idempotent(connections in arb_connections(), raw in arb_query()) {
        let query = SearchQuery::parse(&raw);
        let once = filter_connections(&connections, &query);
        let twice = filter_connections(&once, &query);
        prop_assert_eq!(once, twice);
    }

    /// The engine always filters the list it is handed, not an earlier one
    #[test]
    fn engine_has_no_stale_results(
        first in arb_connections(),
        second in arb_connections(),
        raw in arb_query(),
    ) {
        let mut engine = FilterEngine::new();
        engine.set_query(&raw);
        let _ = engine.apply(&first);
        let result = engine.apply(&second);
        prop_assert_eq!(result, filter_connections(&second, &SearchQuery::parse(&raw)));
    }
}
