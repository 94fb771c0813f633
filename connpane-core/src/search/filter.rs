//! Host search filter for the connection list
//!
//! A query is lower-cased and split on whitespace into tokens. A connection is
//! shown when every token occurs somewhere in its lower-cased host. An empty
//! query shows everything. Filtering is stable: the result keeps the order of
//! the input list.

use crate::models::Connection;

/// A parsed search query
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    /// Raw text as typed by the user
    raw: String,
    /// Lower-cased whitespace separated tokens
    tokens: Vec<String>,
}

impl SearchQuery {
    /// Parses raw user input into a query
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let tokens = raw
            .to_lowercase()
            .split_whitespace()
            .map(str::to_owned)
            .collect();
        Self {
            raw: raw.to_owned(),
            tokens,
        }
    }

    /// Raw text the query was parsed from
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Filter tokens
    #[must_use]
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Returns true if the query has no tokens and therefore matches everything
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Checks whether a connection passes the query
    #[must_use]
    pub fn matches(&self, connection: &Connection) -> bool {
        if self.tokens.is_empty() {
            return true;
        }
        let host = connection.host().to_lowercase();
        self.tokens.iter().all(|token| host.contains(token.as_str()))
    }
}

/// Returns the connections matching `query`, in input order
#[must_use]
pub fn filter_connections(connections: &[Connection], query: &SearchQuery) -> Vec<Connection> {
    connections
        .iter()
        .filter(|c| query.matches(c))
        .cloned()
        .collect()
}

/// Filter state for the pane
///
/// Remembers the last query so a refreshed connection list can be filtered
/// the same way the user last saw it.
#[derive(Debug, Clone, Default)]
pub struct FilterEngine {
    query: SearchQuery,
}

impl FilterEngine {
    /// Creates a filter engine with an empty query
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the current query
    pub fn set_query(&mut self, raw: &str) {
        self.query = SearchQuery::parse(raw);
    }

    /// Current query
    #[must_use]
    pub const fn query(&self) -> &SearchQuery {
        &self.query
    }

    /// Filters `connections` with the current query
    #[must_use]
    pub fn apply(&self, connections: &[Connection]) -> Vec<Connection> {
        let _span = tracing::debug_span!(
            crate::tracing::span_names::SEARCH_EXECUTE,
            query = %self.query.raw()
        )
        .entered();

        let results = filter_connections(connections, &self.query);
        tracing::debug!(
            total = connections.len(),
            result_count = results.len(),
            "Applied search filter"
        );
        results
    }
}
