//! Search support for the connection list
//!
//! Provides the host filter used by the pane's search box.

mod filter;

pub use filter::{FilterEngine, SearchQuery, filter_connections};
