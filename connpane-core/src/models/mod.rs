//! Data models for the connections pane

mod connection;
mod pane;

pub use connection::{Connection, ConnectionId};
pub use pane::{PaneHeight, PaneMode};
