//! Pane-level layout and mode values.

use serde::{Deserialize, Serialize};

/// Layout height hint sent to the view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaneHeight {
    /// Regular height shared with neighbouring panes
    #[default]
    Normal,
    /// Pane takes all available height
    Maximized,
}

/// Which surface the pane is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaneMode {
    /// The connection list
    #[default]
    List,
    /// The explorer for a single connection
    Exploring,
}

impl PaneMode {
    /// Returns true while a connection is being explored
    #[must_use]
    pub const fn is_exploring(self) -> bool {
        matches!(self, Self::Exploring)
    }
}

impl std::fmt::Display for PaneMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::List => write!(f, "list"),
            Self::Exploring => write!(f, "exploring"),
        }
    }
}
