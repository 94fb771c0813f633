//! Explore connection command.

use crate::display::TerminalDisplay;
use crate::error::CliError;
use crate::util::find_connection;
use crate::view::TerminalView;
use crate::workspace::{PaneOverrides, Workspace};

/// Explore command handler
pub fn cmd_explore(overrides: &PaneOverrides, reference: &str) -> Result<(), CliError> {
    let workspace = Workspace::open(overrides)?;
    let mut presenter = workspace.presenter(
        workspace.load_snapshot()?,
        TerminalView::new(),
        TerminalDisplay::new(),
        workspace.options(),
    )?;

    let connection = find_connection(presenter.store().connections(), reference)?.clone();
    let label = format!("{} ({})", connection.label(), connection.id);
    presenter.explore_connection(connection);
    workspace.save_client_state(&mut presenter)?;

    if !workspace.quiet() {
        println!("Exploring {label}");
    }
    Ok(())
}
