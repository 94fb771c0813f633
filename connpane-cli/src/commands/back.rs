//! Back-to-list command.

use crate::display::TerminalDisplay;
use crate::error::CliError;
use crate::view::TerminalView;
use crate::workspace::{PaneOverrides, Workspace};

/// Back command handler
pub fn cmd_back(overrides: &PaneOverrides) -> Result<(), CliError> {
    let workspace = Workspace::open(overrides)?;
    let mut presenter = workspace.presenter(
        workspace.load_snapshot()?,
        TerminalView::new(),
        TerminalDisplay::new(),
        workspace.options(),
    )?;

    let previous = presenter.explored_connection().map(|c| c.id.clone());
    presenter.back_to_connections();
    workspace.save_client_state(&mut presenter)?;

    if !workspace.quiet() {
        match previous {
            Some(id) => println!("Closed explorer for {id}"),
            None => println!("Already showing the connection list"),
        }
    }
    Ok(())
}
