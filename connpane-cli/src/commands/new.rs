//! New connection command.

use crate::display::TerminalDisplay;
use crate::error::CliError;
use crate::view::TerminalView;
use crate::workspace::{PaneOverrides, Workspace};

/// New connection command handler
///
/// The presenter answers with an error dialog, which becomes the exit status.
pub fn cmd_new(overrides: &PaneOverrides) -> Result<(), CliError> {
    let workspace = Workspace::open(overrides)?;
    let display = TerminalDisplay::new();
    let mut presenter = workspace.presenter(
        workspace.load_snapshot()?,
        TerminalView::new(),
        display.clone(),
        workspace.options(),
    )?;

    presenter.new_connection();

    display.take_error().map_or(Ok(()), Err)
}
