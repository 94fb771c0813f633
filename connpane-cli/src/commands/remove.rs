//! Remove connection command.

use connpane_core::presenter::{PaneEvent, RemoveOutcome};

use crate::display::TerminalDisplay;
use crate::error::CliError;
use crate::util::find_connection;
use crate::view::TerminalView;
use crate::workspace::{PaneOverrides, Workspace};

/// Remove connection command handler
///
/// Selects the connection, lets the presenter confirm and dispatch the
/// request, then reloads the session file and feeds the new list back to
/// the presenter the way a live backend notification would.
pub fn cmd_remove(overrides: &PaneOverrides, reference: &str, yes: bool) -> Result<(), CliError> {
    let workspace = Workspace::open(overrides)?;
    let snapshot = workspace.load_snapshot()?;
    let connection = find_connection(&snapshot.connection_list, reference)?.clone();

    let mut options = workspace.options();
    if yes {
        options.confirm_removal = false;
    }

    let display = TerminalDisplay::new();
    let mut presenter = workspace.presenter(
        snapshot,
        TerminalView::with_selection(connection),
        display.clone(),
        options,
    )?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let outcome = runtime.block_on(async {
        match presenter.remove_connection() {
            RemoveOutcome::Dispatched { id, task } => match task.await {
                Ok(()) => Ok(Some(id)),
                Err(e) => Err(CliError::Removal(format!("Request task failed: {e}"))),
            },
            RemoveOutcome::Declined => Ok(None),
            RemoveOutcome::NothingSelected => Err(display.take_error().unwrap_or_else(|| {
                CliError::Removal("No connection currently selected.".to_string())
            })),
            RemoveOutcome::NoRuntime => Err(CliError::Removal(
                "No runtime available for the request".to_string(),
            )),
        }
    })?;

    let Some(id) = outcome else {
        if !workspace.quiet() {
            println!("Removal cancelled");
        }
        return Ok(());
    };

    let refreshed = workspace.load_snapshot()?;
    let still_listed = refreshed.connection_list.iter().any(|c| c.id == id);
    presenter.handle_event(PaneEvent::ConnectionListChanged(refreshed.connection_list))?;
    presenter.handle_event(PaneEvent::ActiveConnectionsChanged(
        refreshed.active_connections,
    ))?;
    workspace.save_client_state(&mut presenter)?;

    if still_listed {
        return Err(CliError::Removal(format!(
            "{id} is still listed in {}",
            workspace.session_path().display()
        )));
    }

    if !workspace.quiet() {
        println!("Removed connection {id}");
    }
    Ok(())
}
