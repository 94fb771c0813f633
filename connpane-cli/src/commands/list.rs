//! List connections command.

use std::fmt::Write as _;

use connpane_core::models::{Connection, PaneMode};
use connpane_core::presenter::ConnectionsPresenter;
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::display::TerminalDisplay;
use crate::error::CliError;
use crate::view::TerminalView;
use crate::workspace::{PaneOverrides, Workspace};

/// List connections command handler
pub fn cmd_list(
    overrides: &PaneOverrides,
    query: Option<&str>,
    format: OutputFormat,
) -> Result<(), CliError> {
    let workspace = Workspace::open(overrides)?;
    let mut presenter = workspace.presenter(
        workspace.load_snapshot()?,
        TerminalView::new(),
        TerminalDisplay::new(),
        workspace.options(),
    )?;

    if let Some(query) = query {
        presenter.on_search_query_changed(query);
    }

    match format {
        OutputFormat::Table => println!("{}", format_table(&presenter)),
        OutputFormat::Json => println!("{}", format_json(&presenter)?),
    }

    workspace.save_client_state(&mut presenter)?;
    Ok(())
}

/// Format the displayed connections as a table string
///
/// Active connections are marked with `*`. The explored connection, if any,
/// is named below the table.
#[must_use]
pub fn format_table(presenter: &ConnectionsPresenter) -> String {
    let connections = presenter.displayed_connections();
    let mut output = String::new();

    if connections.is_empty() {
        output.push_str("No connections found.");
    } else {
        let type_width = column_width(&connections, "TYPE", |c| c.id.connection_type.len());
        let host_width = column_width(&connections, "HOST", |c| c.host().len());

        let _ = writeln!(
            output,
            "   {:<type_width$}  {:<host_width$}  NAME",
            "TYPE", "HOST"
        );
        let _ = writeln!(
            output,
            "   {:-<type_width$}  {:-<host_width$}  ----",
            "", ""
        );
        for conn in &connections {
            let marker = if presenter.store().is_active(&conn.id) {
                '*'
            } else {
                ' '
            };
            let _ = writeln!(
                output,
                " {marker} {:<type_width$}  {:<host_width$}  {}",
                conn.id.connection_type,
                conn.host(),
                conn.display_name.as_deref().unwrap_or("")
            );
        }
    }

    if let Some(explored) = presenter.explored_connection() {
        let _ = write!(output, "\nExploring: {} ({})", explored.label(), explored.id);
    }

    output.trim_end().to_string()
}

fn column_width(
    connections: &[Connection],
    header: &str,
    len: impl Fn(&Connection) -> usize,
) -> usize {
    connections
        .iter()
        .map(len)
        .max()
        .unwrap_or(0)
        .max(header.len())
}

/// JSON document produced by `list --format json`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListOutput {
    /// Pane mode
    pub mode: PaneMode,
    /// Current search query
    pub query: String,
    /// Displayed connections
    pub connections: Vec<ConnectionOutput>,
    /// Explored connection
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explored: Option<Connection>,
}

/// One row of the JSON list
#[derive(Debug, Serialize)]
pub struct ConnectionOutput {
    /// Connection as reported by the backend
    #[serde(flatten)]
    pub connection: Connection,
    /// Whether the connection is live
    pub active: bool,
}

/// Format the pane state as a JSON string
///
/// # Errors
///
/// Returns `CliError::Output` if JSON serialization fails.
pub fn format_json(presenter: &ConnectionsPresenter) -> Result<String, CliError> {
    let output = ListOutput {
        mode: presenter.mode(),
        query: presenter.query().to_string(),
        connections: presenter
            .displayed_connections()
            .into_iter()
            .map(|connection| ConnectionOutput {
                active: presenter.store().is_active(&connection.id),
                connection,
            })
            .collect(),
        explored: presenter.explored_connection().cloned(),
    };
    serde_json::to_string_pretty(&output)
        .map_err(|e| CliError::Output(format!("Failed to serialize to JSON: {e}")))
}
