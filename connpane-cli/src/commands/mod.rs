//! Command handler modules for the CLI.

mod back;
mod completions;
mod explore;
mod list;
mod new;
mod remove;

use crate::cli::Commands;
use crate::error::CliError;
use crate::workspace::PaneOverrides;

/// Dispatch a CLI command to the appropriate handler.
pub fn dispatch(overrides: &PaneOverrides, command: Commands) -> Result<(), CliError> {
    match command {
        Commands::List { query, format } => list::cmd_list(overrides, query.as_deref(), format),
        Commands::Explore { connection } => explore::cmd_explore(overrides, &connection),
        Commands::Back => back::cmd_back(overrides),
        Commands::Remove { connection, yes } => remove::cmd_remove(overrides, &connection, yes),
        Commands::New => new::cmd_new(overrides),
        Commands::Completions { shell } => completions::cmd_completions(shell),
    }
}
