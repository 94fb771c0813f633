//! CLI argument parsing types using `clap`.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use crate::workspace::PaneOverrides;

/// `ConnPane` command-line interface for the connections pane
#[derive(Parser)]
#[command(name = "connpane-cli")]
#[command(author, version, about = "ConnPane command-line interface")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the configuration directory
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase output verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Session snapshot file (defaults to session.json in the config directory)
    #[arg(long, global = true, value_name = "FILE")]
    pub session: Option<PathBuf>,

    /// Client state file (defaults to client-state.json in the config directory)
    #[arg(long, global = true, value_name = "FILE")]
    pub state: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// File locations requested on the command line
    pub fn overrides(&self) -> PaneOverrides {
        PaneOverrides {
            config_dir: self.config.clone(),
            session_file: self.session.clone(),
            state_file: self.state.clone(),
            quiet: self.quiet,
        }
    }
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// List connections
    #[command(about = "List the connections shown in the pane")]
    List {
        /// Search query; every whitespace separated word must occur in the host
        #[arg(short = 'Q', long)]
        query: Option<String>,

        /// Output format for the connection list
        #[arg(short, long, default_value = "table", value_enum)]
        format: OutputFormat,
    },

    /// Explore a connection
    #[command(about = "Open a connection in the explorer")]
    Explore {
        /// Connection as `type://host`, host or display name
        connection: String,
    },

    /// Leave the explorer
    #[command(about = "Return from the explorer to the connection list")]
    Back,

    /// Remove a connection
    #[command(about = "Remove a connection from the session's list")]
    Remove {
        /// Connection as `type://host`, host or display name
        connection: String,

        /// Do not ask for confirmation
        #[arg(short, long)]
        yes: bool,
    },

    /// Create a connection
    #[command(about = "Create a new connection")]
    New,

    /// Generate shell completions
    #[command(about = "Generate shell completion scripts")]
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Output format for the list command
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human readable table
    #[default]
    Table,
    /// JSON document
    Json,
}
