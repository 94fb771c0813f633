//! Files a CLI invocation works on
//!
//! A [`Workspace`] resolves the configuration directory, the session
//! snapshot and the client state file, and builds a presenter over them.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use connpane_core::config::{ConfigManager, PaneSettings};
use connpane_core::presenter::{Collaborators, ConnectionsPresenter, PresenterOptions};
use connpane_core::session::{ClientState, SessionSnapshot};

use crate::display::TerminalDisplay;
use crate::error::CliError;
use crate::server::SessionFileServer;
use crate::util::create_config_manager;
use crate::view::TerminalView;

/// File locations and flags given on the command line
#[derive(Debug, Clone, Default)]
pub struct PaneOverrides {
    /// Configuration directory
    pub config_dir: Option<PathBuf>,
    /// Session snapshot file
    pub session_file: Option<PathBuf>,
    /// Client state file
    pub state_file: Option<PathBuf>,
    /// Suppress informational output
    pub quiet: bool,
}

/// Resolved settings and file paths for one invocation
#[derive(Debug)]
pub struct Workspace {
    settings: PaneSettings,
    session_path: PathBuf,
    state_path: PathBuf,
    quiet: bool,
}

impl Workspace {
    /// Loads settings and resolves file paths
    pub fn open(overrides: &PaneOverrides) -> Result<Self, CliError> {
        let config: ConfigManager = create_config_manager(overrides.config_dir.as_deref())?;
        let settings = config
            .load_settings()
            .map_err(|e| CliError::Config(format!("Failed to load settings: {e}")))?;

        let session_path = overrides
            .session_file
            .clone()
            .unwrap_or_else(|| config.session_file_path());
        let state_path = overrides
            .state_file
            .clone()
            .unwrap_or_else(|| config.state_file_path());

        tracing::debug!(
            session = %session_path.display(),
            state = %state_path.display(),
            "Resolved pane files"
        );

        Ok(Self {
            settings,
            session_path,
            state_path,
            quiet: overrides.quiet,
        })
    }

    /// Session snapshot file
    pub fn session_path(&self) -> &Path {
        &self.session_path
    }

    /// Returns true if informational output is suppressed
    pub const fn quiet(&self) -> bool {
        self.quiet
    }

    /// Reads the session snapshot; a missing file is an empty session
    pub fn load_snapshot(&self) -> Result<SessionSnapshot, CliError> {
        if !self.session_path.exists() {
            tracing::debug!(path = %self.session_path.display(), "No session file, starting empty");
            return Ok(SessionSnapshot::default());
        }
        Ok(SessionSnapshot::load_from_file(&self.session_path)?)
    }

    /// Builds a presenter over the session snapshot and the client state file
    pub fn presenter(
        &self,
        snapshot: SessionSnapshot,
        view: TerminalView,
        display: TerminalDisplay,
        options: PresenterOptions,
    ) -> Result<ConnectionsPresenter, CliError> {
        let client_state = ClientState::load_or_default(&self.state_path)
            .map_err(|e| CliError::State(format!("Failed to load client state: {e}")))?;

        Ok(ConnectionsPresenter::new(
            Collaborators {
                view: Box::new(view),
                display: Box::new(display),
                server: Arc::new(SessionFileServer::new(self.session_path.clone())),
            },
            snapshot,
            client_state,
            options,
        ))
    }

    /// Presenter options from the settings file
    pub fn options(&self) -> PresenterOptions {
        PresenterOptions::from(&self.settings)
    }

    /// Runs a save cycle and writes the client state file if anything changed
    pub fn save_client_state(&self, presenter: &mut ConnectionsPresenter) -> Result<(), CliError> {
        if presenter.save_client_state()? {
            presenter
                .client_state()
                .save_to_file(&self.state_path)
                .map_err(|e| CliError::State(format!("Failed to save client state: {e}")))?;
            tracing::debug!(path = %self.state_path.display(), "Client state saved");
        }
        Ok(())
    }
}
