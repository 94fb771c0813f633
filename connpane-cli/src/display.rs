//! Terminal dialogs
//!
//! Questions are asked on stderr and answered on stdin. Error messages are
//! collected so the command can turn them into its exit status.

use std::io::{BufRead, Write};
use std::sync::{Arc, Mutex, PoisonError};

use connpane_core::presenter::{DialogResponse, GlobalDisplay};

use crate::error::CliError;

/// Dialog surface for a CLI invocation
#[derive(Debug, Clone, Default)]
pub struct TerminalDisplay {
    errors: Arc<Mutex<Vec<(String, String)>>>,
}

impl TerminalDisplay {
    /// Creates a display with no recorded errors
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the first error shown, as a CLI error
    pub fn take_error(&self) -> Option<CliError> {
        let mut errors = self.errors.lock().unwrap_or_else(PoisonError::into_inner);
        if errors.is_empty() {
            return None;
        }
        let (caption, message) = errors.remove(0);
        Some(CliError::Dialog { caption, message })
    }
}

/// Interprets a typed answer; only `y` and `yes` confirm
pub fn parse_answer(line: &str) -> DialogResponse {
    match line.trim().to_lowercase().as_str() {
        "y" | "yes" => DialogResponse::Yes,
        _ => DialogResponse::No,
    }
}

impl GlobalDisplay for TerminalDisplay {
    fn show_error_message(&mut self, caption: &str, message: &str) {
        tracing::debug!(caption, message, "Dialog error");
        self.errors
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((caption.to_owned(), message.to_owned()));
    }

    fn confirm(&mut self, caption: &str, message: &str) -> DialogResponse {
        let mut stderr = std::io::stderr();
        let _ = write!(stderr, "{caption}: {message} [y/N] ");
        let _ = stderr.flush();

        let mut line = String::new();
        match std::io::stdin().lock().read_line(&mut line) {
            Ok(_) => parse_answer(&line),
            Err(e) => {
                tracing::warn!(error = %e, "Could not read confirmation, assuming no");
                DialogResponse::No
            }
        }
    }
}
