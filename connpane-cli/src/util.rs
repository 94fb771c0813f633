//! Shared utility functions used across command modules.

use std::path::Path;

use connpane_core::config::ConfigManager;
use connpane_core::models::{Connection, ConnectionId};

use crate::error::CliError;

/// Creates a `ConfigManager` using the optional custom config directory
/// from CLI args.
pub fn create_config_manager(config_path: Option<&Path>) -> Result<ConfigManager, CliError> {
    match config_path {
        Some(path) => Ok(ConfigManager::with_config_dir(path.to_path_buf())),
        None => ConfigManager::new()
            .map_err(|e| CliError::Config(format!("Failed to initialize config: {e}"))),
    }
}

/// Find a connection by `type://host`, host or display name
pub fn find_connection<'a>(
    connections: &'a [Connection],
    reference: &str,
) -> Result<&'a Connection, CliError> {
    // First try the full identifier
    if let Some(id) = ConnectionId::parse(reference) {
        return connections
            .iter()
            .find(|c| c.id == id)
            .ok_or_else(|| CliError::ConnectionNotFound(reference.to_string()));
    }

    // Then the host, then the display name
    let by_host: Vec<_> = connections.iter().filter(|c| c.host() == reference).collect();
    if !by_host.is_empty() {
        return single(reference, by_host);
    }

    let by_name: Vec<_> = connections
        .iter()
        .filter(|c| {
            c.display_name
                .as_deref()
                .is_some_and(|name| name.eq_ignore_ascii_case(reference))
        })
        .collect();
    if !by_name.is_empty() {
        return single(reference, by_name);
    }

    // Last resort: case-insensitive host match
    let by_host_ci: Vec<_> = connections
        .iter()
        .filter(|c| c.host().eq_ignore_ascii_case(reference))
        .collect();
    single(reference, by_host_ci)
}

fn single<'a>(reference: &str, matches: Vec<&'a Connection>) -> Result<&'a Connection, CliError> {
    match matches.as_slice() {
        [] => Err(CliError::ConnectionNotFound(reference.to_string())),
        [only] => Ok(*only),
        _ => {
            let ids: Vec<_> = matches.iter().map(|c| c.id.to_string()).collect();
            Err(CliError::Ambiguous {
                query: reference.to_string(),
                matches: ids.join(", "),
            })
        }
    }
}
