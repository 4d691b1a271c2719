//! Client configuration for misaki.
//!
//! This module resolves the configuration file path, expanding shell
//! variables like `~`, and picks the server URL from the command line, the
//! file or the default, in that order.

use serde::{Deserialize, Serialize};

/// Default path for the client configuration file
const DEFAULT_CONFIG_PATH: &str = "~/.misaki/client.yml";

/// Server address used when neither the command line nor the file sets one
pub const DEFAULT_SERVER_URL: &str = "http://localhost:8080";

/// Settings read from the client configuration file.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    #[serde(default = "default_server")]
    pub server: String,
}

fn default_server() -> String {
    DEFAULT_SERVER_URL.to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            server: default_server(),
        }
    }
}

impl ClientConfig {
    /// Returns the server URL, preferring `server_arg` when given.
    pub fn server_url(&self, server_arg: Option<&str>) -> String {
        server_arg.unwrap_or(&self.server).to_string()
    }
}

/// Resolves the configuration file path.
///
/// If a custom path is provided, uses that path. Otherwise, uses the default
/// configuration path. Shell expansions like `~` are resolved.
///
/// # Examples
///
/// ```
/// use misaki_core::config::get_config_path;
///
/// // Use default path
/// let default_path = get_config_path(&None);
///
/// // Use custom path
/// let custom_path = get_config_path(&Some("/path/to/client.yml".to_string()));
/// assert_eq!(custom_path, "/path/to/client.yml");
/// ```
pub fn get_config_path(config_path_arg: &Option<String>) -> String {
    let config_path = match config_path_arg {
        Some(config_path) => config_path,
        None => DEFAULT_CONFIG_PATH,
    };

    shellexpand::tilde(config_path).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_config_path_with_custom_path() {
        let custom_path = Some("/custom/path/client.yml".to_string());
        let result = get_config_path(&custom_path);
        assert_eq!(result, "/custom/path/client.yml");
    }

    #[test]
    fn test_get_config_path_with_none() {
        let result = get_config_path(&None);
        // Should expand the tilde in the default path
        assert!(result.ends_with(".misaki/client.yml"));
        assert!(!result.starts_with('~'));
    }

    #[test]
    fn test_get_config_path_with_tilde() {
        let tilde_path = Some("~/my-client.yml".to_string());
        let result = get_config_path(&tilde_path);
        assert!(!result.starts_with('~'));
        assert!(result.ends_with("my-client.yml"));
    }

    #[test]
    fn test_server_url_precedence() {
        let config = ClientConfig {
            server: "http://from-file:9000".to_string(),
        };
        assert_eq!(config.server_url(None), "http://from-file:9000");
        assert_eq!(
            config.server_url(Some("http://from-arg:1234")),
            "http://from-arg:1234"
        );
    }

    #[test]
    fn test_default_server() {
        assert_eq!(ClientConfig::default().server, "http://localhost:8080");
    }
}
