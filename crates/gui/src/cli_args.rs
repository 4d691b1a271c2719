//! Command-line arguments for the GUI.

use clap::Parser;
use log::debug;
use misaki_core::error::Result;
use misaki_core::{config, file_handling};

#[derive(Parser, Debug)]
#[command(term_width = 0)]
pub struct Args {
    /// Path to the client config file YAML.
    ///
    /// If not provided, defaults to `~/.misaki/client.yml`.
    #[arg(long, short = 'c')]
    pub config_path: Option<String>,

    /// Base URL of the misaki server, overriding the config file.
    #[arg(long, short = 's')]
    pub server: Option<String>,
}

impl Args {
    /// Picks the server from `--server`, then the config file, then the default.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be read or parsed.
    pub fn resolve_server(&self) -> Result<String> {
        let config_path = config::get_config_path(&self.config_path);
        debug!("Config path: `{config_path}`");

        let client_config = file_handling::get_client_config(&config_path)?;
        Ok(client_config.server_url(self.server.as_deref()))
    }
}
