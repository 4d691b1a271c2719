//! Reading the client configuration file.

use std::fs::File;
use std::path::Path;

use log::debug;

use crate::config::ClientConfig;
use crate::error::{Error, Result};

fn get_reader(file_description: &str, path: &str) -> Result<File> {
    File::open(path).map_err(|e| Error::io_error(file_description.to_string(), path.to_string(), e))
}

/// Reads the client configuration from `config_path`.
///
/// A missing file is not an error: the defaults are returned instead.
///
/// # Errors
///
/// Returns an error if:
/// - The file exists but cannot be read
/// - The file contains invalid YAML
/// - The YAML doesn't match the expected structure
pub fn get_client_config(config_path: &str) -> Result<ClientConfig> {
    if !Path::exists(Path::new(config_path)) {
        debug!("No config at `{config_path}`, using defaults");
        return Ok(ClientConfig::default());
    }

    let reader = get_reader("client config", config_path)?;

    // An empty file deserializes to unit, not to a mapping
    let config: Option<ClientConfig> = serde_yaml::from_reader(reader).map_err(|e| {
        Error::yaml_error(
            "reading".to_string(),
            "client config".to_string(),
            config_path.to_string(),
            e,
        )
    })?;

    Ok(config.unwrap_or_default())
}
