//! The two endpoints of a misaki server.

use log::info;
use reqwest::Response;

use crate::command_definitions::Command;
use crate::error::{Error, Result};
use crate::http::HttpClient;

/// Path serving the JSON command list
pub const COMMANDS_PATH: &str = "/commands";
/// Path accepting a command trigger
pub const REQUEST_PATH: &str = "/request";
/// Multipart field naming the command to trigger
pub const COMMAND_FIELD: &str = "command";

/// Fetches the command list in the order the server sent it.
///
/// # Errors
///
/// Returns an error if the request fails or the body is not a command list.
pub async fn fetch_commands(client: &HttpClient) -> Result<Vec<Command>> {
    let response = client.request(COMMANDS_PATH, None).await?;
    let commands: Vec<Command> = response.json().await.map_err(Error::Decode)?;

    info!("Fetched {} command(s) from {}", commands.len(), client.base_url());
    Ok(commands)
}

/// Asks the server to run the command called `name`.
///
/// The response is returned as-is; the body is left unread.
///
/// # Errors
///
/// Returns an error on a non-success status or a transport failure.
pub async fn trigger_command(client: &HttpClient, name: &str) -> Result<Response> {
    info!("Triggering command `{name}`");
    client
        .request(REQUEST_PATH, Some(&[(COMMAND_FIELD, name)]))
        .await
}
