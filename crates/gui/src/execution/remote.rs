use misaki_core::api;
use misaki_core::command_definitions::Command;
use misaki_core::http::HttpClient;

/// Fetches the command list, keeping only the error message on failure.
pub async fn load_commands(client: HttpClient) -> Result<Vec<Command>, String> {
    api::fetch_commands(&client)
        .await
        .map_err(|e| format!("Failed to load commands: {e}"))
}

/// Posts a trigger for `name`. The reply body is not read.
pub async fn trigger_command(client: HttpClient, name: String) -> Result<(), String> {
    api::trigger_command(&client, &name)
        .await
        .map(|_| ())
        .map_err(|e| e.to_string())
}
