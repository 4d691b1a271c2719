//! Non-interactive actions: printing the list and triggering one command.

use std::process::ExitCode;

use itertools::Itertools;
use log::warn;

use misaki_core::api;
use misaki_core::board::Board;
use misaki_core::error::Result;
use misaki_core::http::HttpClient;
use misaki_core::status::Status;
use misaki_core::view::ItemView;

/// Outcome of a trigger from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerReport {
    pub status: Status,
    /// Body of the server's reply, or the reason the trigger failed
    pub message: String,
}

impl TriggerReport {
    /// Lines printed for a trigger of `name`: the final status, then the
    /// server's reply or the failure reason when there is one.
    pub fn lines(&self, name: &str) -> Vec<String> {
        let mut lines = vec![format!("{name}: {}", self.status)];
        if !self.message.is_empty() {
            lines.push(self.message.clone());
        }
        lines
    }

    /// Success only when the command ended done.
    pub fn exit_code(&self) -> ExitCode {
        if self.status == Status::Done {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        }
    }
}

/// Plain-text listing of the commands, one block per command.
pub fn format_command_list(items: &[ItemView]) -> String {
    items
        .iter()
        .map(|item| {
            let header = if item.memo.is_empty() {
                item.name.clone()
            } else {
                format!("{}: {}", item.name, item.memo)
            };
            std::iter::once(header)
                .chain(item.program_lines.iter().map(|line| format!("    $ {line}")))
                .join("\n")
        })
        .join("\n")
}

/// Triggers `name` on the board and collects the server's reply.
///
/// # Errors
///
/// Returns an error only if `name` is not on the board; a failed request is
/// reported through [`TriggerReport::status`].
pub async fn trigger_with_report(
    board: &mut Board,
    client: &HttpClient,
    name: &str,
) -> Result<TriggerReport> {
    board.press(name)?;
    let outcome = api::trigger_command(client, name).await;
    let status = board.settle(name, &outcome);

    let message = match outcome {
        Ok(response) => response.text().await.unwrap_or_else(|e| {
            warn!("Could not read the reply to `{name}`: {e}");
            String::new()
        }),
        Err(e) => e.to_string(),
    };

    Ok(TriggerReport { status, message })
}
