//! The command board: the fetched list plus the status of every item.
//!
//! Triggering a command is split in two so a front-end can keep the board on
//! its own loop while the request is awaited elsewhere:
//!
//! 1. [`Board::press`] clears every status and marks the pressed item in
//!    flight;
//! 2. the caller awaits [`crate::api::trigger_command`];
//! 3. [`Board::settle`] records done or error for that item.
//!
//! Presses are not guarded against each other. A second press while a
//! request is in flight clears the first item's marker, and the first
//! request still settles its own item when it completes.

use std::fmt::Display;

use log::{debug, warn};

use crate::api;
use crate::command_definitions::Command;
use crate::error::{Error, Result};
use crate::http::HttpClient;
use crate::registry::StatusRegistry;
use crate::status::Status;
use crate::view::{self, ItemView, ViewNode};

#[derive(Debug, Clone, Default)]
pub struct Board {
    commands: Vec<Command>,
    statuses: StatusRegistry,
}

impl Board {
    pub fn new(commands: Vec<Command>) -> Self {
        let statuses = StatusRegistry::from_commands(&commands);
        Self { commands, statuses }
    }

    /// Fetches the command list from the server and builds a board from it.
    ///
    /// # Errors
    ///
    /// Returns an error if the list cannot be fetched or decoded.
    pub async fn load(client: &HttpClient) -> Result<Self> {
        let commands = api::fetch_commands(client).await?;
        Ok(Self::new(commands))
    }

    /// The item called `name`, with its current status.
    pub fn item(&self, name: &str) -> Option<ItemView> {
        let command = self.command(name)?;
        Some(ItemView::new(command, self.status(name)))
    }

    pub fn command(&self, name: &str) -> Option<&Command> {
        self.commands.iter().find(|command| command.name == name)
    }

    pub fn status(&self, name: &str) -> Status {
        self.statuses.status_of(name)
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Clears every status, then marks `name` in flight.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownCommand`] if `name` is not on the board. The
    /// statuses are left untouched in that case.
    pub fn press(&mut self, name: &str) -> Result<()> {
        if !self.statuses.contains(name) {
            return Err(Error::UnknownCommand(name.to_string()));
        }

        let cleared = self.statuses.in_flight();
        if !cleared.is_empty() {
            debug!("Press on `{name}` clears in-flight {cleared:?}");
        }

        self.statuses.reset_all();
        self.statuses.set(name, Status::InFlight);
        Ok(())
    }

    /// Records the outcome of a trigger for `name` and returns its new status.
    ///
    /// The item is settled whatever it currently shows, including after a
    /// later press has already cleared it.
    pub fn settle<T, E: Display>(
        &mut self,
        name: &str,
        outcome: &std::result::Result<T, E>,
    ) -> Status {
        if let Err(e) = outcome {
            debug!("Trigger of `{name}` failed: {e}");
        }

        let status = Status::settled(outcome.is_ok());
        if !self.statuses.set(name, status) {
            warn!("Settled `{name}` which is not on the board");
        }
        status
    }

    /// Presses `name`, awaits the trigger request and settles the result.
    ///
    /// # Errors
    ///
    /// Only an unknown command is an error here; a failed request is
    /// reported as [`Status::Error`].
    pub async fn trigger(&mut self, client: &HttpClient, name: &str) -> Result<Status> {
        self.press(name)?;
        let outcome = api::trigger_command(client, name).await;
        Ok(self.settle(name, &outcome))
    }

    pub fn items(&self) -> Vec<ItemView> {
        view::item_views(&self.commands, &self.statuses)
    }

    pub fn render(&self) -> ViewNode {
        view::render_list(&self.commands, &self.statuses)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board() -> Board {
        let commands = ["build", "test", "deploy"]
            .iter()
            .map(|name| Command {
                name: (*name).to_string(),
                memo: format!("{name} memo"),
                programs: vec![vec!["make".to_string(), (*name).to_string()]],
                output: false,
            })
            .collect();
        Board::new(commands)
    }

    fn success() -> Result<()> {
        Ok(())
    }

    fn failure() -> Result<()> {
        Err(Error::Http {
            status: "500 Internal Server Error".to_string(),
        })
    }

    #[test]
    fn test_press_marks_in_flight_and_clears_others() {
        let mut board = board();
        board.settle("build", &success());
        board.settle("test", &failure());

        board.press("deploy").unwrap();

        assert_eq!(board.status("build"), Status::None);
        assert_eq!(board.status("test"), Status::None);
        assert_eq!(board.status("deploy"), Status::InFlight);
    }

    #[test]
    fn test_settle_success_and_failure() {
        let mut board = board();

        board.press("build").unwrap();
        assert_eq!(board.settle("build", &success()), Status::Done);
        assert_eq!(board.status("build"), Status::Done);

        board.press("test").unwrap();
        assert_eq!(board.status("build"), Status::None);
        assert_eq!(board.settle("test", &failure()), Status::Error);
        assert_eq!(board.status("test"), Status::Error);
    }

    #[test]
    fn test_press_unknown_command_leaves_statuses() {
        let mut board = board();
        board.settle("build", &success());

        let result = board.press("missing");
        assert!(matches!(result, Err(Error::UnknownCommand(name)) if name == "missing"));
        assert_eq!(board.status("build"), Status::Done);
    }

    #[test]
    fn test_overlapping_presses_settle_their_own_items() {
        let mut board = board();

        board.press("build").unwrap();
        board.press("test").unwrap();
        // The second press cleared the first marker before its request resolved
        assert_eq!(board.status("build"), Status::None);
        assert_eq!(board.status("test"), Status::InFlight);

        board.settle("build", &success());
        assert_eq!(board.status("build"), Status::Done);
        assert_eq!(board.status("test"), Status::InFlight);

        board.settle("test", &failure());
        assert_eq!(board.status("build"), Status::Done);
        assert_eq!(board.status("test"), Status::Error);
    }

    #[test]
    fn test_render_reflects_statuses() {
        let mut board = board();
        board.press("test").unwrap();

        let list = board.render();
        let statuses = list.find_all_by_class("status");
        assert_eq!(statuses.len(), 3);
        assert!(statuses[1].has_class("status-inflight"));
        assert_eq!(list.find_all_by_class("status-inflight").len(), 1);
    }

    #[test]
    fn test_item_carries_current_status() {
        let mut board = board();
        board.press("deploy").unwrap();

        let item = board.item("deploy").unwrap();
        assert_eq!(item.status, Status::InFlight);
        assert_eq!(item.program_lines, vec!["make deploy"]);
        assert_eq!(board.item("build").unwrap().status, Status::None);
    }

    #[test]
    fn test_items_in_list_order() {
        let board = board();
        let names: Vec<_> = board.items().into_iter().map(|item| item.name).collect();
        assert_eq!(names, vec!["build", "test", "deploy"]);
        assert_eq!(board.command("test").unwrap().memo, "test memo");
        assert!(board.item("missing").is_none());
        assert_eq!(board.len(), 3);
        assert!(!board.is_empty());
    }
}
