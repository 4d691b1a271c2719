use crate::app::Message;
use crate::execution::{load_commands, trigger_command};
use iced::{Element, Task};
use log::{error, info, warn};
use misaki_core::board::Board;
use misaki_core::http::HttpClient;
use misaki_core::view::ItemView;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Loaded,
    Failed(String),
}

pub struct MisakiApp {
    pub client: Option<HttpClient>,
    pub board: Board,
    pub load_state: LoadState,
    pub selected: Option<String>,
}

impl MisakiApp {
    /// Builds the app for `server` and starts fetching the command list.
    pub fn new(server: &str) -> (Self, Task<Message>) {
        match HttpClient::new(server) {
            Ok(client) => {
                info!("Loading commands from `{}`", client.base_url());
                let task = Task::perform(load_commands(client.clone()), Message::CommandsLoaded);
                (Self::with_client(Some(client), LoadState::Loading), task)
            }
            Err(e) => {
                error!("Invalid server `{server}`: {e}");
                Self::failed(e.to_string())
            }
        }
    }

    /// Builds an app that shows `reason` instead of the list.
    pub fn failed(reason: String) -> (Self, Task<Message>) {
        (Self::with_client(None, LoadState::Failed(reason)), Task::none())
    }

    fn with_client(client: Option<HttpClient>, load_state: LoadState) -> Self {
        Self {
            client,
            board: Board::default(),
            load_state,
            selected: None,
        }
    }

    pub fn title(&self) -> String {
        "Misaki".to_string()
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::CommandsLoaded(Ok(commands)) => {
                self.board = Board::new(commands);
                info!("Loaded {} commands", self.board.len());
                self.load_state = LoadState::Loaded;
                self.selected = None;
                Task::none()
            }
            Message::CommandsLoaded(Err(e)) => {
                error!("{e}");
                self.load_state = LoadState::Failed(e);
                Task::none()
            }
            Message::CommandPressed(name) => {
                self.selected = Some(name.clone());
                if let Err(e) = self.board.press(&name) {
                    warn!("{e}");
                    return Task::none();
                }

                match &self.client {
                    Some(client) => {
                        let request = trigger_command(client.clone(), name.clone());
                        Task::perform(request, move |outcome| {
                            Message::TriggerFinished(name.clone(), outcome)
                        })
                    }
                    None => {
                        let outcome: Result<(), String> = Err("no server configured".to_string());
                        self.board.settle(&name, &outcome);
                        Task::none()
                    }
                }
            }
            Message::TriggerFinished(name, outcome) => {
                let status = self.board.settle(&name, &outcome);
                info!("`{name}` finished: {status}");
                Task::none()
            }
        }
    }

    pub fn view(&self) -> Element<Message> {
        crate::ui::views::main_view(self)
    }

    pub fn selected_item(&self) -> Option<ItemView> {
        self.board.item(self.selected.as_deref()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use misaki_core::command_definitions::Command;
    use misaki_core::status::Status;

    fn commands() -> Vec<Command> {
        ["build", "test"]
            .iter()
            .map(|name| Command {
                name: (*name).to_string(),
                memo: String::new(),
                programs: vec![vec!["make".to_string(), (*name).to_string()]],
                output: false,
            })
            .collect()
    }

    fn loaded_app() -> MisakiApp {
        let (mut app, _) = MisakiApp::new("http://127.0.0.1:9");
        let _ = app.update(Message::CommandsLoaded(Ok(commands())));
        app
    }

    #[test]
    fn test_new_with_invalid_server_fails_to_load() {
        let (app, _) = MisakiApp::new("");
        assert!(app.client.is_none());
        assert!(matches!(app.load_state, LoadState::Failed(_)));
    }

    #[test]
    fn test_failed_shows_reason_without_loading() {
        let (app, _) = MisakiApp::failed("Error reading client config file".to_string());
        assert!(app.client.is_none());
        assert!(app.board.is_empty());
        assert_eq!(
            app.load_state,
            LoadState::Failed("Error reading client config file".to_string())
        );
    }

    #[test]
    fn test_commands_loaded() {
        let app = loaded_app();
        assert_eq!(app.load_state, LoadState::Loaded);
        assert_eq!(app.board.len(), 2);
        assert_eq!(app.board.status("build"), Status::None);
    }

    #[test]
    fn test_commands_load_failure() {
        let (mut app, _) = MisakiApp::new("http://127.0.0.1:9");
        let _ = app.update(Message::CommandsLoaded(Err("refused".to_string())));
        assert_eq!(app.load_state, LoadState::Failed("refused".to_string()));
    }

    #[test]
    fn test_press_then_finish() {
        let mut app = loaded_app();

        let _ = app.update(Message::CommandPressed("build".to_string()));
        assert_eq!(app.board.status("build"), Status::InFlight);
        assert_eq!(app.selected.as_deref(), Some("build"));

        let _ = app.update(Message::TriggerFinished("build".to_string(), Ok(())));
        assert_eq!(app.board.status("build"), Status::Done);

        let _ = app.update(Message::CommandPressed("test".to_string()));
        assert_eq!(app.board.status("build"), Status::None);
        let _ = app.update(Message::TriggerFinished(
            "test".to_string(),
            Err("500 Internal Server Error".to_string()),
        ));
        assert_eq!(app.board.status("test"), Status::Error);
    }

    #[test]
    fn test_press_unknown_command_is_ignored() {
        let mut app = loaded_app();
        let _ = app.update(Message::CommandPressed("missing".to_string()));
        assert!(app
            .board
            .items()
            .iter()
            .all(|item| item.status == Status::None));
    }

    #[test]
    fn test_selected_item() {
        let mut app = loaded_app();
        assert!(app.selected_item().is_none());

        let _ = app.update(Message::CommandPressed("test".to_string()));
        let item = app.selected_item().unwrap();
        assert_eq!(item.program_lines, vec!["make test"]);
    }
}
