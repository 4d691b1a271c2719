use misaki_core::command_definitions::Command;

#[derive(Debug, Clone)]
pub enum Message {
    CommandsLoaded(Result<Vec<Command>, String>),
    CommandPressed(String),
    TriggerFinished(String, Result<(), String>),
}
