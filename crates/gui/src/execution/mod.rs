mod remote;

pub use remote::{load_commands, trigger_command};
