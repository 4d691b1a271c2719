use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// A command as published by the server at `/commands`.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub name: String,
    pub memo: String,
    pub programs: Vec<Vec<String>>,
    /// Whether the server replies with the command's output.
    #[serde(default)]
    pub output: bool,
}

impl Command {
    /// Every program of the command with its tokens joined by single spaces.
    pub fn program_lines(&self) -> Vec<String> {
        self.programs.iter().map(|program| program.join(" ")).collect()
    }
}

impl Display for Command {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        if self.memo.is_empty() {
            formatter.write_str(&self.name)
        } else {
            write!(formatter, "{} ({})", self.name, self.memo)
        }
    }
}
