//! Status registry keyed by command name.
//!
//! The registry is the single source of truth for what each rendered item
//! shows. Front-ends project it into their widgets instead of reading state
//! back from what they drew.

use indexmap::IndexMap;

use crate::command_definitions::Command;
use crate::status::Status;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusRegistry {
    statuses: IndexMap<String, Status>,
}

impl StatusRegistry {
    /// Creates a registry with every command at [`Status::None`], in list order.
    ///
    /// A repeated name keeps its first position and shares one status.
    pub fn from_commands(commands: &[Command]) -> Self {
        let statuses = commands
            .iter()
            .map(|command| (command.name.clone(), Status::None))
            .collect();
        Self { statuses }
    }

    pub fn len(&self) -> usize {
        self.statuses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statuses.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.statuses.contains_key(name)
    }

    /// Current status of `name`, `None` when the name is not registered.
    pub fn get(&self, name: &str) -> Option<Status> {
        self.statuses.get(name).copied()
    }

    /// Status of `name`, unregistered names read as [`Status::None`].
    pub fn status_of(&self, name: &str) -> Status {
        self.get(name).unwrap_or_default()
    }

    /// Sets the status of a registered name. Returns false if unknown.
    pub fn set(&mut self, name: &str, status: Status) -> bool {
        match self.statuses.get_mut(name) {
            Some(current) => {
                *current = status;
                true
            }
            None => false,
        }
    }

    /// Returns every entry to [`Status::None`].
    pub fn reset_all(&mut self) {
        for status in self.statuses.values_mut() {
            *status = Status::None;
        }
    }

    /// Names currently marked in flight.
    pub fn in_flight(&self) -> Vec<&str> {
        self.statuses
            .iter()
            .filter(|(_, status)| status.is_in_flight())
            .map(|(name, _)| name.as_str())
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Status)> {
        self.statuses
            .iter()
            .map(|(name, status)| (name.as_str(), *status))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command(name: &str) -> Command {
        Command {
            name: name.to_string(),
            memo: String::new(),
            programs: vec![],
            output: false,
        }
    }

    #[test]
    fn test_from_commands_keeps_order() {
        let registry = StatusRegistry::from_commands(&[command("b"), command("a"), command("c")]);
        let names: Vec<_> = registry.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["b", "a", "c"]);
        assert!(registry.iter().all(|(_, status)| status == Status::None));
    }

    #[test]
    fn test_duplicate_names_share_one_entry() {
        let registry = StatusRegistry::from_commands(&[command("a"), command("a")]);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_set_and_reset_all() {
        let mut registry = StatusRegistry::from_commands(&[command("a"), command("b")]);
        assert!(registry.set("a", Status::Done));
        assert!(registry.set("b", Status::InFlight));
        assert_eq!(registry.in_flight(), vec!["b"]);

        registry.reset_all();
        assert_eq!(registry.status_of("a"), Status::None);
        assert_eq!(registry.status_of("b"), Status::None);
        assert!(registry.in_flight().is_empty());
    }

    #[test]
    fn test_set_unknown_name() {
        let mut registry = StatusRegistry::from_commands(&[command("a")]);
        assert!(!registry.set("missing", Status::Done));
        assert_eq!(registry.get("missing"), None);
        assert_eq!(registry.status_of("missing"), Status::None);
    }
}
