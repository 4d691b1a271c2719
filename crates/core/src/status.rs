use std::fmt::{Display, Formatter};

/// Visible state of one command in the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Status {
    #[default]
    None,
    InFlight,
    Done,
    Error,
}

impl Status {
    /// Every marker class a status element may carry.
    pub const MARKER_CLASSES: [&'static str; 3] =
        ["status-done", "status-inflight", "status-error"];

    /// Maps the outcome of a trigger to its final status.
    pub fn settled(succeeded: bool) -> Self {
        if succeeded {
            Self::Done
        } else {
            Self::Error
        }
    }

    /// Marker class carried by the status element, `None` when unmarked.
    pub fn marker_class(self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::InFlight => Some("status-inflight"),
            Self::Done => Some("status-done"),
            Self::Error => Some("status-error"),
        }
    }

    pub fn is_in_flight(self) -> bool {
        self == Self::InFlight
    }
}

impl Display for Status {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::None => "",
            Self::InFlight => "...",
            Self::Done => "done",
            Self::Error => "error",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settled() {
        assert_eq!(Status::settled(true), Status::Done);
        assert_eq!(Status::settled(false), Status::Error);
    }

    #[test]
    fn test_marker_classes_are_distinct() {
        let markers: Vec<_> = [Status::InFlight, Status::Done, Status::Error]
            .into_iter()
            .filter_map(Status::marker_class)
            .collect();

        assert_eq!(markers.len(), 3);
        for marker in &markers {
            assert!(Status::MARKER_CLASSES.contains(marker));
        }
        assert_eq!(Status::None.marker_class(), None);
    }

    #[test]
    fn test_default_is_none() {
        assert_eq!(Status::default(), Status::None);
        assert!(!Status::default().is_in_flight());
        assert!(Status::InFlight.is_in_flight());
    }
}
