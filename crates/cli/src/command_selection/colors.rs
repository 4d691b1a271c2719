use crossterm::style::Color;
use misaki_core::status::Status;

/// Trait for converting statuses to terminal colors
pub trait AsTermColor {
    fn as_crossterm_color(&self) -> Option<Color>;
}

impl AsTermColor for Status {
    fn as_crossterm_color(&self) -> Option<Color> {
        match self {
            Status::None => None,
            Status::InFlight => Some(Color::Yellow),
            Status::Done => Some(Color::Green),
            Status::Error => Some(Color::Red),
        }
    }
}

/// Fixed-width badge shown in front of each command.
pub fn status_badge(status: Status) -> String {
    format!("{:<5}", status.to_string())
}
