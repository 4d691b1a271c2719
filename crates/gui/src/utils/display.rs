use misaki_core::status::Status;
use misaki_core::view::ItemView;

pub fn get_command_display_name(item: &ItemView) -> String {
    if item.memo.is_empty() {
        item.name.clone()
    } else {
        format!("{} ({})", item.name, item.memo)
    }
}

pub fn status_label(status: Status) -> &'static str {
    match status {
        Status::None => "",
        Status::InFlight => "Running...",
        Status::Done => "Done",
        Status::Error => "Error",
    }
}

/// Text color for a status badge, `None` for the theme default.
pub fn status_color(status: Status) -> Option<[f32; 3]> {
    match status {
        Status::None => None,
        Status::InFlight => Some([0.85, 0.65, 0.1]),
        Status::Done => Some([0.2, 0.65, 0.3]),
        Status::Error => Some([0.8, 0.2, 0.2]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(memo: &str) -> ItemView {
        ItemView {
            name: "build".to_string(),
            memo: memo.to_string(),
            program_lines: vec![],
            status: Status::None,
            output: false,
        }
    }

    #[test]
    fn test_display_name() {
        assert_eq!(get_command_display_name(&item("Build it")), "build (Build it)");
        assert_eq!(get_command_display_name(&item("")), "build");
    }

    #[test]
    fn test_status_label_and_color() {
        assert_eq!(status_label(Status::None), "");
        assert_eq!(status_color(Status::None), None);
        for status in [Status::InFlight, Status::Done, Status::Error] {
            assert!(!status_label(status).is_empty());
            assert!(status_color(status).is_some());
        }
    }
}
