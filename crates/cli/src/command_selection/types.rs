//! Type definitions for the interactive command list.
//!
//! This module defines the core types used throughout the command list
//! interface, including user actions and UI state management.

/// What the user asked for from the command list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardAction {
    /// Trigger the command with this name.
    Trigger(String),
    Quit,
}

/// Direction to cycle through commands in the list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CycleDirection {
    Up,
    Down,
}

/// State for the UI viewport.
///
/// Tracks the visible portion of the command list when there are more
/// commands than can fit on screen.
#[derive(Clone, PartialEq, Debug)]
pub struct ViewportState {
    pub offset: usize,
    pub height: u16,
    pub width: u16,
}

/// Complete UI state for the command list.
///
/// Maintains everything needed to draw and navigate the list apart from
/// command statuses, which live on the board.
#[derive(Clone, PartialEq, Debug)]
pub struct UiState {
    /// Position of the selected command among the displayed ones
    pub selected_index: usize,
    /// Viewport state for scrolling
    pub viewport: ViewportState,
    /// Whether the user is currently filtering/searching
    pub is_filtering: bool,
    /// Current filter/search text
    pub filter_text: String,
}

impl UiState {
    pub fn new(width: u16, list_height: u16) -> Self {
        Self {
            selected_index: 0,
            viewport: ViewportState {
                offset: 0,
                height: list_height,
                width,
            },
            is_filtering: false,
            filter_text: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_ui_state() {
        let ui_state = UiState::new(80, 20);

        assert_eq!(ui_state.selected_index, 0);
        assert_eq!(
            ui_state.viewport,
            ViewportState {
                offset: 0,
                height: 20,
                width: 80,
            }
        );
        assert!(!ui_state.is_filtering);
        assert!(ui_state.filter_text.is_empty());
    }

    #[test]
    fn test_ui_state_equality() {
        let ui_state1 = UiState::new(80, 10);
        let ui_state2 = UiState::new(80, 10);
        let mut ui_state3 = UiState::new(80, 10);
        ui_state3.selected_index = 1;

        assert_eq!(ui_state1, ui_state2);
        assert_ne!(ui_state1, ui_state3);
    }

    #[test]
    fn test_board_action_equality() {
        assert_eq!(
            BoardAction::Trigger("build".to_string()),
            BoardAction::Trigger("build".to_string())
        );
        assert_ne!(BoardAction::Trigger("build".to_string()), BoardAction::Quit);
    }
}
