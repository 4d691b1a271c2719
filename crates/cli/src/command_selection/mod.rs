//! Interactive command list.
//!
//! This module provides the terminal-based user interface for misaki: the
//! commands published by the server, each with its current status, and
//! triggering on selection.
//!
//! # Key Features
//!
//! - **Interactive Command List**: Scrollable list of available commands
//! - **Status Badges**: In-flight, done and error shown per command
//! - **Fuzzy Search**: Filter commands by typing to search
//! - **Program Details**: The programs of the selected command under the list
//! - **Keyboard Navigation**: Full keyboard control with mouse support
//!
//! # User Interface
//!
//! The interface supports:
//! - Arrow keys or vim-style (j/k) navigation
//! - Enter or a left click to trigger a command
//! - '/' to start filtering commands (fuzzy search)
//! - Escape to stop filtering, or to quit when no filter is active
//! - 'q' or Ctrl-C to quit

// Export public items from submodules
pub mod colors;
pub mod types;
pub mod ui;

// Re-exports for convenience
pub use types::{BoardAction, CycleDirection, UiState, ViewportState};
pub use ui::run_board;

/// Character that starts filtering the list
pub const FILTER_KEY: char = '/';

/// Rows taken by the header bar
pub const HEADER_HEIGHT: u16 = 1;
/// Rows reserved for the selected command's programs
pub const DETAIL_HEIGHT: u16 = 4;
/// Rows below the list: program details plus the filter line
pub const FOOTER_HEIGHT: u16 = DETAIL_HEIGHT + 1;
