//! Misaki Core Library
//!
//! This crate provides the core functionality for misaki clients: listing the
//! commands a misaki server publishes and triggering them, while keeping
//! track of what each command currently shows.
//!
//! # Key Features
//!
//! - **HTTP Helper**: Single-attempt requests that fail on non-success status
//! - **Remote API**: Fetch `/commands` and post to `/request`
//! - **Status Registry**: Explicit per-command status instead of widget state
//! - **View Projection**: Pure rendering of the list into a view-node tree
//! - **Configuration Management**: Resolve the client configuration file
//! - **Error Handling**: One error type for every failure mode
//!
//! # Examples
//!
//! Loading the board and triggering a command:
//!
//! ```no_run
//! use misaki_core::board::Board;
//! use misaki_core::http::HttpClient;
//!
//! # async fn run() -> misaki_core::error::Result<()> {
//! let client = HttpClient::new("http://localhost:8080")?;
//! let mut board = Board::load(&client).await?;
//! for item in board.items() {
//!     println!("{}: {}", item.name, item.memo);
//! }
//! let status = board.trigger(&client, "build").await?;
//! println!("build: {status}");
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod board;
pub mod command_definitions;
pub mod config;
pub mod error;
pub mod file_handling;
pub mod http;
pub mod registry;
pub mod status;
pub mod view;
