//! Misaki CLI Library
//!
//! This crate provides the command-line interface for misaki: it lists the
//! commands a misaki server publishes and triggers them, showing whether each
//! request is in flight, done or failed.
//!
//! # Key Features
//!
//! - **Interactive Command List**: Terminal-based UI for browsing and triggering commands
//! - **Non-interactive Listing**: Print the commands as text or as rendered markup
//! - **Direct Triggering**: Trigger one command by name from scripts
//!
//! # Architecture
//!
//! The CLI is organized into several key modules:
//!
//! - [`cli_args`]: Command-line argument parsing
//! - [`command_selection`]: Interactive UI for the command list
//! - [`actions`]: The `list` and `trigger` subcommands
//!
//! # Examples
//!
//! The CLI binary (`misaki`) can be used in several ways:
//!
//! ```bash
//! # Interactive mode - shows the command list
//! misaki --server http://localhost:8080
//!
//! # Print the commands
//! misaki list
//!
//! # Print the rendered list markup
//! misaki list --html
//!
//! # Trigger a command by name
//! misaki trigger build
//! ```

pub mod actions;
pub mod cli_args;
pub mod command_selection;
