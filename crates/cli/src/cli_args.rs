//! Command-line argument parsing.
//!
//! This module defines the command-line interface structure using the
//! `clap` crate.

use clap::{Parser, Subcommand};

/// Command-line arguments for the misaki CLI tool.
///
/// Without a subcommand the interactive command list is shown.
///
/// # Examples
///
/// ```rust
/// use clap::Parser;
/// use misaki_cli::cli_args::Args;
///
/// let args = Args::parse_from(["misaki", "--server", "http://localhost:8080", "list"]);
/// assert!(args.action.is_some());
/// ```
#[derive(Parser, Debug)] // requires `derive` feature
#[command(term_width = 0)] // Just to make testing across clap features easier
pub struct Args {
    /// Path to the client config file YAML.
    ///
    /// If not provided, defaults to `~/.misaki/client.yml`.
    #[arg(long, short = 'c')]
    pub config_path: Option<String>,

    /// Base URL of the misaki server, e.g. `http://localhost:8080`.
    ///
    /// Takes precedence over the `server` key of the config file.
    #[arg(long, short = 's')]
    pub server: Option<String>,

    #[command(subcommand)]
    pub action: Option<Action>,
}

/// Non-interactive actions.
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Action {
    /// Print the commands published by the server.
    List {
        /// Print the rendered list markup instead of plain text.
        #[arg(long, action)]
        html: bool,
    },
    /// Trigger one command by name and wait for the server to answer.
    Trigger {
        /// Name of the command to trigger.
        name: String,
    },
}
