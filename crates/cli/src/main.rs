use std::process::ExitCode;

use clap::Parser;
use log::{debug, error, info};
use misaki_core::board::Board;
use misaki_core::error::Result;
use misaki_core::http::HttpClient;
use misaki_core::{config, file_handling};
use tokio::runtime::Runtime;

use misaki_cli::actions::{format_command_list, trigger_with_report};
use misaki_cli::cli_args::{Action, Args};
use misaki_cli::command_selection;

/// Resolve the server from the arguments and the config file
fn initialize_client(args: &Args) -> Result<HttpClient> {
    let config_path = config::get_config_path(&args.config_path);
    debug!("Config path: `{config_path}`");

    let client_config = file_handling::get_client_config(&config_path)?;
    let server = client_config.server_url(args.server.as_deref());
    info!("Using server `{server}`");

    HttpClient::new(&server)
}

fn load_board(runtime: &Runtime, client: &HttpClient) -> Result<Board> {
    runtime.block_on(Board::load(client)).inspect_err(|e| {
        error!("Could not load the command list: {e}");
    })
}

fn execute() -> Result<ExitCode> {
    let args = Args::parse();
    let client = initialize_client(&args)?;
    let runtime = Runtime::new()?;

    let mut board = load_board(&runtime, &client)?;

    match args.action {
        None => {
            command_selection::run_board(&mut board, &client, runtime.handle())?;
            Ok(ExitCode::SUCCESS)
        }
        Some(Action::List { html }) => {
            if html {
                print!("{}", board.render());
            } else {
                println!("{}", format_command_list(&board.items()));
            }
            Ok(ExitCode::SUCCESS)
        }
        Some(Action::Trigger { name }) => {
            let report = runtime.block_on(trigger_with_report(&mut board, &client, &name))?;
            for line in report.lines(&name) {
                println!("{line}");
            }
            Ok(report.exit_code())
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();

    match execute() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
