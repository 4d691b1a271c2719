mod app;
mod cli_args;
mod execution;
mod ui;
mod utils;

use app::MisakiApp;
use clap::Parser;
use cli_args::Args;
use log::{error, info};

pub fn main() -> iced::Result {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let server = args.resolve_server().map_err(|e| e.to_string());
    match &server {
        Ok(server) => info!("Using server `{server}`"),
        Err(e) => error!("{e}"),
    }

    iced::application(MisakiApp::title, MisakiApp::update, MisakiApp::view)
        .centered()
        .run_with(move || match server {
            Ok(server) => MisakiApp::new(&server),
            Err(reason) => MisakiApp::failed(reason),
        })
}
