#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! regcli — render domain-registrar API responses as tables, text, JSON or YAML.

mod cli;
mod commands;
mod config;
mod errors;
mod logging;
mod render;
mod resources;
mod types;

use clap::Parser;

use cli::{Cli, write_error};
use config::Settings;

fn main() {
    let cli = Cli::parse();
    let settings = Settings::from_cli(&cli);

    if let Err(err) = logging::init(&settings) {
        eprintln!("warning: {err:#}");
    }

    match commands::dispatch(&cli.command, &settings) {
        Ok(()) => {}
        Err(err) => {
            write_error(&err, settings.structured_errors());
            std::process::exit(err.exit_code());
        }
    }
}
