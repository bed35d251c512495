/// `dsr` commands: delegation signer records.
use crate::cli::args::DsrCommand;
use crate::config::Settings;
use crate::errors::CliError;
use crate::render::OutputFormat;
use crate::resources::{DsrItem, DsrList};

use super::show;

/// Run `regcli dsr <list|get>`.
///
/// # Errors
///
/// Returns `CliError` on invalid flags, bad input, or render failure.
pub fn run(command: &DsrCommand, settings: &Settings) -> Result<(), CliError> {
    match command {
        DsrCommand::List(args) => show("dsr list", args, settings, OutputFormat::Table, DsrList),
        DsrCommand::Get(args) => show("dsr", args, settings, OutputFormat::Text, DsrItem),
    }
}
