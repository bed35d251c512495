/// `dnssec` commands.
use crate::cli::args::DnssecCommand;
use crate::config::Settings;
use crate::errors::CliError;
use crate::render::OutputFormat;
use crate::resources::DnssecStatus;

use super::show;

/// Run `regcli dnssec status`.
///
/// # Errors
///
/// Returns `CliError` on invalid flags, bad input, or render failure.
pub fn run(command: &DnssecCommand, settings: &Settings) -> Result<(), CliError> {
    match command {
        DnssecCommand::Status(args) => {
            show("dnssec", args, settings, OutputFormat::Text, DnssecStatus)
        }
    }
}
