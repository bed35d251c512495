/// `domains` commands: list and get.
use crate::cli::args::DomainsCommand;
use crate::config::Settings;
use crate::errors::CliError;
use crate::render::OutputFormat;
use crate::resources::{DomainItem, DomainList};

use super::show;

/// Run `regcli domains <list|get>`.
///
/// # Errors
///
/// Returns `CliError` on invalid flags, bad input, or render failure.
pub fn run(command: &DomainsCommand, settings: &Settings) -> Result<(), CliError> {
    match command {
        DomainsCommand::List(args) => {
            show("domain list", args, settings, OutputFormat::Table, DomainList)
        }
        DomainsCommand::Get(args) => show("domain", args, settings, OutputFormat::Text, DomainItem),
    }
}
