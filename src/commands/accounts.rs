/// `accounts` commands.
use crate::cli::args::AccountsCommand;
use crate::config::Settings;
use crate::errors::CliError;
use crate::render::OutputFormat;
use crate::resources::AccountList;

use super::show;

/// Run `regcli accounts list`.
///
/// # Errors
///
/// Returns `CliError` on invalid flags, bad input, or render failure.
pub fn run(command: &AccountsCommand, settings: &Settings) -> Result<(), CliError> {
    match command {
        AccountsCommand::List(args) => show(
            "account list",
            args,
            settings,
            OutputFormat::Table,
            AccountList,
        ),
    }
}
