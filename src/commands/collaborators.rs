/// `collaborators` commands.
use crate::cli::args::CollaboratorsCommand;
use crate::config::Settings;
use crate::errors::CliError;
use crate::render::OutputFormat;
use crate::resources::CollaboratorList;

use super::show;

/// Run `regcli collaborators list`.
///
/// # Errors
///
/// Returns `CliError` on invalid flags, bad input, or render failure.
pub fn run(command: &CollaboratorsCommand, settings: &Settings) -> Result<(), CliError> {
    match command {
        CollaboratorsCommand::List(args) => show(
            "collaborator list",
            args,
            settings,
            OutputFormat::Table,
            CollaboratorList,
        ),
    }
}
