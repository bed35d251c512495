/// `whoami` command: identity behind the access token.
use crate::cli::args::InputArgs;
use crate::config::Settings;
use crate::errors::CliError;
use crate::render::OutputFormat;
use crate::resources::Whoami;

use super::show;

/// Run `regcli whoami`.
///
/// # Errors
///
/// Returns `CliError` on invalid flags, bad input, or render failure.
pub fn run(args: &InputArgs, settings: &Settings) -> Result<(), CliError> {
    show("whoami", args, settings, OutputFormat::Text, Whoami)
}
