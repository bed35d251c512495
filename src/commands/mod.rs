/// Command dispatch: routes `Command` variants to their handlers.
///
/// Every handler follows the same path: read the API response body, decode
/// it into the resource type, wrap it in its renderable view, render, and
/// copy the bytes to stdout.
pub mod accounts;
pub mod collaborators;
pub mod dnssec;
pub mod domains;
pub mod dsr;
pub mod whoami;

use std::io::Read;
use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::cli::Command;
use crate::cli::args::InputArgs;
use crate::cli::{DebugTimer, write_rendered};
use crate::config::Settings;
use crate::errors::CliError;
use crate::render::{Capabilities, OutputFormat, ensure_supported, render};
use crate::types::Envelope;

/// Dispatch a parsed `Command` to its handler.
///
/// # Errors
///
/// Returns `CliError` on any command failure.
pub fn dispatch(command: &Command, settings: &Settings) -> Result<(), CliError> {
    match command {
        Command::Domains(cmd) => domains::run(cmd, settings),
        Command::Collaborators(cmd) => collaborators::run(cmd, settings),
        Command::Dsr(cmd) => dsr::run(cmd, settings),
        Command::Dnssec(cmd) => dnssec::run(cmd, settings),
        Command::Accounts(cmd) => accounts::run(cmd, settings),
        Command::Whoami(args) => whoami::run(args, settings),
    }
}

/// Decode a response envelope and render its payload through `view`.
///
/// The output format, query and the resource's capabilities are validated
/// before any input is read, so a bad `--output` or `--query` fails without
/// touching stdin.
///
/// # Errors
///
/// Returns `CliError` on invalid flags, a format the resource cannot render,
/// unreadable or malformed input, render failure, or a failed write to stdout.
pub(crate) fn show<T, R>(
    resource: &'static str,
    input: &InputArgs,
    settings: &Settings,
    default: OutputFormat,
    view: fn(T) -> R,
) -> Result<(), CliError>
where
    T: DeserializeOwned,
    R: Capabilities,
{
    let request = settings.render_request(default)?;
    ensure_supported::<R>(request.format)?;

    let _t_read = DebugTimer::new("read_input");
    let body = read_input(&input.input)?;
    drop(_t_read);

    let _t_decode = DebugTimer::new("decode");
    let envelope: Envelope<T> = serde_json::from_slice(&body)
        .map_err(|source| CliError::Decode { resource, source })?;
    drop(_t_decode);

    if let Some(page) = &envelope.pagination {
        debug!(
            resource,
            current_page = page.current_page,
            total_pages = page.total_pages,
            total_entries = page.total_entries,
            "paginated response"
        );
    }

    let value = view(envelope.data);

    let _t_render = DebugTimer::new("render");
    let bytes = render(&value, &request)?;
    drop(_t_render);

    write_rendered(&bytes)
}

/// Read the whole response body from a file, or stdin for `-`.
fn read_input(path: &Path) -> Result<Vec<u8>, CliError> {
    let input_err = |source| CliError::Input {
        path: path.to_path_buf(),
        source,
    };

    if path.as_os_str() == "-" {
        let mut buf = Vec::new();
        std::io::stdin()
            .lock()
            .read_to_end(&mut buf)
            .map_err(input_err)?;
        Ok(buf)
    } else {
        std::fs::read(path).map_err(input_err)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_read_input_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(br#"{"data": []}"#).unwrap();
        let body = read_input(file.path()).unwrap();
        assert_eq!(body, br#"{"data": []}"#);
    }

    #[test]
    fn test_read_input_missing_file() {
        let err = read_input(Path::new("/nonexistent/response.json")).unwrap_err();
        assert!(matches!(err, CliError::Input { .. }));
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn test_bad_format_fails_before_reading() {
        let settings = Settings {
            output: Some("xml".to_owned()),
            ..Settings::default()
        };
        let input = InputArgs {
            input: "/nonexistent/response.json".into(),
        };
        let err = show(
            "domain list",
            &input,
            &settings,
            OutputFormat::Table,
            crate::resources::DomainList,
        )
        .unwrap_err();
        assert_eq!(err.code(), "unsupported_format");
    }

    #[test]
    fn test_missing_capability_fails_before_reading() {
        let settings = Settings {
            output: Some("table".to_owned()),
            ..Settings::default()
        };
        let input = InputArgs {
            input: "/nonexistent/response.json".into(),
        };
        let err = show(
            "dsr",
            &input,
            &settings,
            OutputFormat::Text,
            crate::resources::DsrItem,
        )
        .unwrap_err();
        assert_eq!(err.code(), "capability_missing");
        assert_eq!(err.exit_code(), 2);
        assert_eq!(err.to_string(), "table formatter not implemented for DsrItem");
    }
}
