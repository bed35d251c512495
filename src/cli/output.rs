/// Output writing: rendered bytes to stdout, errors to stderr, debug timers.
use std::io::Write;

use tracing::debug;

use crate::errors::CliError;
use crate::types::ErrorOutput;

/// Copy rendered bytes verbatim to stdout.
///
/// # Errors
///
/// Returns `CliError::Output` if stdout is closed or the write fails.
pub fn write_rendered(bytes: &[u8]) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    out.write_all(bytes).map_err(CliError::Output)?;
    out.flush().map_err(CliError::Output)
}

/// Write a structured error to stderr.
///
/// `structured` selects the JSON envelope (for json/yaml callers that parse
/// output) over a plain `Error:` line.
pub fn write_error(err: &CliError, structured: bool) {
    let stderr = std::io::stderr();
    let mut out = stderr.lock();
    if structured {
        let envelope = ErrorOutput::from_cli_error(err);
        let s = serde_json::to_string_pretty(&envelope).unwrap_or_default();
        let _ = writeln!(out, "{s}");
    } else {
        let _ = writeln!(out, "Error: {err}");
    }
}

// --- Debug timer ---

/// A RAII timer that logs elapsed milliseconds at debug level on drop.
///
/// The event is always emitted. The installed log filter decides whether it
/// is printed, so `--debug` and `--log regcli=debug` both show it.
pub struct DebugTimer {
    label: &'static str,
    start: std::time::Instant,
}

impl DebugTimer {
    #[must_use]
    pub(crate) fn new(label: &'static str) -> Self {
        Self {
            label,
            start: std::time::Instant::now(),
        }
    }
}

impl Drop for DebugTimer {
    fn drop(&mut self) {
        let ms = self.start.elapsed().as_secs_f64() * 1000.0;
        debug!(label = self.label, elapsed_ms = ms, "timing");
    }
}
