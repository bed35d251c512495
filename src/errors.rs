/// Command-layer errors and their exit codes.
use std::path::PathBuf;

use thiserror::Error;

use crate::render::RenderError;

/// Errors a command can fail with.
#[derive(Debug, Error)]
pub enum CliError {
    /// Rendering failed (bad format, bad query, missing capability).
    #[error(transparent)]
    Render(#[from] RenderError),

    /// The response body could not be read.
    #[error("failed to read response from {}: {source}", display_path(path))]
    Input {
        /// Path that was read, `-` for stdin.
        path: PathBuf,
        source: std::io::Error,
    },

    /// The response body is not the JSON shape this command expects.
    #[error("failed to decode {resource} response: {source}")]
    Decode {
        /// Resource name, e.g. `domain list`.
        resource: &'static str,
        source: serde_json::Error,
    },

    /// Rendered output could not be written to stdout.
    #[error("failed to write output: {0}")]
    Output(#[source] std::io::Error),
}

fn display_path(path: &std::path::Path) -> String {
    if path.as_os_str() == "-" {
        "stdin".to_owned()
    } else {
        path.display().to_string()
    }
}

impl CliError {
    /// Machine-readable error code (snake_case).
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Render(err) => err.code(),
            Self::Input { .. } => "input_error",
            Self::Decode { .. } => "decode_error",
            Self::Output(_) => "output_error",
        }
    }

    /// Return the CLI exit code for this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Render(err) => match err {
                RenderError::UnsupportedFormat { .. }
                | RenderError::CapabilityMissing { .. }
                | RenderError::QueryNotApplicable { .. }
                | RenderError::Query { .. } => 2,
                RenderError::Encoding(_) => 1,
            },
            Self::Input { .. } | Self::Decode { .. } => 4,
            Self::Output(_) => 1,
        }
    }
}
