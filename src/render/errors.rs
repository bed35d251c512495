/// Errors from the rendering layer.
use thiserror::Error;

use super::OutputFormat;

/// Errors that can occur while rendering a response.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The requested format string is not one of `table`, `text`, `json`, `yaml`.
    #[error("invalid output format '{format}' (expected one of: table, text, json, yaml)")]
    UnsupportedFormat {
        /// The rejected format string.
        format: String,
    },

    /// The value has no strategy for the requested format.
    #[error("{format} formatter not implemented for {type_name}")]
    CapabilityMissing {
        /// Name of the renderable type.
        type_name: &'static str,
        /// The format that was requested.
        format: OutputFormat,
    },

    /// A query was given together with a format that cannot be filtered.
    #[error("--query is only supported with json and yaml output, not {format}")]
    QueryNotApplicable {
        /// The format the query was paired with.
        format: OutputFormat,
    },

    /// The query failed to compile or to evaluate against the data.
    #[error("query evaluation failed for '{expression}': {message}")]
    Query {
        /// The offending expression.
        expression: String,
        /// Evaluator message, including the position inside the expression.
        message: String,
    },

    /// JSON or YAML encoding/decoding failed.
    #[error("encoding failed: {0}")]
    Encoding(String),
}

impl From<serde_json::Error> for RenderError {
    fn from(err: serde_json::Error) -> Self {
        Self::Encoding(err.to_string())
    }
}

impl From<serde_yaml::Error> for RenderError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Encoding(err.to_string())
    }
}

impl RenderError {
    /// Machine-readable error code (snake_case).
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::UnsupportedFormat { .. } => "unsupported_format",
            Self::CapabilityMissing { .. } => "capability_missing",
            Self::QueryNotApplicable { .. } => "query_not_applicable",
            Self::Query { .. } => "query_error",
            Self::Encoding(_) => "encoding_error",
        }
    }
}
