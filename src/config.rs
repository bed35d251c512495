/// Per-invocation settings, built once from flags/environment and passed down.
use crate::cli::Cli;
use crate::render::{OutputFormat, RenderError, RenderRequest};

/// Log filter used when neither `--log` nor `--debug` is given.
const DEFAULT_LOG_FILTER: &str = "warn";

/// Explicit configuration for one command run.
#[derive(Debug, Clone, Default)]
pub struct Settings {
    /// Raw `--output` value, validated when the request is built.
    pub output: Option<String>,
    /// Raw `--query` value.
    pub query: Option<String>,
    /// Explicit log filter.
    pub log: Option<String>,
    /// Shorthand for a `debug` log filter.
    pub debug: bool,
}

impl Settings {
    /// Construct from CLI args.
    #[must_use]
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            output: cli.output.clone(),
            query: cli.query.clone(),
            log: cli.log.clone(),
            debug: cli.debug,
        }
    }

    /// Build the render request, falling back to the command's natural format.
    ///
    /// # Errors
    ///
    /// Returns `RenderError::UnsupportedFormat` for an unknown `--output` and
    /// `RenderError::QueryNotApplicable` for `--query` with table/text.
    pub fn render_request(&self, default: OutputFormat) -> Result<RenderRequest, RenderError> {
        match self.output.as_deref() {
            Some(format) => RenderRequest::parse(format, self.query.as_deref()),
            None => {
                let request = RenderRequest::new(default).with_query(self.query.as_deref());
                request.validate()?;
                Ok(request)
            }
        }
    }

    /// Whether errors should be reported as a structured envelope.
    #[must_use]
    pub fn structured_errors(&self) -> bool {
        self.output
            .as_deref()
            .and_then(|f| f.parse::<OutputFormat>().ok())
            .is_some_and(OutputFormat::supports_query)
    }

    /// The effective log filter.
    #[must_use]
    pub fn log_filter(&self) -> &str {
        match (&self.log, self.debug) {
            (Some(filter), _) => filter.as_str(),
            (None, true) => "debug",
            (None, false) => DEFAULT_LOG_FILTER,
        }
    }
}
