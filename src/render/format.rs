/// Output formats and the per-call render request.
use std::fmt;
use std::str::FromStr;

use super::RenderError;

/// The four output formats a response can be rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    /// Aligned columns with a header line (lists).
    Table,
    /// `Label:  value` lines (single items).
    Text,
    /// Pretty-printed JSON document.
    Json,
    /// YAML document.
    Yaml,
}

impl OutputFormat {
    /// All formats, in flag-help order.
    pub const ALL: [Self; 4] = [Self::Table, Self::Text, Self::Json, Self::Yaml];

    /// The flag value for this format.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Table => "table",
            Self::Text => "text",
            Self::Json => "json",
            Self::Yaml => "yaml",
        }
    }

    /// Whether a query may be applied before encoding.
    #[must_use]
    pub fn supports_query(self) -> bool {
        matches!(self, Self::Json | Self::Yaml)
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| RenderError::UnsupportedFormat {
                format: s.to_owned(),
            })
    }
}

/// The caller's chosen output format plus optional filter query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderRequest {
    pub format: OutputFormat,
    pub query: Option<String>,
}

impl RenderRequest {
    /// Build a request for `format` with no query.
    #[must_use]
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            query: None,
        }
    }

    /// Attach a query. Blank strings count as no query.
    #[must_use]
    pub fn with_query(mut self, query: Option<&str>) -> Self {
        self.query = query
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .map(str::to_owned);
        self
    }

    /// Parse a request from raw flag values.
    ///
    /// # Errors
    ///
    /// Returns `RenderError::UnsupportedFormat` for an unknown format string and
    /// `RenderError::QueryNotApplicable` when a query is paired with `table` or `text`.
    pub fn parse(format: &str, query: Option<&str>) -> Result<Self, RenderError> {
        let request = Self::new(format.parse()?).with_query(query);
        request.validate()?;
        Ok(request)
    }

    /// Reject query + table/text combinations.
    ///
    /// # Errors
    ///
    /// Returns `RenderError::QueryNotApplicable` if a query is set on a format
    /// that cannot be filtered.
    pub fn validate(&self) -> Result<(), RenderError> {
        if self.query.is_some() && !self.format.supports_query() {
            return Err(RenderError::QueryNotApplicable {
                format: self.format,
            });
        }
        Ok(())
    }
}
