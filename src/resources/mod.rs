/// Renderable views over API responses: per-type columns, labels, and data payload.
pub mod accounts;
pub mod collaborators;
pub mod dnssec;
pub mod domains;
pub mod dsr;
pub mod whoami;

pub use accounts::AccountList;
pub use collaborators::CollaboratorList;
pub use dnssec::DnssecStatus;
pub use domains::{DomainItem, DomainList};
pub use dsr::{DsrItem, DsrList};
pub use whoami::Whoami;

use crate::render::OutputFormat;

/// Formats of list responses.
const LIST_FORMATS: &[OutputFormat] = &[
    OutputFormat::Table,
    OutputFormat::Json,
    OutputFormat::Yaml,
];

/// Formats of single-item responses.
const ITEM_FORMATS: &[OutputFormat] = &[
    OutputFormat::Text,
    OutputFormat::Json,
    OutputFormat::Yaml,
];

/// Display an optional string, empty when absent.
fn opt_str(value: Option<&String>) -> String {
    value.cloned().unwrap_or_default()
}

/// Display an optional number, empty when absent.
fn opt_id(value: Option<i64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}
