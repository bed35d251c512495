/// Registrar API response types.
///
/// These mirror the JSON bodies returned by the API collaborator. They are
/// decoded once per invocation, wrapped in a renderable view from
/// `crate::resources`, and never mutated afterwards.
use serde::{Deserialize, Serialize};

/// The `{"data": ..., "pagination": ...}` envelope around every response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    /// Response payload.
    pub data: T,
    /// Present on list endpoints.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
}

/// Page information attached to list responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pagination {
    pub current_page: u64,
    pub per_page: u64,
    pub total_entries: u64,
    pub total_pages: u64,
}

/// A registered or hosted domain.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Domain {
    pub id: i64,
    pub account_id: i64,
    /// Contact ID of the registrant, null for hosted-only domains.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registrant_id: Option<i64>,
    pub name: String,
    #[serde(default)]
    pub unicode_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// `registered`, `hosted`, `expired`, ...
    pub state: String,
    #[serde(default)]
    pub auto_renew: bool,
    #[serde(default)]
    pub private_whois: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// A user given access to a domain.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Collaborator {
    pub id: i64,
    pub domain_id: i64,
    pub domain_name: String,
    /// Null until an invitation is accepted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
    pub user_email: String,
    #[serde(default)]
    pub invitation: bool,
    pub created_at: String,
    pub updated_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accepted_at: Option<String>,
}

/// An account the authenticated identity can act on.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Account {
    pub id: i64,
    pub email: String,
    #[serde(default)]
    pub plan_identifier: String,
    pub created_at: String,
    pub updated_at: String,
}

/// The user behind a user-scoped access token.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// A delegation signer (DS) record published at the parent zone.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DelegationSignerRecord {
    pub id: i64,
    pub domain_id: i64,
    pub algorithm: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub digest: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub digest_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keytag: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_key: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// DNSSEC state of a domain.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dnssec {
    pub enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Identity of the access token: a user, an account, or both.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Identity {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account: Option<Account>,
}

/// A structured error envelope for JSON error output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorOutput {
    /// Always `false`.
    pub ok: bool,
    /// Error details.
    pub error: ErrorDetail,
}

/// Error detail in the JSON error envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Machine-readable error code (snake_case).
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

impl ErrorOutput {
    /// Construct from a `CliError`.
    #[must_use]
    pub fn from_cli_error(err: &crate::errors::CliError) -> Self {
        Self {
            ok: false,
            error: ErrorDetail {
                code: err.code().to_owned(),
                message: err.to_string(),
            },
        }
    }
}
