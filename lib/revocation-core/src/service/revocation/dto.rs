use serde::Serialize;
use strum_macros::{Display, EnumString};
use time::OffsetDateTime;

use crate::model::revocation_list::RevocationMetadata;

/// Layer name reported when the local registry produced the answer.
pub const LOCAL_SOURCE: &str = "local";

/// Result of a status query; distinct from the stored revocation fact and
/// recomputed on every cache miss.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RevocationStatus {
    pub is_revoked: bool,
    #[serde(
        with = "time::serde::rfc3339::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub revoked_date: Option<OffsetDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub last_checked: OffsetDateTime,
    /// `"local"`, a provider name, or `None` for the default answer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<RevocationMetadata>,
}

impl RevocationStatus {
    /// Default answer when no layer had a record of the credential.
    pub(crate) fn not_revoked() -> Self {
        Self {
            is_revoked: false,
            revoked_date: None,
            reason: None,
            last_checked: OffsetDateTime::now_utc(),
            source: None,
            metadata: None,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialValidationResult {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub revocation_status: RevocationStatus,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchRevocationResult {
    pub total_checked: usize,
    pub revoked_count: usize,
    pub results: Vec<BatchItemResult>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchItemResult {
    pub credential_id: String,
    pub status: RevocationStatus,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheStats {
    pub size: usize,
    pub ttl_seconds: u64,
}

#[derive(Clone, Copy, Debug, Display, EnumString, Eq, PartialEq)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ExportFormat {
    Json,
    Csv,
}
