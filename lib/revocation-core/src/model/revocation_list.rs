use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

pub const REVOCATION_LIST_VERSION: &str = "1.0.0";

/// Stored fact: this credential is revoked. Owned by the registry.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RevokedCredential {
    pub credential_id: String,
    pub metadata: RevocationMetadata,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RevocationMetadata {
    #[serde(rename = "issuerDID")]
    pub issuer_did: String,
    #[serde(with = "time::serde::rfc3339")]
    pub revoked_date: OffsetDateTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub source: String,
    /// Stamped by the registry on every add, independent of cache timestamps.
    #[serde(
        default,
        with = "time::serde::rfc3339::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_checked: Option<OffsetDateTime>,
}

/// Transport document for list import/export; not the live in-memory shape.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RevocationList {
    pub version: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated: OffsetDateTime,
    #[serde(
        default,
        rename = "issuerDID",
        skip_serializing_if = "Option::is_none"
    )]
    pub issuer_did: Option<String>,
    pub revoked_credentials: Vec<RevokedCredential>,
    #[serde(default)]
    pub metadata: RevocationListInfo,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RevocationListInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maintainer: Option<String>,
}
