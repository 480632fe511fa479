//! Enumerates errors of the revocation provider layer.

use thiserror::Error;

use crate::provider::http_client;
use crate::util::bitstring::BitstringError;

#[derive(Debug, Error)]
pub enum RevocationError {
    #[error("Credential has no usable status reference")]
    MissingStatusReference,
    #[error("Invalid status list index: `{0}`")]
    InvalidStatusListIndex(String),
    #[error("Status list fetch failed with HTTP status {0}")]
    StatusListFetchFailed(u16),
    #[error("Malformed status list credential: `{0}`")]
    MalformedStatusList(String),
    #[error("Provider {0} not found")]
    ProviderNotFound(String),
    #[error("Provider {0} is not available")]
    ProviderUnavailable(String),

    #[error("Bitstring error: `{0}`")]
    BitstringError(#[from] BitstringError),
    #[error("HTTP client error: `{0}`")]
    HttpClientError(#[from] http_client::Error),
    #[error("JSON error: `{0}`")]
    JsonError(#[from] serde_json::Error),
}
