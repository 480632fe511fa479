//! Pluggable sources of revocation truth.
//!
//! The local registry always wins; providers are only consulted when it has
//! no record. Provider failures never surface through the chain, they
//! degrade to "no answer from this provider".

use async_trait::async_trait;

use self::error::RevocationError;
use crate::model::credential::Credential;
use crate::model::revocation_list::RevocationMetadata;

pub mod error;
pub mod model;
pub mod provider;
pub mod status_list_2021;

/// Contract an external revocation source must satisfy.
///
/// Providers are stateless from the engine's perspective and are keyed by
/// [`name`](RevocationProvider::name) in the chain.
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait]
pub trait RevocationProvider: Send + Sync {
    fn name(&self) -> String;

    fn description(&self) -> String;

    async fn is_available(&self) -> bool;

    /// Whether the provider considers the credential revoked. Some providers
    /// answer from the identifier alone, others need the full credential
    /// including its status reference.
    async fn check_revocation(&self, credential: &Credential) -> Result<bool, RevocationError>;

    /// Best-effort revocation metadata; `None` when the source has no details.
    async fn get_metadata(
        &self,
        credential: &Credential,
    ) -> Result<Option<RevocationMetadata>, RevocationError>;
}
