use super::error::DataLayerError;
use crate::model::revocation_list::{RevocationMetadata, RevokedCredential};

/// Authoritative store of explicitly revoked credentials.
///
/// An entry here always wins over any provider answer. The bundled
/// implementation is in-memory; durable backends are a collaborator concern.
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait::async_trait]
pub trait RevocationRegistry: Send + Sync {
    /// Stores the revocation fact, stamping `last_checked` with the current
    /// time. Re-adding an id overwrites the previous entry.
    async fn add(
        &self,
        credential_id: &str,
        metadata: RevocationMetadata,
    ) -> Result<(), DataLayerError>;

    /// Removes the fact; absent ids are ignored.
    async fn remove(&self, credential_id: &str) -> Result<(), DataLayerError>;

    async fn get(&self, credential_id: &str)
    -> Result<Option<RevokedCredential>, DataLayerError>;

    /// Snapshot in insertion order.
    async fn get_all(&self) -> Result<Vec<RevokedCredential>, DataLayerError>;

    async fn clear(&self) -> Result<(), DataLayerError>;
}
