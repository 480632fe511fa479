use indexmap::IndexMap;
use time::OffsetDateTime;
use tokio::sync::RwLock;

use super::error::DataLayerError;
use super::revocation_registry::RevocationRegistry;
use crate::model::revocation_list::{RevocationMetadata, RevokedCredential};

/// Process-lifetime registry with no durability.
#[derive(Default)]
pub struct InMemoryRevocationRegistry {
    entries: RwLock<IndexMap<String, RevokedCredential>>,
}

impl InMemoryRevocationRegistry {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl RevocationRegistry for InMemoryRevocationRegistry {
    async fn add(
        &self,
        credential_id: &str,
        metadata: RevocationMetadata,
    ) -> Result<(), DataLayerError> {
        let entry = RevokedCredential {
            credential_id: credential_id.to_string(),
            metadata: RevocationMetadata {
                last_checked: Some(OffsetDateTime::now_utc()),
                ..metadata
            },
        };

        let mut entries = self.entries.write().await;
        entries.insert(credential_id.to_string(), entry);
        Ok(())
    }

    async fn remove(&self, credential_id: &str) -> Result<(), DataLayerError> {
        let mut entries = self.entries.write().await;
        entries.shift_remove(credential_id);
        Ok(())
    }

    async fn get(
        &self,
        credential_id: &str,
    ) -> Result<Option<RevokedCredential>, DataLayerError> {
        let entries = self.entries.read().await;
        Ok(entries.get(credential_id).cloned())
    }

    async fn get_all(&self) -> Result<Vec<RevokedCredential>, DataLayerError> {
        let entries = self.entries.read().await;
        Ok(entries.values().cloned().collect())
    }

    async fn clear(&self) -> Result<(), DataLayerError> {
        self.entries.write().await.clear();
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use time::macros::datetime;

    use super::*;

    fn metadata(reason: &str) -> RevocationMetadata {
        RevocationMetadata {
            issuer_did: "did:example:issuer".to_string(),
            revoked_date: datetime!(2024-03-01 12:00 UTC),
            reason: Some(reason.to_string()),
            notes: None,
            source: "manual".to_string(),
            last_checked: None,
        }
    }

    #[tokio::test]
    async fn test_add_stamps_last_checked() {
        let registry = InMemoryRevocationRegistry::new();
        registry.add("credential-1", metadata("compromised")).await.unwrap();

        let entry = registry.get("credential-1").await.unwrap().unwrap();
        assert!(entry.metadata.last_checked.is_some());
        assert_eq!(entry.metadata.reason.as_deref(), Some("compromised"));
    }

    #[tokio::test]
    async fn test_re_add_overwrites() {
        let registry = InMemoryRevocationRegistry::new();
        registry.add("credential-1", metadata("first")).await.unwrap();
        registry.add("credential-1", metadata("second")).await.unwrap();

        let all = registry.get_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].metadata.reason.as_deref(), Some("second"));
    }

    #[tokio::test]
    async fn test_get_all_insertion_order() {
        let registry = InMemoryRevocationRegistry::new();
        registry.add("b", metadata("r")).await.unwrap();
        registry.add("a", metadata("r")).await.unwrap();
        registry.add("c", metadata("r")).await.unwrap();

        let ids: Vec<_> = registry
            .get_all()
            .await
            .unwrap()
            .into_iter()
            .map(|entry| entry.credential_id)
            .collect();
        assert_eq!(ids, ["b", "a", "c"]);
    }

    #[tokio::test]
    async fn test_remove_absent_is_noop() {
        let registry = InMemoryRevocationRegistry::new();
        registry.remove("credential-1").await.unwrap();
        assert!(registry.get_all().await.unwrap().is_empty());
    }
}
