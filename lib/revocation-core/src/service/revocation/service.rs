use std::sync::Arc;

use time::OffsetDateTime;

use super::RevocationService;
use super::dto::{
    BatchItemResult, BatchRevocationResult, CacheStats, CredentialValidationResult, ExportFormat,
    LOCAL_SOURCE, RevocationStatus,
};
use super::mapper;
use crate::model::credential::Credential;
use crate::model::revocation_list::{RevocationList, RevocationMetadata};
use crate::provider::revocation::RevocationProvider;
use crate::service::error::ServiceError;

impl RevocationService {
    pub async fn is_revoked(&self, credential_id: &str) -> Result<bool, ServiceError> {
        Ok(self.check_revocation_status(credential_id).await?.is_revoked)
    }

    pub async fn check_revocation_status(
        &self,
        credential_id: &str,
    ) -> Result<RevocationStatus, ServiceError> {
        let _guard = self.key_locks.lock(credential_id).await;
        self.resolve_status(&Credential::from_id(credential_id)).await
    }

    /// Same as [`RevocationService::check_revocation_status`], but passes the
    /// full credential through the chain so providers needing the status
    /// reference (e.g. Status List 2021) can answer.
    pub async fn check_credential(
        &self,
        credential: &Credential,
    ) -> Result<RevocationStatus, ServiceError> {
        let _guard = self.key_locks.lock(&credential.id).await;
        self.resolve_status(credential).await
    }

    /// Resolution order: cache, local registry (authoritative), provider
    /// chain, default not-revoked. Writes through to the cache at every
    /// resolution point. Caller must hold the key lock.
    async fn resolve_status(
        &self,
        credential: &Credential,
    ) -> Result<RevocationStatus, ServiceError> {
        if let Some(status) = self.cache.get(&credential.id).await {
            return Ok(status);
        }

        if let Some(entry) = self.registry.get(&credential.id).await? {
            let status = RevocationStatus {
                is_revoked: true,
                revoked_date: Some(entry.metadata.revoked_date),
                reason: entry.metadata.reason.clone(),
                last_checked: OffsetDateTime::now_utc(),
                source: Some(LOCAL_SOURCE.to_string()),
                metadata: Some(entry.metadata),
            };
            self.cache.set(&credential.id, status.clone()).await;
            return Ok(status);
        }

        if let Some(resolution) = self.providers.resolve(credential).await {
            let status = RevocationStatus {
                is_revoked: true,
                revoked_date: resolution.metadata.as_ref().map(|m| m.revoked_date),
                reason: resolution.metadata.as_ref().and_then(|m| m.reason.clone()),
                last_checked: OffsetDateTime::now_utc(),
                source: Some(resolution.provider),
                metadata: resolution.metadata,
            };
            self.cache.set(&credential.id, status.clone()).await;
            return Ok(status);
        }

        let status = RevocationStatus::not_revoked();
        self.cache.set(&credential.id, status.clone()).await;
        Ok(status)
    }

    pub async fn validate_credential(
        &self,
        credential: &Credential,
    ) -> Result<CredentialValidationResult, ServiceError> {
        if credential.id.is_empty() {
            return Ok(CredentialValidationResult {
                is_valid: false,
                errors: vec!["Credential ID is required".to_string()],
                warnings: vec![],
                revocation_status: RevocationStatus::not_revoked(),
            });
        }

        let status = self.check_revocation_status(&credential.id).await?;

        let mut warnings = vec![];
        if status.is_revoked {
            // revocation is surfaced as a warning, not a validation error
            warnings.push(match &status.reason {
                Some(reason) => {
                    format!("Credential {} has been revoked: {reason}", credential.id)
                }
                None => format!("Credential {} has been revoked", credential.id),
            });
        }

        Ok(CredentialValidationResult {
            is_valid: !status.is_revoked,
            errors: vec![],
            warnings,
            revocation_status: status,
        })
    }

    /// Checks each id independently and concurrently; a failing lookup
    /// degrades to the default not-revoked answer instead of failing the
    /// batch. The result always contains one entry per input id.
    pub async fn batch_revocation_check(&self, credential_ids: &[String]) -> BatchRevocationResult {
        let checks = credential_ids.iter().map(|credential_id| async move {
            let status = match self.check_revocation_status(credential_id).await {
                Ok(status) => status,
                Err(error) => {
                    tracing::warn!("status check for {credential_id} failed: {error}");
                    RevocationStatus::not_revoked()
                }
            };

            BatchItemResult {
                credential_id: credential_id.clone(),
                status,
            }
        });

        let results = futures::future::join_all(checks).await;
        let revoked_count = results.iter().filter(|item| item.status.is_revoked).count();

        BatchRevocationResult {
            total_checked: results.len(),
            revoked_count,
            results,
        }
    }

    /// Records the revocation and synchronously invalidates the cached
    /// status for the id.
    pub async fn add_revocation(
        &self,
        credential_id: &str,
        metadata: RevocationMetadata,
    ) -> Result<(), ServiceError> {
        let _guard = self.key_locks.lock(credential_id).await;
        self.registry.add(credential_id, metadata).await?;
        self.cache.invalidate(credential_id).await;
        Ok(())
    }

    pub async fn remove_revocation(&self, credential_id: &str) -> Result<(), ServiceError> {
        let _guard = self.key_locks.lock(credential_id).await;
        self.registry.remove(credential_id).await?;
        self.cache.invalidate(credential_id).await;
        Ok(())
    }

    /// Imports every entry of the document into the local registry,
    /// re-stamping `last_checked` and invalidating cache entries per id.
    /// Returns the number of imported entries.
    pub async fn import_revocation_list(
        &self,
        list: RevocationList,
    ) -> Result<usize, ServiceError> {
        let count = list.revoked_credentials.len();
        for entry in list.revoked_credentials {
            self.add_revocation(&entry.credential_id, entry.metadata).await?;
        }

        Ok(count)
    }

    pub async fn export_revocation_list(
        &self,
        format: ExportFormat,
    ) -> Result<String, ServiceError> {
        let entries = self.registry.get_all().await?;

        match format {
            ExportFormat::Json => mapper::list_to_json(entries),
            ExportFormat::Csv => Ok(mapper::list_to_csv(&entries)),
        }
    }

    pub async fn register_provider(&self, provider: Arc<dyn RevocationProvider>) {
        self.providers.register(provider).await;
    }

    /// Direct single-provider check; unknown or unavailable providers are
    /// hard errors here, unlike in chain resolution.
    pub async fn check_with_provider(
        &self,
        credential: &Credential,
        provider_name: &str,
    ) -> Result<bool, ServiceError> {
        Ok(self
            .providers
            .check_with_provider(credential, provider_name)
            .await?)
    }

    pub async fn clear_cache(&self) {
        self.cache.clear().await;
    }

    pub async fn cache_stats(&self) -> CacheStats {
        self.cache.stats().await
    }

    /// Empties registry and cache, keeping registered providers.
    pub async fn clear_data(&self) -> Result<(), ServiceError> {
        self.registry.clear().await?;
        self.cache.clear().await;
        Ok(())
    }

    /// Also drops registered providers; intended for test isolation.
    pub async fn clear_all(&self) -> Result<(), ServiceError> {
        self.clear_data().await?;
        self.providers.clear().await;
        Ok(())
    }
}
