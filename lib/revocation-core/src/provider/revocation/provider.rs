use std::sync::Arc;
use std::time::Duration;

use indexmap::IndexMap;
use tokio::sync::RwLock;

use super::RevocationProvider;
use super::error::RevocationError;
use super::model::{ProviderOutcome, ProviderResolution};
use crate::model::credential::Credential;

/// Ordered, name-keyed registry of revocation providers.
///
/// Iteration follows registration order; the first provider reporting
/// revoked short-circuits the chain.
pub struct ProviderChain {
    providers: RwLock<IndexMap<String, Arc<dyn RevocationProvider>>>,
    call_timeout: Duration,
}

impl ProviderChain {
    pub fn new(call_timeout: Duration) -> Self {
        Self {
            providers: RwLock::new(IndexMap::new()),
            call_timeout,
        }
    }

    /// Registering under an already known name replaces the provider in
    /// place, keeping its position in the chain.
    pub async fn register(&self, provider: Arc<dyn RevocationProvider>) {
        let mut providers = self.providers.write().await;
        providers.insert(provider.name(), provider);
    }

    pub async fn clear(&self) {
        self.providers.write().await.clear();
    }

    pub async fn len(&self) -> usize {
        self.providers.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.providers.read().await.is_empty()
    }

    /// Walks providers in registration order and returns the first positive
    /// answer. Unavailable, failing and timed out providers are skipped.
    /// `None` means no provider reported a revocation; the caller defaults
    /// to not-revoked.
    pub async fn resolve(&self, credential: &Credential) -> Option<ProviderResolution> {
        let providers: Vec<_> = self.providers.read().await.values().cloned().collect();

        for provider in providers {
            match self.consult(&provider, credential).await {
                ProviderOutcome::Revoked => {
                    // metadata is best-effort, a failed fetch still counts as revoked
                    let metadata = match tokio::time::timeout(
                        self.call_timeout,
                        provider.get_metadata(credential),
                    )
                    .await
                    {
                        Ok(Ok(metadata)) => metadata,
                        _ => None,
                    };

                    return Some(ProviderResolution {
                        provider: provider.name(),
                        metadata,
                    });
                }
                ProviderOutcome::NotRevoked | ProviderOutcome::Unavailable => continue,
            }
        }

        None
    }

    async fn consult(
        &self,
        provider: &Arc<dyn RevocationProvider>,
        credential: &Credential,
    ) -> ProviderOutcome {
        let name = provider.name();

        match tokio::time::timeout(self.call_timeout, provider.is_available()).await {
            Ok(true) => {}
            Ok(false) => return ProviderOutcome::Unavailable,
            Err(_) => {
                tracing::warn!("provider {name} timed out on availability check");
                return ProviderOutcome::Unavailable;
            }
        }

        match tokio::time::timeout(self.call_timeout, provider.check_revocation(credential)).await {
            Ok(Ok(true)) => ProviderOutcome::Revoked,
            Ok(Ok(false)) => ProviderOutcome::NotRevoked,
            Ok(Err(error)) => {
                tracing::warn!("provider {name} failed to check {}: {error}", credential.id);
                ProviderOutcome::Unavailable
            }
            Err(_) => {
                tracing::warn!("provider {name} timed out checking {}", credential.id);
                ProviderOutcome::Unavailable
            }
        }
    }

    /// Direct invocation of one named provider. Unlike [`ProviderChain::resolve`],
    /// an unknown or unavailable provider and any call failure are hard errors.
    pub async fn check_with_provider(
        &self,
        credential: &Credential,
        name: &str,
    ) -> Result<bool, RevocationError> {
        let provider = {
            let providers = self.providers.read().await;
            providers
                .get(name)
                .cloned()
                .ok_or_else(|| RevocationError::ProviderNotFound(name.to_string()))?
        };

        if !provider.is_available().await {
            return Err(RevocationError::ProviderUnavailable(name.to_string()));
        }

        provider.check_revocation(credential).await
    }
}

#[cfg(test)]
mod test {
    use async_trait::async_trait;

    use super::*;
    use crate::model::revocation_list::RevocationMetadata;
    use crate::provider::revocation::MockRevocationProvider;

    const TIMEOUT: Duration = Duration::from_millis(100);

    fn mock_provider(name: &str, available: bool, answer: bool) -> MockRevocationProvider {
        let mut provider = MockRevocationProvider::new();
        provider.expect_name().return_const(name.to_string());
        provider
            .expect_description()
            .return_const("mock provider".to_string());
        provider.expect_is_available().returning(move || available);
        provider
            .expect_check_revocation()
            .returning(move |_| Ok(answer));
        provider.expect_get_metadata().returning(|_| Ok(None));
        provider
    }

    struct StalledProvider;

    #[async_trait]
    impl RevocationProvider for StalledProvider {
        fn name(&self) -> String {
            "stalled".to_string()
        }

        fn description(&self) -> String {
            "never answers".to_string()
        }

        async fn is_available(&self) -> bool {
            true
        }

        async fn check_revocation(&self, _: &Credential) -> Result<bool, RevocationError> {
            tokio::time::sleep(Duration::from_secs(3600)).await;
            Ok(true)
        }

        async fn get_metadata(
            &self,
            _: &Credential,
        ) -> Result<Option<RevocationMetadata>, RevocationError> {
            Ok(None)
        }
    }

    #[tokio::test]
    async fn test_resolve_first_positive_provider_wins() {
        let chain = ProviderChain::new(TIMEOUT);
        chain.register(Arc::new(mock_provider("a", true, false))).await;
        chain.register(Arc::new(mock_provider("b", true, true))).await;
        chain.register(Arc::new(mock_provider("c", true, true))).await;

        let resolution = chain
            .resolve(&Credential::from_id("credential-1"))
            .await
            .unwrap();
        assert_eq!(resolution.provider, "b");
    }

    #[tokio::test]
    async fn test_resolve_skips_unavailable_provider() {
        let chain = ProviderChain::new(TIMEOUT);
        chain.register(Arc::new(mock_provider("a", false, true))).await;
        chain.register(Arc::new(mock_provider("b", true, true))).await;

        let resolution = chain
            .resolve(&Credential::from_id("credential-1"))
            .await
            .unwrap();
        assert_eq!(resolution.provider, "b");
    }

    #[tokio::test]
    async fn test_resolve_skips_failing_provider() {
        let mut failing = MockRevocationProvider::new();
        failing.expect_name().return_const("broken".to_string());
        failing
            .expect_description()
            .return_const("mock provider".to_string());
        failing.expect_is_available().returning(|| true);
        failing
            .expect_check_revocation()
            .returning(|_| Err(RevocationError::MissingStatusReference));

        let chain = ProviderChain::new(TIMEOUT);
        chain.register(Arc::new(failing)).await;
        chain.register(Arc::new(mock_provider("b", true, true))).await;

        let resolution = chain
            .resolve(&Credential::from_id("credential-1"))
            .await
            .unwrap();
        assert_eq!(resolution.provider, "b");
    }

    #[tokio::test]
    async fn test_resolve_no_positive_answer() {
        let chain = ProviderChain::new(TIMEOUT);
        chain.register(Arc::new(mock_provider("a", true, false))).await;

        assert!(
            chain
                .resolve(&Credential::from_id("credential-1"))
                .await
                .is_none()
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_resolve_timed_out_provider_is_skipped() {
        let chain = ProviderChain::new(TIMEOUT);
        chain.register(Arc::new(StalledProvider)).await;
        chain.register(Arc::new(mock_provider("b", true, true))).await;

        let resolution = chain
            .resolve(&Credential::from_id("credential-1"))
            .await
            .unwrap();
        assert_eq!(resolution.provider, "b");
    }

    #[tokio::test]
    async fn test_register_replaces_in_place() {
        let chain = ProviderChain::new(TIMEOUT);
        chain.register(Arc::new(mock_provider("a", true, false))).await;
        chain.register(Arc::new(mock_provider("b", true, false))).await;
        // re-register "a" flipping its answer, position must be kept
        chain.register(Arc::new(mock_provider("a", true, true))).await;

        assert_eq!(chain.len().await, 2);

        let resolution = chain
            .resolve(&Credential::from_id("credential-1"))
            .await
            .unwrap();
        assert_eq!(resolution.provider, "a");
    }

    #[tokio::test]
    async fn test_check_with_provider_unknown() {
        let chain = ProviderChain::new(TIMEOUT);

        let result = chain
            .check_with_provider(&Credential::from_id("credential-1"), "unknown")
            .await;

        assert!(
            matches!(result, Err(RevocationError::ProviderNotFound(name)) if name == "unknown")
        );
    }

    #[tokio::test]
    async fn test_check_with_provider_unavailable() {
        let chain = ProviderChain::new(TIMEOUT);
        chain.register(Arc::new(mock_provider("a", false, true))).await;

        let result = chain
            .check_with_provider(&Credential::from_id("credential-1"), "a")
            .await;

        assert!(matches!(
            result,
            Err(RevocationError::ProviderUnavailable(_))
        ));
    }

    #[tokio::test]
    async fn test_check_with_provider_propagates_answer() {
        let chain = ProviderChain::new(TIMEOUT);
        chain.register(Arc::new(mock_provider("a", true, true))).await;

        let revoked = chain
            .check_with_provider(&Credential::from_id("credential-1"), "a")
            .await
            .unwrap();
        assert!(revoked);
    }
}
