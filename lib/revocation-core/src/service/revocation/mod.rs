//! Revocation status engine.
//!
//! Orchestrates cache, local registry and the provider chain to answer
//! single and batch status queries, and owns list import/export.

use std::sync::Arc;

use serde::Deserialize;

use self::cache::StatusCache;
use self::lock::KeyLocks;
use crate::provider::revocation::provider::ProviderChain;
use crate::repository::revocation_registry::RevocationRegistry;

pub mod dto;
pub mod service;

mod cache;
mod lock;
mod mapper;


/// Tuning knobs, deserializable from an embedding application's config.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Params {
    /// Validity window for cached status answers, in seconds.
    pub cache_ttl_seconds: u64,
    /// Upper bound for a single provider call; a timed out call counts as
    /// "provider unavailable", never as a hard failure.
    pub provider_timeout_seconds: u64,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            cache_ttl_seconds: 300,
            provider_timeout_seconds: 10,
        }
    }
}

impl Params {
    pub(crate) fn cache_ttl(&self) -> time::Duration {
        time::Duration::seconds(self.cache_ttl_seconds as i64)
    }

    pub(crate) fn provider_timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.provider_timeout_seconds)
    }
}

pub struct RevocationService {
    registry: Arc<dyn RevocationRegistry>,
    cache: StatusCache,
    providers: ProviderChain,
    key_locks: KeyLocks,
}

impl RevocationService {
    pub fn new(registry: Arc<dyn RevocationRegistry>, params: Params) -> Self {
        Self {
            registry,
            cache: StatusCache::new(params.cache_ttl()),
            providers: ProviderChain::new(params.provider_timeout()),
            key_locks: KeyLocks::new(),
        }
    }
}
