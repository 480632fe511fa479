use std::collections::HashMap;

use time::{Duration, OffsetDateTime};
use tokio::sync::RwLock;

use super::dto::{CacheStats, RevocationStatus};

struct CacheEntry {
    status: RevocationStatus,
    inserted: OffsetDateTime,
}

/// TTL-bounded memo of resolved revocation statuses, keyed by credential id.
///
/// Purely an optimization: every read path must stay correct with this cache
/// empty. Expiry is lazy, stale entries are swept on read.
pub(super) struct StatusCache {
    entries: RwLock<HashMap<String, CacheEntry>>,
    ttl: Duration,
}

impl StatusCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            ttl,
        }
    }

    pub async fn get(&self, credential_id: &str) -> Option<RevocationStatus> {
        let now = OffsetDateTime::now_utc();
        let mut entries = self.entries.write().await;

        match entries.get(credential_id) {
            Some(entry) if now - entry.inserted < self.ttl => Some(entry.status.clone()),
            Some(_) => {
                entries.remove(credential_id);
                None
            }
            None => None,
        }
    }

    pub async fn set(&self, credential_id: &str, status: RevocationStatus) {
        let mut entries = self.entries.write().await;
        entries.insert(
            credential_id.to_string(),
            CacheEntry {
                status,
                inserted: OffsetDateTime::now_utc(),
            },
        );
    }

    pub async fn invalidate(&self, credential_id: &str) {
        let mut entries = self.entries.write().await;
        entries.remove(credential_id);
    }

    pub async fn clear(&self) {
        self.entries.write().await.clear();
    }

    pub async fn stats(&self) -> CacheStats {
        CacheStats {
            size: self.entries.read().await.len(),
            ttl_seconds: self.ttl.whole_seconds().max(0) as u64,
        }
    }
}
