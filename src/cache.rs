use moka::Expiry;
use moka::future::Cache;
use std::time::{Duration, Instant};
use tracing::info;

use crate::models::appointment::NextAppointmentResult;

#[derive(Debug, Clone)]
pub struct CacheEntry {
    pub result: NextAppointmentResult,
    pub ttl: Duration,
}

/// Each entry lives for the TTL it was stored with.
struct EntryTtl;

impl Expiry<String, CacheEntry> for EntryTtl {
    fn expire_after_create(
        &self,
        _key: &String,
        entry: &CacheEntry,
        _created_at: Instant,
    ) -> Option<Duration> {
        Some(entry.ttl)
    }

    fn expire_after_update(
        &self,
        _key: &String,
        entry: &CacheEntry,
        _updated_at: Instant,
        _duration_until_expiry: Option<Duration>,
    ) -> Option<Duration> {
        Some(entry.ttl)
    }
}

/// Short-lived store of computed results, shared by every worker.
#[derive(Clone)]
pub struct AppointmentCache {
    inner: Cache<String, CacheEntry>,
}

impl AppointmentCache {
    pub fn new(max_entries: u64) -> Self {
        let inner = Cache::builder()
            .max_capacity(max_entries)
            .expire_after(EntryTtl)
            .build();
        AppointmentCache { inner }
    }

    pub async fn get(&self, key: &str) -> Option<NextAppointmentResult> {
        self.inner.get(key).await.map(|entry| entry.result)
    }

    pub async fn set(&self, key: String, result: NextAppointmentResult, ttl: Duration) {
        self.inner.insert(key, CacheEntry { result, ttl }).await;
    }

    pub fn flush_all(&self) {
        info!("flushing {} cached result(s)", self.inner.entry_count());
        self.inner.invalidate_all();
    }
}
