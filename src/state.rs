use std::sync::Arc;
use std::time::Duration;

use crate::cache::AppointmentCache;
use crate::config::Settings;
use crate::provider::client::SlotSource;
use crate::provider::scanner::AvailabilityScanner;

/// Dependencies shared by every request, built once in `main`.
pub struct AppState {
    pub cache: AppointmentCache,
    pub scanner: AvailabilityScanner,
    pub cache_ttl: Duration,
    pub request_timeout: Duration,
    pub default_locale: String,
}

impl AppState {
    pub fn new(settings: &Settings, source: Arc<dyn SlotSource>) -> Self {
        AppState {
            cache: AppointmentCache::new(settings.cache_max_entries),
            scanner: AvailabilityScanner::new(source, settings.scan_horizon_days),
            cache_ttl: settings.cache_ttl,
            request_timeout: settings.request_timeout,
            default_locale: settings.default_locale.clone(),
        }
    }
}

#[cfg(test)]
pub(crate) fn test_state(source: Arc<dyn SlotSource>, request_timeout: Duration) -> AppState {
    AppState {
        cache: AppointmentCache::new(100),
        scanner: AvailabilityScanner::new(source, 30),
        cache_ttl: Duration::from_secs(60),
        request_timeout,
        default_locale: "en-US".to_string(),
    }
}
