use anyhow::{Context, Result, bail};
use std::env;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use url::Url;

use crate::provider::constants::{
    DEFAULT_BASE_URL, DEFAULT_CACHE_MAX_ENTRIES, DEFAULT_CACHE_TTL_SECS, DEFAULT_LOCALE,
    DEFAULT_PORT, DEFAULT_REQUEST_TIMEOUT_SECS, DEFAULT_SCAN_HORIZON_DAYS,
    DEFAULT_UPSTREAM_TIMEOUT_SECS,
};

#[derive(Clone)]
pub struct Settings {
    pub acuity_user_id: String,
    pub acuity_api_key: String,
    pub acuity_base_url: Url,
    pub bind_address: String,
    pub port: u16,
    pub cache_ttl: Duration,
    pub cache_max_entries: u64,
    pub scan_horizon_days: u32,
    pub upstream_timeout: Duration,
    pub request_timeout: Duration,
    pub default_locale: String,
}

impl Settings {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Missing credentials are fatal; everything else has a default.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let acuity_user_id = var("ACUITY_USER_ID").context("ACUITY_USER_ID must be set")?;
        let acuity_api_key = var("ACUITY_API_KEY").context("ACUITY_API_KEY must be set")?;

        let base = var("ACUITY_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let acuity_base_url = parse_base_url(&base)?;

        Ok(Self {
            acuity_user_id,
            acuity_api_key,
            acuity_base_url,
            bind_address: var("BIND_ADDRESS").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: parse_or(var("PORT"), "PORT", DEFAULT_PORT)?,
            cache_ttl: Duration::from_secs(parse_or(
                var("CACHE_TTL_SECS"),
                "CACHE_TTL_SECS",
                DEFAULT_CACHE_TTL_SECS,
            )?),
            cache_max_entries: parse_or(
                var("CACHE_MAX_ENTRIES"),
                "CACHE_MAX_ENTRIES",
                DEFAULT_CACHE_MAX_ENTRIES,
            )?,
            scan_horizon_days: parse_or(
                var("SCAN_HORIZON_DAYS"),
                "SCAN_HORIZON_DAYS",
                DEFAULT_SCAN_HORIZON_DAYS,
            )?,
            upstream_timeout: Duration::from_secs(parse_or(
                var("UPSTREAM_TIMEOUT_SECS"),
                "UPSTREAM_TIMEOUT_SECS",
                DEFAULT_UPSTREAM_TIMEOUT_SECS,
            )?),
            request_timeout: Duration::from_secs(parse_or(
                var("REQUEST_TIMEOUT_SECS"),
                "REQUEST_TIMEOUT_SECS",
                DEFAULT_REQUEST_TIMEOUT_SECS,
            )?),
            default_locale: var("DEFAULT_LOCALE").unwrap_or_else(|| DEFAULT_LOCALE.to_string()),
        })
    }
}

// credentials never reach the logs
impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("acuity_user_id", &"<redacted>")
            .field("acuity_api_key", &"<redacted>")
            .field("acuity_base_url", &self.acuity_base_url.as_str())
            .field("bind_address", &self.bind_address)
            .field("port", &self.port)
            .field("cache_ttl", &self.cache_ttl)
            .field("cache_max_entries", &self.cache_max_entries)
            .field("scan_horizon_days", &self.scan_horizon_days)
            .field("upstream_timeout", &self.upstream_timeout)
            .field("request_timeout", &self.request_timeout)
            .field("default_locale", &self.default_locale)
            .finish()
    }
}

fn parse_or<T>(value: Option<String>, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match value {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{key} must be a valid number, got {raw:?}")),
        None => Ok(default),
    }
}

/// `Url::join` drops the last path segment unless it ends with a slash.
fn parse_base_url(raw: &str) -> Result<Url> {
    let mut url = Url::parse(raw).with_context(|| format!("ACUITY_BASE_URL is not a URL: {raw}"))?;
    if url.cannot_be_a_base() {
        bail!("ACUITY_BASE_URL cannot be used as a base: {raw}");
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}
