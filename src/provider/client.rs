use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use chrono::NaiveDate;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use std::time::Duration;
use tracing::{debug, error};
use url::Url;

use crate::config::Settings;
use crate::error::UpstreamError;
use crate::models::query::AvailabilityQuery;
use crate::models::slot::Slot;
use crate::provider::constants::*;

/// Anything that can list the open slots of one calendar day.
#[async_trait]
pub trait SlotSource: Send + Sync {
    async fn fetch_slots_for_day(
        &self,
        date: NaiveDate,
        query: &AvailabilityQuery,
    ) -> Result<Vec<Slot>, UpstreamError>;
}

pub struct AcuityClient {
    http: reqwest::Client,
    times_url: Url,
}

impl AcuityClient {
    pub fn new(
        base_url: &Url,
        user_id: &str,
        api_key: &str,
        timeout: Duration,
    ) -> anyhow::Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, basic_auth_header(user_id, api_key)?);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()?;

        Ok(AcuityClient {
            http,
            times_url: base_url.join(AVAILABILITY_TIMES_PATH)?,
        })
    }

    pub fn from_settings(settings: &Settings) -> anyhow::Result<Self> {
        Self::new(
            &settings.acuity_base_url,
            &settings.acuity_user_id,
            &settings.acuity_api_key,
            settings.upstream_timeout,
        )
    }

    fn request_params(date: NaiveDate, query: &AvailabilityQuery) -> Vec<(&'static str, String)> {
        let mut params = vec![(PARAM_DATE, date.format(DATE_FORMAT).to_string())];
        if let Some(type_id) = query.appointment_type() {
            params.push((PARAM_APPOINTMENT_TYPE_ID, type_id.to_string()));
        }
        if let Some(calendar_id) = query.calendar() {
            params.push((PARAM_CALENDAR_ID, calendar_id.to_string()));
        }
        params
    }
}

#[async_trait]
impl SlotSource for AcuityClient {
    async fn fetch_slots_for_day(
        &self,
        date: NaiveDate,
        query: &AvailabilityQuery,
    ) -> Result<Vec<Slot>, UpstreamError> {
        debug!("requesting availability for {}", date);

        let response = self
            .http
            .get(self.times_url.clone())
            .query(&Self::request_params(date, query))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("provider returned {} for {}: {}", status, date, body);
            return Err(UpstreamError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|e| UpstreamError::Decode(e.to_string()))
    }
}

/// Encoded once per client; every request carries the same value.
fn basic_auth_header(user_id: &str, api_key: &str) -> anyhow::Result<HeaderValue> {
    let encoded = STANDARD.encode(format!("{user_id}:{api_key}"));
    let mut value = HeaderValue::from_str(&format!("Basic {encoded}"))?;
    value.set_sensitive(true);
    Ok(value)
}
