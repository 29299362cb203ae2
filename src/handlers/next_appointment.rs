use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::error::UpstreamError;
use crate::formatting::display::format_display_at;
use crate::models::appointment::{NO_APPOINTMENTS, NO_TYPE_SPECIFIED, NextAppointmentResult};
use crate::models::query::AvailabilityQuery;
use crate::state::AppState;

/// Cache lookup, then scan and format on a miss. Not-found results are cached too.
pub async fn next_appointment(
    state: &AppState,
    query: AvailabilityQuery,
) -> Result<NextAppointmentResult, UpstreamError> {
    next_appointment_at(state, query, Utc::now()).await
}

/// The slot is chosen and labelled against the same `now`.
pub async fn next_appointment_at(
    state: &AppState,
    query: AvailabilityQuery,
    now: DateTime<Utc>,
) -> Result<NextAppointmentResult, UpstreamError> {
    let Some(target) = query.target() else {
        return Ok(NextAppointmentResult::not_found(NO_TYPE_SPECIFIED));
    };

    // locale is not part of the key: the first caller's display text is
    // served to every locale until the entry expires
    let key = target.cache_key();
    if let Some(cached) = state.cache.get(&key).await {
        debug!("cache hit for {}", key);
        return Ok(cached);
    }
    info!("cache miss for {}, scanning availability", key);

    let locale = query
        .locale
        .as_deref()
        .filter(|l| !l.trim().is_empty())
        .unwrap_or(&state.default_locale);

    let result = match state.scanner.find_next_slot_at(&query, now).await? {
        Some(next) => {
            let display = format_display_at(&next.slot.time, locale, now);
            NextAppointmentResult::available(target.id(), next.slot.time, display)
        }
        None => NextAppointmentResult::not_found(NO_APPOINTMENTS),
    };

    state.cache.set(key, result.clone(), state.cache_ttl).await;
    Ok(result)
}
