use chrono::{DateTime, Days, FixedOffset, NaiveDate, Utc};
use chrono_tz::Tz;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::error::UpstreamError;
use crate::formatting::display::DISPLAY_TIMEZONE;
use crate::models::query::AvailabilityQuery;
use crate::models::slot::Slot;
use crate::provider::client::SlotSource;

/// The earliest future slot, with its parsed instant.
#[derive(Debug, Clone, PartialEq)]
pub struct NextSlot {
    pub slot: Slot,
    pub at: DateTime<FixedOffset>,
}

/**
Walks calendar days forward from today, one provider call per day,
and stops at the first day holding a slot strictly after now.

Days are counted in the display timezone so "today" here means the same
thing as "Today" in the rendered text.
*/
#[derive(Clone)]
pub struct AvailabilityScanner {
    source: Arc<dyn SlotSource>,
    horizon_days: u32,
    zone: Tz,
}

impl AvailabilityScanner {
    pub fn new(source: Arc<dyn SlotSource>, horizon_days: u32) -> Self {
        AvailabilityScanner {
            source,
            horizon_days,
            zone: DISPLAY_TIMEZONE,
        }
    }

    pub async fn find_next_slot_at(
        &self,
        query: &AvailabilityQuery,
        now: DateTime<Utc>,
    ) -> Result<Option<NextSlot>, UpstreamError> {
        let today = now.with_timezone(&self.zone).date_naive();

        for offset in 0..=self.horizon_days {
            let Some(date) = today.checked_add_days(Days::new(u64::from(offset))) else {
                break;
            };

            let slots = self.source.fetch_slots_for_day(date, query).await?;
            debug!("{} slot(s) offered on {}", slots.len(), date);

            if let Some(next) = first_future_slot(slots, now, date) {
                info!("next slot {} found {} day(s) out", next.slot.time, offset);
                return Ok(Some(next));
            }
        }

        info!(
            "no open slot within {} day(s) for {:?}",
            self.horizon_days,
            query.target()
        );
        Ok(None)
    }
}

fn first_future_slot(slots: Vec<Slot>, now: DateTime<Utc>, date: NaiveDate) -> Option<NextSlot> {
    let mut parsed: Vec<NextSlot> = slots
        .into_iter()
        .filter(Slot::has_capacity)
        .filter_map(|slot| match slot.parsed_time() {
            Some(at) => Some(NextSlot { slot, at }),
            None => {
                warn!("skipping unparseable slot time {:?} on {}", slot.time, date);
                None
            }
        })
        .collect();

    // the provider does not promise any order
    parsed.sort_by_key(|next| next.at);
    parsed.into_iter().find(|next| next.at > now)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::TimeZone;
    use std::collections::HashMap;
    use std::sync::Mutex;
    use std::time::Duration;

    /// In-memory provider: answers from a per-date table and records every call.
    #[derive(Default)]
    pub struct StubSource {
        pub days: HashMap<NaiveDate, Vec<Slot>>,
        pub calls: Mutex<Vec<NaiveDate>>,
        pub delay: Option<Duration>,
        pub fail: bool,
    }

    impl StubSource {
        pub fn with_day(mut self, date: NaiveDate, times: &[&str]) -> Self {
            self.days
                .insert(date, times.iter().map(|t| Slot::new(*t)).collect());
            self
        }

        pub fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl SlotSource for StubSource {
        async fn fetch_slots_for_day(
            &self,
            date: NaiveDate,
            _query: &AvailabilityQuery,
        ) -> Result<Vec<Slot>, UpstreamError> {
            self.calls.lock().unwrap().push(date);
            if let Some(delay) = self.delay {
                tokio::time::sleep(delay).await;
            }
            if self.fail {
                return Err(UpstreamError::Status {
                    status: 503,
                    body: "maintenance".into(),
                });
            }
            Ok(self.days.get(&date).cloned().unwrap_or_default())
        }
    }

    pub fn type_query(id: &str) -> AvailabilityQuery {
        AvailabilityQuery {
            appointment_type_id: Some(id.into()),
            calendar_id: None,
            locale: None,
        }
    }

    // DST began at 02:00 that morning, so noon is -06:00
    fn noon_march_10() -> DateTime<Utc> {
        DISPLAY_TIMEZONE
            .with_ymd_and_hms(2024, 3, 10, 12, 0, 0)
            .unwrap()
            .with_timezone(&Utc)
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    #[tokio::test]
    async fn walks_forward_until_a_day_has_a_future_slot() {
        let stub = Arc::new(StubSource::default().with_day(day(15), &["2024-03-15T09:30:00-0600"]));
        let scanner = AvailabilityScanner::new(stub.clone(), 30);

        let next = scanner
            .find_next_slot_at(&type_query("1"), noon_march_10())
            .await
            .unwrap()
            .unwrap();

        assert_eq!(next.slot.time, "2024-03-15T09:30:00-0600");
        assert_eq!(stub.call_count(), 6);
        assert_eq!(
            *stub.calls.lock().unwrap(),
            (10..=15).map(day).collect::<Vec<_>>()
        );
    }

    #[tokio::test]
    async fn exhausts_the_horizon_inclusive() {
        let stub = Arc::new(StubSource::default());
        let scanner = AvailabilityScanner::new(stub.clone(), 30);

        let next = scanner
            .find_next_slot_at(&type_query("1"), noon_march_10())
            .await
            .unwrap();

        assert_eq!(next, None);
        assert_eq!(stub.call_count(), 31);
    }

    #[tokio::test]
    async fn past_slots_today_are_skipped_and_order_is_fixed() {
        let stub = Arc::new(StubSource::default().with_day(
            day(10),
            &[
                "2024-03-10T16:00:00-0600",
                "2024-03-10T09:00:00-0600",
                "2024-03-10T12:00:00-0600",
                "2024-03-10T14:30:00-0600",
            ],
        ));
        let scanner = AvailabilityScanner::new(stub.clone(), 30);

        let next = scanner
            .find_next_slot_at(&type_query("1"), noon_march_10())
            .await
            .unwrap()
            .unwrap();

        // 12:00 equals now and does not qualify
        assert_eq!(next.slot.time, "2024-03-10T14:30:00-0600");
        assert_eq!(stub.call_count(), 1);
    }

    #[tokio::test]
    async fn unparseable_slots_are_ignored() {
        let stub = Arc::new(StubSource::default().with_day(
            day(10),
            &["garbage", "2024-03-10T13:00:00-06:00"],
        ));
        let scanner = AvailabilityScanner::new(stub, 30);

        let next = scanner
            .find_next_slot_at(&type_query("1"), noon_march_10())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(next.slot.time, "2024-03-10T13:00:00-06:00");
    }

    #[tokio::test]
    async fn full_slots_are_passed_over() {
        let mut full = Slot::new("2024-03-10T13:00:00-0600");
        full.slots_available = Some(0);
        let mut stub = StubSource::default();
        stub.days
            .insert(day(10), vec![full, Slot::new("2024-03-10T14:00:00-0600")]);
        let scanner = AvailabilityScanner::new(Arc::new(stub), 30);

        let next = scanner
            .find_next_slot_at(&type_query("1"), noon_march_10())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(next.slot.time, "2024-03-10T14:00:00-0600");
    }

    #[tokio::test]
    async fn upstream_failure_stops_the_scan() {
        let stub = Arc::new(StubSource {
            fail: true,
            ..Default::default()
        });
        let scanner = AvailabilityScanner::new(stub.clone(), 30);

        let result = scanner
            .find_next_slot_at(&type_query("1"), noon_march_10())
            .await;
        assert!(matches!(result, Err(UpstreamError::Status { status: 503, .. })));
        assert_eq!(stub.call_count(), 1);
    }

    #[tokio::test]
    async fn today_is_the_display_zone_date() {
        // 02:00 UTC on the 11th is still the evening of the 10th in Edmonton
        let now = Utc.with_ymd_and_hms(2024, 3, 11, 2, 0, 0).unwrap();
        let stub = Arc::new(StubSource::default().with_day(day(10), &["2024-03-10T21:00:00-0600"]));
        let scanner = AvailabilityScanner::new(stub.clone(), 30);

        let next = scanner.find_next_slot_at(&type_query("1"), now).await.unwrap();
        assert!(next.is_some());
        assert_eq!(stub.calls.lock().unwrap()[0], day(10));
    }
}
