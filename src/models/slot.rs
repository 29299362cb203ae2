use chrono::{DateTime, FixedOffset};
use serde::Deserialize;

/// One bookable time returned by the provider for a single day.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Slot {
    pub time: String,
    #[serde(default)]
    pub slots_available: Option<u32>,
}

impl Slot {
    #[cfg(test)]
    pub fn new(time: impl Into<String>) -> Self {
        Slot {
            time: time.into(),
            slots_available: None,
        }
    }

    /// Group classes report a seat count; a full class is not bookable.
    pub fn has_capacity(&self) -> bool {
        self.slots_available != Some(0)
    }

    pub fn parsed_time(&self) -> Option<DateTime<FixedOffset>> {
        parse_timestamp(&self.time)
    }
}

/// Accepts RFC 3339 as well as the provider's `2024-03-10T15:00:00-0600` form.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<FixedOffset>> {
    let raw = raw.trim();
    DateTime::parse_from_rfc3339(raw)
        .or_else(|_| DateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%z"))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_both_offset_styles() {
        let a = parse_timestamp("2024-03-10T15:00:00-0600").unwrap();
        let b = parse_timestamp("2024-03-10T15:00:00-06:00").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_timestamp("not a time").is_none());
        assert!(parse_timestamp("").is_none());
    }

    #[test]
    fn full_classes_have_no_capacity() {
        let slots: Vec<Slot> = serde_json::from_str(
            r#"[{"time":"2024-03-10T15:00:00-0600","slotsAvailable":0},{"time":"2024-03-10T16:00:00-0600"}]"#,
        )
        .unwrap();
        assert!(!slots[0].has_capacity());
        assert!(slots[1].has_capacity());
    }

    #[test]
    fn ignores_unknown_provider_fields() {
        let slots: Vec<Slot> = serde_json::from_str(
            r#"[{"time":"2024-03-10T15:00:00-0600","slotsAvailable":2,"calendarID":7}]"#,
        )
        .unwrap();
        assert_eq!(slots[0].slots_available, Some(2));
    }
}
