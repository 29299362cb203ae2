use chrono::{DateTime, Datelike, Utc};
use chrono_tz::Tz;

use crate::formatting::locale::resolve_locale;
use crate::models::slot::parse_timestamp;

/// All Today/Tomorrow/weekday decisions are made on this zone's calendar.
pub const DISPLAY_TIMEZONE: Tz = chrono_tz::America::Edmonton;

pub const INVALID_TIME: &str = "Invalid time";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayLabel {
    Today,
    Tomorrow,
    Weekday,
    MonthDay,
}

impl DayLabel {
    pub fn from_days_diff(days_diff: i64) -> Self {
        match days_diff {
            0 => DayLabel::Today,
            1 => DayLabel::Tomorrow,
            2..=6 => DayLabel::Weekday,
            _ => DayLabel::MonthDay,
        }
    }
}

/// Renders `timestamp` relative to `now`, e.g. "Tomorrow at 10:00 AM".
///
/// The day difference is taken between calendar dates in the display zone,
/// so a 23 or 25 hour DST day still counts as one day.
pub fn format_display_at(timestamp: &str, locale: &str, now: DateTime<Utc>) -> String {
    let Some(target) = parse_timestamp(timestamp) else {
        return INVALID_TIME.to_string();
    };

    let target = target.with_timezone(&DISPLAY_TIMEZONE);
    let today = now.with_timezone(&DISPLAY_TIMEZONE).date_naive();
    let days_diff = (target.date_naive() - today).num_days();

    let time = target.format("%-I:%M %p");
    let locale = resolve_locale(locale);

    match DayLabel::from_days_diff(days_diff) {
        DayLabel::Today => format!("Today at {time}"),
        DayLabel::Tomorrow => format!("Tomorrow at {time}"),
        DayLabel::Weekday => format!("{} at {time}", target.format_localized("%A", locale)),
        DayLabel::MonthDay => format!(
            "{} {} at {time}",
            target.format_localized("%b", locale),
            target.day()
        ),
    }
}
