//! Human-readable "time ago" labels
//!
//! Buckets follow the common relative-time scale: the elapsed time is
//! measured in progressively larger units and the first bucket whose limit
//! holds picks the label. A bucket that rounds to a single unit falls back
//! to the preceding singular label ("an hour" rather than "1 hours").

use std::fmt;
use std::sync::Arc;

use chirp_common::Locale;
use chrono::{DateTime, Utc};

use super::clock::{Clock, SystemClock};

const MS_PER_SECOND: f64 = 1_000.0;
const MS_PER_MINUTE: f64 = 60.0 * MS_PER_SECOND;
const MS_PER_HOUR: f64 = 60.0 * MS_PER_MINUTE;
const MS_PER_DAY: f64 = 24.0 * MS_PER_HOUR;
/// Average Gregorian month. Months and years are measured with this fixed
/// length, not by calendar arithmetic, so a label near a month boundary can
/// be one month off from a calendar-month count.
const DAYS_PER_MONTH: f64 = 30.436_875;

#[derive(Debug, Clone, Copy)]
enum Unit {
    Second,
    Minute,
    Hour,
    Day,
    Month,
    Year,
}

impl Unit {
    fn measure(self, millis: f64) -> f64 {
        let days = millis / MS_PER_DAY;
        match self {
            Self::Second => millis / MS_PER_SECOND,
            Self::Minute => millis / MS_PER_MINUTE,
            Self::Hour => millis / MS_PER_HOUR,
            Self::Day => days,
            Self::Month => days / DAYS_PER_MONTH,
            Self::Year => days / DAYS_PER_MONTH / 12.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Label {
    Seconds,
    Minute,
    Minutes,
    Hour,
    Hours,
    Day,
    Days,
    Month,
    Months,
    Year,
    Years,
}

struct Bucket {
    label: Label,
    /// Inclusive upper bound in the last measured unit; `None` catches all
    limit: Option<i64>,
    /// Re-measure in this unit before testing the limit
    unit: Option<Unit>,
}

const BUCKETS: [Bucket; 11] = [
    Bucket { label: Label::Seconds, limit: Some(44), unit: Some(Unit::Second) },
    Bucket { label: Label::Minute, limit: Some(89), unit: None },
    Bucket { label: Label::Minutes, limit: Some(44), unit: Some(Unit::Minute) },
    Bucket { label: Label::Hour, limit: Some(89), unit: None },
    Bucket { label: Label::Hours, limit: Some(21), unit: Some(Unit::Hour) },
    Bucket { label: Label::Day, limit: Some(35), unit: None },
    Bucket { label: Label::Days, limit: Some(25), unit: Some(Unit::Day) },
    Bucket { label: Label::Month, limit: Some(45), unit: None },
    Bucket { label: Label::Months, limit: Some(10), unit: Some(Unit::Month) },
    Bucket { label: Label::Year, limit: Some(17), unit: None },
    Bucket { label: Label::Years, limit: None, unit: Some(Unit::Year) },
];

fn duration_text(locale: Locale, label: Label, n: i64) -> String {
    match (locale, label) {
        (Locale::ZhTw, Label::Seconds) => "幾秒".to_string(),
        (Locale::ZhTw, Label::Minute) => "1 分鐘".to_string(),
        (Locale::ZhTw, Label::Minutes) => format!("{n} 分鐘"),
        (Locale::ZhTw, Label::Hour) => "1 小時".to_string(),
        (Locale::ZhTw, Label::Hours) => format!("{n} 小時"),
        (Locale::ZhTw, Label::Day) => "1 天".to_string(),
        (Locale::ZhTw, Label::Days) => format!("{n} 天"),
        (Locale::ZhTw, Label::Month) => "1 個月".to_string(),
        (Locale::ZhTw, Label::Months) => format!("{n} 個月"),
        (Locale::ZhTw, Label::Year) => "1 年".to_string(),
        (Locale::ZhTw, Label::Years) => format!("{n} 年"),
        (Locale::En, Label::Seconds) => "a few seconds".to_string(),
        (Locale::En, Label::Minute) => "a minute".to_string(),
        (Locale::En, Label::Minutes) => format!("{n} minutes"),
        (Locale::En, Label::Hour) => "an hour".to_string(),
        (Locale::En, Label::Hours) => format!("{n} hours"),
        (Locale::En, Label::Day) => "a day".to_string(),
        (Locale::En, Label::Days) => format!("{n} days"),
        (Locale::En, Label::Month) => "a month".to_string(),
        (Locale::En, Label::Months) => format!("{n} months"),
        (Locale::En, Label::Year) => "a year".to_string(),
        (Locale::En, Label::Years) => format!("{n} years"),
    }
}

fn with_direction(locale: Locale, text: String, future: bool) -> String {
    match (locale, future) {
        (Locale::ZhTw, false) => format!("{text}前"),
        (Locale::ZhTw, true) => format!("{text}內"),
        (Locale::En, false) => format!("{text} ago"),
        (Locale::En, true) => format!("in {text}"),
    }
}

/// Formats timestamps relative to a clock in a fixed locale
#[derive(Clone)]
pub struct RelativeTimeFormatter {
    locale: Locale,
    clock: Arc<dyn Clock>,
}

impl RelativeTimeFormatter {
    pub fn new(locale: Locale, clock: Arc<dyn Clock>) -> Self {
        Self { locale, clock }
    }

    /// Formatter on wall-clock time
    pub fn system(locale: Locale) -> Self {
        Self::new(locale, Arc::new(SystemClock))
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Label for `at` relative to the clock's current instant
    pub fn from_now(&self, at: DateTime<Utc>) -> String {
        self.between(at, self.clock.now())
    }

    /// Label for `at` as seen from `now`
    pub fn between(&self, at: DateTime<Utc>, now: DateTime<Utc>) -> String {
        let millis = (at - now).num_milliseconds() as f64;
        let future = millis > 0.0;

        let mut measured = 0.0;
        let mut chosen = BUCKETS.len() - 1;
        let mut amount = 0;
        for (i, bucket) in BUCKETS.iter().enumerate() {
            if let Some(unit) = bucket.unit {
                measured = unit.measure(millis);
            }
            amount = measured.abs().round() as i64;
            if bucket.limit.is_none_or(|limit| amount <= limit) {
                chosen = if amount <= 1 && i > 0 { i - 1 } else { i };
                break;
            }
        }

        let text = duration_text(self.locale, BUCKETS[chosen].label, amount);
        with_direction(self.locale, text, future)
    }
}

impl fmt::Debug for RelativeTimeFormatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RelativeTimeFormatter")
            .field("locale", &self.locale)
            .field("clock", &"dyn Clock")
            .finish()
    }
}
