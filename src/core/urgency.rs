use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};
use serde::Serialize;

pub const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Delivery proximity bucket used to tint active order chips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UrgencyColor {
    /// Due today or overdue.
    Urgent,
    /// Due within one to three days.
    Soon,
    Normal,
}

impl UrgencyColor {
    pub fn from_days(days: i64) -> Self {
        if days <= 0 {
            UrgencyColor::Urgent
        } else if days <= 3 {
            UrgencyColor::Soon
        } else {
            UrgencyColor::Normal
        }
    }

    pub fn token(&self) -> &'static str {
        match self {
            UrgencyColor::Urgent => "#f8005380",
            UrgencyColor::Soon => "#f7eb6cb0",
            UrgencyColor::Normal => "#92ea26a6",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UrgencyColor::Urgent => "urgent",
            UrgencyColor::Soon => "soon",
            UrgencyColor::Normal => "normal",
        }
    }
}

/// Whole days from `today_ms` to `due_ms`, partial days rounded up.
pub fn days_between(today_ms: i64, due_ms: i64) -> i64 {
    let diff = due_ms - today_ms;
    -(-diff).div_euclid(MILLIS_PER_DAY)
}

fn utc_midnight_ms(date: NaiveDate) -> i64 {
    date.and_time(NaiveTime::MIN).and_utc().timestamp_millis()
}

/// Urgency of a delivery date relative to `today`, both taken as calendar dates.
pub fn due_date_urgency(delivery: NaiveDate, today: NaiveDate) -> UrgencyColor {
    UrgencyColor::from_days(days_between(utc_midnight_ms(today), utc_midnight_ms(delivery)))
}

/// Midnight of `date` in `tz`, in epoch milliseconds.
fn local_midnight_ms<Tz: TimeZone>(tz: &Tz, date: NaiveDate) -> i64 {
    let midnight = date.and_time(NaiveTime::MIN);
    match tz.from_local_datetime(&midnight).earliest() {
        Some(dt) => dt.timestamp_millis(),
        // Midnight skipped by a DST jump; the day starts at the first valid instant.
        None => tz
            .from_local_datetime(&(midnight + chrono::Duration::hours(1)))
            .earliest()
            .map(|dt| dt.timestamp_millis())
            .unwrap_or_else(|| utc_midnight_ms(date)),
    }
}

/// Urgency of a raw delivery date string as seen from `now` in `now`'s timezone.
///
/// Both sides are normalised to local midnight before subtracting, so a day
/// shortened or lengthened by DST still counts through the ceiling division.
/// Unparsable input falls back to [`UrgencyColor::Normal`].
pub fn due_date_urgency_at<Tz: TimeZone>(delivery: &str, now: &DateTime<Tz>) -> UrgencyColor {
    let tz = now.timezone();
    let Some(due) = parse_date_in(delivery, &tz) else {
        tracing::debug!("Unparsable delivery date '{}', using normal urgency", delivery);
        return UrgencyColor::Normal;
    };

    let today = now.date_naive();
    UrgencyColor::from_days(days_between(
        local_midnight_ms(&tz, today),
        local_midnight_ms(&tz, due),
    ))
}

/// Calendar date of a date or timestamp string, in `tz` when it carries an offset.
pub fn parse_date_in<Tz: TimeZone>(value: &str, tz: &Tz) -> Option<NaiveDate> {
    let value = value.trim();
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(tz).date_naive());
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .map(|dt| dt.date())
}

/// Calendar date of a date or timestamp string, offsets resolved in UTC.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    parse_date_in(value, &chrono::Utc)
}
