//! Wire time formatting and the visibility grid alignment.

use chrono::{DateTime, Duration, SecondsFormat, Timelike, Utc};

/// ISO-8601 UTC rendering used on the wire: millisecond precision, `Z` suffix.
pub fn to_iso(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Floor an instant to the previous 5-minute boundary, dropping seconds.
pub fn floor_to_five_minutes(instant: DateTime<Utc>) -> DateTime<Utc> {
    let whole_minutes = instant
        .with_second(0)
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(instant);
    whole_minutes - Duration::minutes(i64::from(whole_minutes.minute() % 5))
}
