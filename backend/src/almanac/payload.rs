//! Decoding of the one-day almanac payload.
//!
//! The service returns a GeoJSON feature whose `properties.data.sundata` array
//! lists solar phenomena with UTC clock times:
//!
//! ```json
//! {"properties": {"data": {"sundata": [
//!     {"phen": "Set", "time": "23:04"},
//!     {"phen": "End Civil Twilight", "time": "23:33"}
//! ]}}}
//! ```

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::error::{AlmanacError, AlmanacResult};

/// One labelled solar event with its raw clock string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolarPhenomenon {
    pub phen: String,
    pub time: Option<String>,
}

impl SolarPhenomenon {
    pub fn new(phen: impl Into<String>, time: impl Into<String>) -> Self {
        Self {
            phen: phen.into(),
            time: Some(time.into()),
        }
    }
}

/// Solar phenomena for a single UTC date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlmanacDay {
    pub date: NaiveDate,
    pub sundata: Vec<SolarPhenomenon>,
}

impl AlmanacDay {
    pub fn new(date: NaiveDate, sundata: Vec<SolarPhenomenon>) -> Self {
        Self { date, sundata }
    }

    /// Decode a service payload. Missing paths yield an empty phenomenon list;
    /// only a body that is not JSON at all is an error.
    pub fn from_json_str(date: NaiveDate, body: &str) -> AlmanacResult<Self> {
        let value: Value =
            serde_json::from_str(body).map_err(|e| AlmanacError::Decode(e.to_string()))?;
        Ok(Self::from_value(date, &value))
    }

    pub fn from_value(date: NaiveDate, value: &Value) -> Self {
        let sundata = value
            .pointer("/properties/data/sundata")
            .and_then(Value::as_array)
            .map(|entries| entries.iter().filter_map(phenomenon_from_value).collect())
            .unwrap_or_default();
        Self { date, sundata }
    }

    /// Instant of the first phenomenon labelled `phen`, if its time parses.
    pub fn instant_of(&self, phen: &str) -> Option<DateTime<Utc>> {
        let entry = self.sundata.iter().find(|p| p.phen == phen)?;
        let clock = parse_clock_time(entry.time.as_deref()?)?;
        Some(self.date.and_time(clock).and_utc())
    }
}

fn phenomenon_from_value(entry: &Value) -> Option<SolarPhenomenon> {
    let phen = entry.get("phen")?.as_str()?.to_string();
    let time = entry.get("time").and_then(Value::as_str).map(str::to_string);
    Some(SolarPhenomenon { phen, time })
}

/// Parse an almanac clock string, `HH:MM` or `HH:MM:SS`.
///
/// Placeholders such as `--:--`, single-digit fields and out-of-range values
/// all yield `None`.
pub fn parse_clock_time(raw: &str) -> Option<NaiveTime> {
    let fields: Vec<&str> = raw.split(':').collect();
    if !(2..=3).contains(&fields.len()) {
        return None;
    }
    let mut numbers = [0u32; 3];
    for (slot, field) in numbers.iter_mut().zip(&fields) {
        if field.len() != 2 || !field.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        *slot = field.parse().ok()?;
    }
    NaiveTime::from_hms_opt(numbers[0], numbers[1], numbers[2])
}
