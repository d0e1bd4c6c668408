//! Night window and sky event values.
//!
//! Everything here is computed fresh per request and handed to the HTTP layer
//! as wire [`Event`] records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Dark interval between end of evening civil twilight and begin of morning civil
/// twilight (or sunset/sunrise when twilight is not reported).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NightWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl NightWindow {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    pub fn duration(&self) -> chrono::Duration {
        self.end - self.start
    }
}

/// Planets tracked by the visibility scanner, in sweep order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Planet {
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
}

impl Planet {
    pub const ALL: [Planet; 5] = [
        Planet::Mercury,
        Planet::Venus,
        Planet::Mars,
        Planet::Jupiter,
        Planet::Saturn,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Planet::Mercury => "Mercury",
            Planet::Venus => "Venus",
            Planet::Mars => "Mars",
            Planet::Jupiter => "Jupiter",
            Planet::Saturn => "Saturn",
        }
    }
}

/// A maximal interval of the night during which a planet is observable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisibilityEvent {
    pub body: Planet,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    /// Interval was still open when the sweep reached the end of the window.
    pub tail: bool,
}

/// Constellation approximately overhead at a given hour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZenithSample {
    pub time: DateTime<Utc>,
    pub constellation_code: String,
    pub constellation_name: String,
}

/// Principal lunar phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoonPhase {
    NewMoon,
    FirstQuarter,
    FullMoon,
    LastQuarter,
}

impl MoonPhase {
    pub const ALL: [MoonPhase; 4] = [
        MoonPhase::NewMoon,
        MoonPhase::FirstQuarter,
        MoonPhase::FullMoon,
        MoonPhase::LastQuarter,
    ];

    /// Moon-minus-Sun ecliptic longitude at which the phase occurs.
    pub fn target_degrees(&self) -> f64 {
        match self {
            MoonPhase::NewMoon => 0.0,
            MoonPhase::FirstQuarter => 90.0,
            MoonPhase::FullMoon => 180.0,
            MoonPhase::LastQuarter => 270.0,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            MoonPhase::NewMoon => "New Moon",
            MoonPhase::FirstQuarter => "First Quarter",
            MoonPhase::FullMoon => "Full Moon",
            MoonPhase::LastQuarter => "Last Quarter",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoonPhaseEvent {
    pub time: DateTime<Utc>,
    pub phase: MoonPhase,
}

/// Category of a wire event, used by clients for styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Sun,
    Moon,
    Planet,
    Constellation,
    Twilight,
    Phase,
}

/// Calendar entry returned by `GET /api/astro`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub title: String,
    /// ISO-8601 UTC
    pub start: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
    pub kind: EventKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_planet_order_is_fixed() {
        let names: Vec<_> = Planet::ALL.iter().map(|p| p.name()).collect();
        assert_eq!(names, ["Mercury", "Venus", "Mars", "Jupiter", "Saturn"]);
    }

    #[test]
    fn test_moon_phase_targets() {
        let targets: Vec<_> = MoonPhase::ALL.iter().map(|p| p.target_degrees()).collect();
        assert_eq!(targets, [0.0, 90.0, 180.0, 270.0]);
        assert_eq!(MoonPhase::FullMoon.name(), "Full Moon");
    }

    #[test]
    fn test_event_serialization_skips_empty_fields() {
        let event = Event {
            id: "sunset-x".to_string(),
            title: "Sunset".to_string(),
            start: "2026-01-15T23:10:00.000Z".to_string(),
            end: None,
            kind: EventKind::Sun,
            meta: None,
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["kind"], "sun");
        assert!(json.get("end").is_none());
        assert!(json.get("meta").is_none());
    }

    #[test]
    fn test_night_window_duration() {
        let window = NightWindow::new(
            Utc.with_ymd_and_hms(2026, 1, 15, 23, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2026, 1, 16, 12, 30, 0).unwrap(),
        );
        assert_eq!(window.duration().num_minutes(), 13 * 60 + 30);
    }
}
