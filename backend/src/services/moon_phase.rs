//! Principal moon phases over a range of days.

use chrono::{DateTime, Days, Utc};

use crate::ephemeris::Ephemeris;
use crate::models::{MoonPhase, MoonPhaseEvent};

/// Angular distance between two angles on the circle, in [0, 180].
pub fn circular_distance_deg(a: f64, b: f64) -> f64 {
    let diff = (a - b).abs() % 360.0;
    diff.min(360.0 - diff)
}

/// Sample the phase angle once per day from `start` (same wall-clock time each
/// day) and report every principal phase within `tolerance` of the sample.
pub fn scan_moon_phases(
    ephemeris: &dyn Ephemeris,
    start: DateTime<Utc>,
    days: u32,
    tolerance: qtty::Degree,
) -> Vec<MoonPhaseEvent> {
    let tolerance = tolerance.value();
    let mut events = Vec::new();

    for i in 0..days {
        let Some(time) = start.checked_add_days(Days::new(u64::from(i))) else {
            break;
        };
        let angle = ephemeris.moon_phase(time);
        for phase in MoonPhase::ALL {
            if circular_distance_deg(angle, phase.target_degrees()) <= tolerance {
                events.push(MoonPhaseEvent { time, phase });
            }
        }
    }

    events
}
