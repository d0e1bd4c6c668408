//! Property tests for the night scanners.

use chrono::{DateTime, Duration, TimeZone, Utc};
use proptest::prelude::*;

use stargaze::ephemeris::{AnalyticEphemeris, Body, ConstellationInfo, Ephemeris, Equatorial};
use stargaze::models::{floor_to_five_minutes, MoonPhase, NightWindow, Observer, Planet};
use stargaze::services::{sample_zenith, scan_moon_phases, scan_visibility, VisibilityParams};

fn window_from(start_secs: i64, length_mins: i64) -> NightWindow {
    let start = Utc.timestamp_opt(start_secs, 0).unwrap();
    NightWindow::new(start, start + Duration::minutes(length_mins))
}

// 2024-01-01 .. 2028-01-01
const EPOCH_RANGE: std::ops::Range<i64> = 1_704_067_200..1_830_297_600;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn prop_visibility_events_inside_window(
        start in EPOCH_RANGE,
        length in 0i64..(16 * 60),
        lat in -65.0..65.0f64,
        lon in -180.0..180.0f64,
    ) {
        let observer = Observer::new(lat, lon).unwrap();
        let window = window_from(start, length);
        let events = scan_visibility(
            &AnalyticEphemeris::new(),
            &observer,
            &window,
            &VisibilityParams::default(),
        );

        let grid_start = floor_to_five_minutes(window.start);
        for event in &events {
            if event.tail {
                prop_assert!(event.start <= event.end);
            } else {
                prop_assert!(event.start < event.end);
            }
            prop_assert!(event.start >= grid_start);
            prop_assert_eq!(event.start, floor_to_five_minutes(event.start));
            prop_assert!(event.end <= window.end);
        }

        for planet in Planet::ALL {
            let mine: Vec<_> = events.iter().filter(|e| e.body == planet).collect();
            for pair in mine.windows(2) {
                prop_assert!(pair[0].end <= pair[1].start);
            }
            prop_assert!(mine.iter().filter(|e| e.tail).count() <= 1);
            if let Some(tail) = mine.iter().find(|e| e.tail) {
                prop_assert_eq!(tail.end, window.end);
            }
        }
    }

    #[test]
    fn prop_zenith_sample_count(
        start in EPOCH_RANGE,
        length in 0i64..(20 * 60),
        lat in -89.0..89.0f64,
        lon in -180.0..180.0f64,
    ) {
        let observer = Observer::new(lat, lon).unwrap();
        let window = window_from(start, length);
        let samples = sample_zenith(&AnalyticEphemeris::new(), &observer, &window);

        prop_assert_eq!(samples.len() as i64, (length / 60).max(1) + 1);
        for (i, sample) in samples.iter().enumerate() {
            prop_assert_eq!(sample.time, window.start + Duration::hours(i as i64));
            prop_assert_eq!(sample.constellation_code.len(), 3);
        }
    }
}

/// Phase angle advancing linearly from `offset` at the epoch.
struct LinearMoon {
    epoch: DateTime<Utc>,
    offset: f64,
    degrees_per_day: f64,
}

impl Ephemeris for LinearMoon {
    fn equatorial(&self, body: Body, instant: DateTime<Utc>) -> Equatorial {
        AnalyticEphemeris::new().equatorial(body, instant)
    }

    fn altitude(&self, observer: &Observer, instant: DateTime<Utc>, position: Equatorial) -> f64 {
        AnalyticEphemeris::new().altitude(observer, instant, position)
    }

    fn sidereal_time(&self, instant: DateTime<Utc>) -> f64 {
        AnalyticEphemeris::new().sidereal_time(instant)
    }

    fn constellation(&self, ra_hours: f64, dec_deg: f64) -> ConstellationInfo {
        AnalyticEphemeris::new().constellation(ra_hours, dec_deg)
    }

    fn moon_phase(&self, instant: DateTime<Utc>) -> f64 {
        let days = (instant - self.epoch).num_seconds() as f64 / 86_400.0;
        (self.offset + self.degrees_per_day * days).rem_euclid(360.0)
    }
}

#[test]
fn test_new_moon_found_near_zero_start() {
    let epoch = Utc.with_ymd_and_hms(2026, 2, 17, 0, 0, 0).unwrap();
    let moon = LinearMoon { epoch, offset: 0.5, degrees_per_day: 12.19 };

    let events = scan_moon_phases(&moon, epoch, 30, qtty::Degree::new(1.5));
    assert!(events.iter().any(|e| e.phase == MoonPhase::NewMoon));
    assert_eq!(events[0].time, epoch);
    assert_eq!(events[0].phase, MoonPhase::NewMoon);
}

#[test]
fn test_zero_tolerance_needs_exact_angle() {
    let epoch = Utc.with_ymd_and_hms(2026, 2, 17, 0, 0, 0).unwrap();

    let off = LinearMoon { epoch, offset: 0.5, degrees_per_day: 12.19 };
    assert!(scan_moon_phases(&off, epoch, 30, qtty::Degree::new(0.0)).is_empty());

    // 90 degrees per day lands exactly on every principal phase.
    let exact = LinearMoon { epoch, offset: 0.0, degrees_per_day: 90.0 };
    let events = scan_moon_phases(&exact, epoch, 4, qtty::Degree::new(0.0));
    let phases: Vec<MoonPhase> = events.iter().map(|e| e.phase).collect();
    assert_eq!(
        phases,
        vec![
            MoonPhase::NewMoon,
            MoonPhase::FirstQuarter,
            MoonPhase::FullMoon,
            MoonPhase::LastQuarter
        ]
    );
}
