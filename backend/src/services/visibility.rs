//! Planet visibility sweep.
//!
//! The night is sampled on a fixed grid starting at the window start floored to a
//! 5-minute boundary. A planet is visible at a sample when the Sun is at or below
//! the darkness limit and the planet is at or above the altitude threshold. Each
//! maximal run of visible samples becomes one [`VisibilityEvent`] that starts at
//! its first visible sample, so the first event of a night may begin up to five
//! minutes before `window.start`.

use chrono::{DateTime, Duration, Utc};

use crate::ephemeris::{Body, Ephemeris};
use crate::models::{floor_to_five_minutes, NightWindow, Observer, Planet, VisibilityEvent};

/// Thresholds and sampling step for [`scan_visibility`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibilityParams {
    pub min_altitude: qtty::Degree,
    pub sun_altitude_limit: qtty::Degree,
    pub step: qtty::Minute,
}

impl Default for VisibilityParams {
    fn default() -> Self {
        Self {
            min_altitude: qtty::Degree::new(20.0),
            sun_altitude_limit: qtty::Degree::new(-12.0),
            step: qtty::Minute::new(5.0),
        }
    }
}

impl VisibilityParams {
    fn step_duration(&self) -> Option<Duration> {
        let millis = (self.step.value() * 60_000.0).round();
        (millis.is_finite() && millis >= 1.0).then(|| Duration::milliseconds(millis as i64))
    }
}

/// Sample instants covering the window, first one floored to 5 minutes.
fn sample_grid(window: &NightWindow, step: Duration) -> Vec<DateTime<Utc>> {
    let mut samples = Vec::new();
    let mut t = floor_to_five_minutes(window.start);
    while t <= window.end {
        samples.push(t);
        t += step;
    }
    samples
}

/// Visibility intervals for Mercury, Venus, Mars, Jupiter and Saturn, in that order.
///
/// Events are chronological per body; no cross-body sort is applied. An interval
/// closes at the first invisible sample; one still open after the last sample is
/// closed at `window.end` and flagged as a tail.
pub fn scan_visibility(
    ephemeris: &dyn Ephemeris,
    observer: &Observer,
    window: &NightWindow,
    params: &VisibilityParams,
) -> Vec<VisibilityEvent> {
    let Some(step) = params.step_duration() else {
        log::warn!("Visibility scan skipped: non-positive step {:?}", params.step);
        return Vec::new();
    };

    let samples = sample_grid(window, step);
    let sun_limit = params.sun_altitude_limit.value();
    let min_altitude = params.min_altitude.value();

    let dark: Vec<bool> = samples
        .iter()
        .map(|&t| ephemeris.body_altitude(Body::Sun, observer, t) <= sun_limit)
        .collect();

    let mut events = Vec::new();
    for planet in Planet::ALL {
        let body = Body::from(planet);
        let mut open: Option<DateTime<Utc>> = None;

        for (&t, &is_dark) in samples.iter().zip(&dark) {
            let visible = is_dark && ephemeris.body_altitude(body, observer, t) >= min_altitude;
            match (visible, open) {
                (true, None) => open = Some(t),
                (false, Some(opened)) => {
                    events.push(VisibilityEvent {
                        body: planet,
                        start: opened,
                        end: t,
                        tail: false,
                    });
                    open = None;
                }
                _ => {}
            }
        }

        if let Some(opened) = open {
            events.push(VisibilityEvent {
                body: planet,
                start: opened,
                end: window.end,
                tail: true,
            });
        }
    }

    log::debug!(
        "Visibility scan over {} samples produced {} events",
        samples.len(),
        events.len()
    );
    events
}
