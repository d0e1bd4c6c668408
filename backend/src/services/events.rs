//! Night-window and visibility event builder.
//!
//! Composes the twilight resolver with the visibility, zenith and moon-phase
//! scanners and renders their results as wire [`Event`] records.

use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};
use serde_json::json;

use super::moon_phase::scan_moon_phases;
use super::twilight::resolve_night_window;
use super::visibility::{scan_visibility, VisibilityParams};
use super::zenith::sample_zenith;
use crate::almanac::{AlmanacError, AlmanacSource};
use crate::config::ScanSettings;
use crate::ephemeris::Ephemeris;
use crate::models::{
    to_iso, Event, EventKind, MoonPhaseEvent, Observer, VisibilityEvent, ZenithSample,
};

/// Failure while building the event list.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error(transparent)]
    Almanac(#[from] AlmanacError),

    #[error("Task join error: {0}")]
    Task(String),
}

/// Scanner settings used by the builder.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScanOptions {
    pub visibility: VisibilityParams,
    pub moon_phase_tolerance: qtty::Degree,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            visibility: VisibilityParams::default(),
            moon_phase_tolerance: qtty::Degree::new(1.5),
        }
    }
}

impl From<&ScanSettings> for ScanOptions {
    fn from(settings: &ScanSettings) -> Self {
        Self {
            visibility: VisibilityParams {
                min_altitude: settings.min_altitude_deg,
                sun_altitude_limit: settings.sun_altitude_limit_deg,
                step: settings.step_minutes,
            },
            moon_phase_tolerance: settings.moon_phase_tolerance_deg,
        }
    }
}

/// Builds tonight / future event lists from an almanac source and an ephemeris.
#[derive(Clone)]
pub struct EventBuilder {
    almanac: Arc<dyn AlmanacSource>,
    ephemeris: Arc<dyn Ephemeris>,
    options: ScanOptions,
}

impl EventBuilder {
    pub fn new(
        almanac: Arc<dyn AlmanacSource>,
        ephemeris: Arc<dyn Ephemeris>,
        options: ScanOptions,
    ) -> Self {
        Self { almanac, ephemeris, options }
    }

    pub fn options(&self) -> &ScanOptions {
        &self.options
    }

    /// Sunset, planet windows and hourly zenith constellations for the night
    /// starting on `reference_date`.
    ///
    /// An unresolvable night window yields an empty list; an almanac failure is
    /// an error.
    pub async fn tonight(
        &self,
        observer: Observer,
        reference_date: NaiveDate,
    ) -> Result<Vec<Event>, BuildError> {
        let night = resolve_night_window(self.almanac.as_ref(), &observer, reference_date).await?;

        let Some(window) = night.window else {
            log::info!("No night window for {}; returning no events", reference_date);
            return Ok(Vec::new());
        };

        let ephemeris = Arc::clone(&self.ephemeris);
        let params = self.options.visibility;
        let (planets, zenith) = tokio::task::spawn_blocking(move || {
            let planets = scan_visibility(ephemeris.as_ref(), &observer, &window, &params);
            let zenith = sample_zenith(ephemeris.as_ref(), &observer, &window);
            (planets, zenith)
        })
        .await
        .map_err(|e| BuildError::Task(e.to_string()))?;

        let min_altitude = params.min_altitude.value();
        let mut events = Vec::with_capacity(1 + planets.len() + zenith.len());
        events.extend(night.sunset.map(sunset_event));
        events.extend(planets.iter().map(|p| planet_event(p, min_altitude)));
        events.extend(zenith.iter().map(constellation_event));
        Ok(events)
    }

    /// Principal moon phases for `days` daily samples starting at `start`.
    pub async fn future(&self, start: DateTime<Utc>, days: u32) -> Result<Vec<Event>, BuildError> {
        let ephemeris = Arc::clone(&self.ephemeris);
        let tolerance = self.options.moon_phase_tolerance;
        let phases = tokio::task::spawn_blocking(move || {
            scan_moon_phases(ephemeris.as_ref(), start, days, tolerance)
        })
        .await
        .map_err(|e| BuildError::Task(e.to_string()))?;

        Ok(phases.iter().map(phase_event).collect())
    }
}

pub fn sunset_event(sunset: DateTime<Utc>) -> Event {
    let start = to_iso(sunset);
    Event {
        id: format!("sunset-{}", start),
        title: "Sunset".to_string(),
        start,
        end: None,
        kind: EventKind::Sun,
        meta: None,
    }
}

pub fn planet_event(visibility: &VisibilityEvent, min_altitude_deg: f64) -> Event {
    let name = visibility.body.name();
    let start = to_iso(visibility.start);
    let id = if visibility.tail {
        format!("{}-{}-tail", name, start)
    } else {
        format!("{}-{}", name, start)
    };
    Event {
        id,
        title: format!("{} visible", name),
        start,
        end: Some(to_iso(visibility.end)),
        kind: EventKind::Planet,
        meta: Some(json!({ "minAltDeg": min_altitude_deg })),
    }
}

pub fn constellation_event(sample: &ZenithSample) -> Event {
    let start = to_iso(sample.time);
    Event {
        id: format!("zenith-{}", start),
        title: format!("Overhead: {}", sample.constellation_name),
        start,
        end: None,
        kind: EventKind::Constellation,
        meta: Some(json!({ "code": sample.constellation_code })),
    }
}

pub fn phase_event(phase: &MoonPhaseEvent) -> Event {
    let start = to_iso(phase.time);
    Event {
        id: format!("phase-{}-{}", phase.phase.name(), start),
        title: phase.phase.name().to_string(),
        start,
        end: None,
        kind: EventKind::Phase,
        meta: None,
    }
}
