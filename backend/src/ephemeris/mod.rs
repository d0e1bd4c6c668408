//! Ephemeris oracle.
//!
//! The scanners only ever ask five questions of the sky: where is a body
//! (equatorial coordinates), how high is it for an observer, what is the sidereal
//! time, which constellation contains a point, and what is the Moon's phase angle.
//! Those questions form the [`Ephemeris`] trait. [`AnalyticEphemeris`] answers them
//! through `siderust`.

mod analytic;
pub mod constellations;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{Observer, Planet};

pub use analytic::{refraction_deg, AnalyticEphemeris};
pub use constellations::ConstellationInfo;

/// Bodies the oracle can locate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
}

impl From<Planet> for Body {
    fn from(planet: Planet) -> Self {
        match planet {
            Planet::Mercury => Body::Mercury,
            Planet::Venus => Body::Venus,
            Planet::Mars => Body::Mars,
            Planet::Jupiter => Body::Jupiter,
            Planet::Saturn => Body::Saturn,
        }
    }
}

/// Geocentric equatorial coordinates, mean equator and equinox of J2000.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Equatorial {
    /// Right ascension in hours, [0, 24)
    pub ra_hours: f64,
    /// Declination in degrees, [-90, 90]
    pub dec_deg: f64,
}

/// Black-box astronomy queries used by the night scanners.
pub trait Ephemeris: Send + Sync {
    /// Equatorial coordinates of `body` at `instant`.
    fn equatorial(&self, body: Body, instant: DateTime<Utc>) -> Equatorial;

    /// Apparent altitude in degrees of a point for `observer` at `instant`.
    fn altitude(&self, observer: &Observer, instant: DateTime<Utc>, position: Equatorial) -> f64;

    /// Greenwich sidereal time in hours, [0, 24).
    fn sidereal_time(&self, instant: DateTime<Utc>) -> f64;

    /// Constellation containing the given J2000 sky position.
    fn constellation(&self, ra_hours: f64, dec_deg: f64) -> ConstellationInfo;

    /// Moon minus Sun geocentric ecliptic longitude in degrees, [0, 360).
    /// 0 = new, 90 = first quarter, 180 = full, 270 = last quarter.
    fn moon_phase(&self, instant: DateTime<Utc>) -> f64;

    /// Altitude of `body` for `observer` at `instant`.
    fn body_altitude(&self, body: Body, observer: &Observer, instant: DateTime<Utc>) -> f64 {
        let position = self.equatorial(body, instant);
        self.altitude(observer, instant, position)
    }
}

/// Wrap an angle in degrees into [0, 360).
pub fn normalize_degrees(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Local sidereal time in hours from Greenwich sidereal time and an east-positive longitude.
pub fn local_sidereal_hours(greenwich_hours: f64, longitude_deg: f64) -> f64 {
    normalize_degrees((greenwich_hours * 15.0) + longitude_deg) / 15.0
}
