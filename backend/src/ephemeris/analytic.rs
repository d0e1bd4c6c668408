//! [`Ephemeris`] backed by `siderust`.
//!
//! Planet and Sun positions come from VSOP87, the Moon from ELP2000, sidereal
//! time from the IAU 2006 GMST expression. Altitudes are topocentric and, unless
//! disabled, include standard atmospheric refraction.

use chrono::{DateTime, Utc};
use siderust::astro::earth_rotation::gmst_from_tt;
use siderust::bodies::solar_system::{Jupiter, Mars, Mercury, Moon, Saturn, Sun, Venus};
use siderust::coordinates::cartesian;
use siderust::coordinates::centers::{Geocentric, Geodetic, Heliocentric};
use siderust::coordinates::frames::{self, ECEF};
use siderust::coordinates::spherical::direction;
use siderust::coordinates::transform::{TransformCenter, TransformFrame};
use siderust::event::altitude::AltitudeProvider;
use siderust::qtty::{AstronomicalUnit, Degrees, Kilometer, Meter, Quantity, Radians};
use siderust::time::{JulianDate, ModifiedJulianDate};

use super::{constellations, normalize_degrees, Body, ConstellationInfo, Ephemeris, Equatorial};
use crate::models::Observer;

type HelioEcliptic = cartesian::Position<Heliocentric, frames::EclipticMeanJ2000, AstronomicalUnit>;
type GeoEcliptic<U> = cartesian::Position<Geocentric, frames::EclipticMeanJ2000, U>;
type GeoEquatorial<U> = cartesian::Position<Geocentric, frames::EquatorialMeanJ2000, U>;

/// Built-in ephemeris on VSOP87 and ELP2000.
#[derive(Debug, Clone, Copy)]
pub struct AnalyticEphemeris {
    /// Apply standard atmospheric refraction to altitudes.
    pub refraction: bool,
}

impl AnalyticEphemeris {
    pub fn new() -> Self {
        Self { refraction: true }
    }

    /// Geometric altitudes only.
    pub fn without_refraction() -> Self {
        Self { refraction: false }
    }

    fn apparent(&self, geometric_deg: f64) -> f64 {
        if self.refraction {
            geometric_deg + refraction_deg(geometric_deg)
        } else {
            geometric_deg
        }
    }
}

impl Default for AnalyticEphemeris {
    fn default() -> Self {
        Self::new()
    }
}

fn site(observer: &Observer) -> Geodetic<ECEF> {
    Geodetic::<ECEF>::new(
        Degrees::new(observer.longitude().value()),
        Degrees::new(observer.latitude().value()),
        Quantity::<Meter>::new(0.0),
    )
}

fn to_equatorial<U>(position: &GeoEquatorial<U>) -> Equatorial
where
    U: siderust::qtty::LengthUnit,
{
    let spherical = position.to_spherical();
    Equatorial {
        ra_hours: normalize_degrees(spherical.azimuth.value()) / 15.0,
        dec_deg: spherical.polar.value(),
    }
}

fn from_heliocentric(heliocentric: HelioEcliptic, jd: JulianDate) -> Equatorial {
    let ecliptic: GeoEcliptic<AstronomicalUnit> = heliocentric.to_center(jd);
    let equatorial: GeoEquatorial<AstronomicalUnit> = ecliptic.to_frame();
    to_equatorial(&equatorial)
}

fn degrees(angle: Radians) -> f64 {
    angle.value().to_degrees()
}

/// Saemundsson refraction in degrees for a geometric altitude in degrees,
/// at 10 C and 1010 hPa. Zero well below the horizon.
pub fn refraction_deg(altitude_deg: f64) -> f64 {
    if altitude_deg < -1.0 {
        return 0.0;
    }
    let h = altitude_deg.max(-0.5);
    let arcmin = 1.02 / (h + 10.3 / (h + 5.11)).to_radians().tan();
    arcmin / 60.0
}

impl Ephemeris for AnalyticEphemeris {
    fn equatorial(&self, body: Body, instant: DateTime<Utc>) -> Equatorial {
        let jd = JulianDate::from_chrono(instant);
        match body {
            Body::Sun => from_heliocentric(HelioEcliptic::CENTER, jd),
            Body::Moon => {
                let ecliptic: GeoEcliptic<Kilometer> = Moon::get_geo_position::<Kilometer>(jd);
                let equatorial: GeoEquatorial<Kilometer> = ecliptic.to_frame();
                to_equatorial(&equatorial)
            }
            Body::Mercury => from_heliocentric(Mercury::vsop87a(jd), jd),
            Body::Venus => from_heliocentric(Venus::vsop87a(jd), jd),
            Body::Mars => from_heliocentric(Mars::vsop87a(jd), jd),
            Body::Jupiter => from_heliocentric(Jupiter::vsop87a(jd), jd),
            Body::Saturn => from_heliocentric(Saturn::vsop87a(jd), jd),
        }
    }

    fn altitude(&self, observer: &Observer, instant: DateTime<Utc>, position: Equatorial) -> f64 {
        let target = direction::ICRS::new(
            Degrees::new(position.ra_hours * 15.0),
            Degrees::new(position.dec_deg),
        );
        let mjd = ModifiedJulianDate::from_chrono(instant);
        self.apparent(degrees(target.altitude_at(&site(observer), mjd)))
    }

    fn sidereal_time(&self, instant: DateTime<Utc>) -> f64 {
        let gmst = gmst_from_tt(JulianDate::from_chrono(instant));
        normalize_degrees(degrees(gmst)) / 15.0
    }

    fn constellation(&self, ra_hours: f64, dec_deg: f64) -> ConstellationInfo {
        constellations::lookup(ra_hours, dec_deg)
    }

    fn moon_phase(&self, instant: DateTime<Utc>) -> f64 {
        let geometry = Moon::phase_geocentric(JulianDate::from_chrono(instant));
        normalize_degrees(degrees(geometry.elongation))
    }

    fn body_altitude(&self, body: Body, observer: &Observer, instant: DateTime<Utc>) -> f64 {
        let site = site(observer);
        let mjd = ModifiedJulianDate::from_chrono(instant);
        let geometric = match body {
            Body::Sun => Sun.altitude_at(&site, mjd),
            Body::Moon => Moon.altitude_at(&site, mjd),
            Body::Mercury => Mercury.altitude_at(&site, mjd),
            Body::Venus => Venus.altitude_at(&site, mjd),
            Body::Mars => Mars.altitude_at(&site, mjd),
            Body::Jupiter => Jupiter.altitude_at(&site, mjd),
            Body::Saturn => Saturn.altitude_at(&site, mjd),
        };
        self.apparent(degrees(geometric))
    }
}
