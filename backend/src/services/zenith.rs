//! Hourly "what is overhead" samples.
//!
//! The zenith is approximated by taking local sidereal time as right ascension
//! and the observer latitude as declination, then asking the ephemeris which
//! constellation contains that point.

use chrono::Duration;

use crate::ephemeris::{local_sidereal_hours, Ephemeris};
use crate::models::{NightWindow, Observer, ZenithSample};

/// One sample per whole hour from `window.start`, chronological, duplicates kept.
///
/// A window of `h` whole hours yields `h + 1` samples. The hour count is at least
/// one, so a window shorter than an hour (or inverted) still yields two samples,
/// the second one hour after `window.start`.
pub fn sample_zenith(
    ephemeris: &dyn Ephemeris,
    observer: &Observer,
    window: &NightWindow,
) -> Vec<ZenithSample> {
    let hours = window.duration().num_hours().max(1);
    let declination = observer.latitude().value();

    (0..=hours)
        .map(|i| {
            let time = window.start + Duration::hours(i);
            let ra_hours = local_sidereal_hours(
                ephemeris.sidereal_time(time),
                observer.longitude().value(),
            );
            let info = ephemeris.constellation(ra_hours, declination);
            ZenithSample {
                time,
                constellation_code: info.code,
                constellation_name: info.name,
            }
        })
        .collect()
}
