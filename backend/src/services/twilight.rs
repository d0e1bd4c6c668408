//! Twilight window resolution.
//!
//! The night runs from end of civil twilight on the reference date to begin of
//! civil twilight on the following date. Each bound independently falls back to
//! sunset / sunrise when the almanac omits the twilight phenomenon (polar
//! summer, malformed times).

use chrono::{DateTime, Days, NaiveDate, Utc};

use crate::almanac::{phen, AlmanacDay, AlmanacError, AlmanacSource};
use crate::models::{NightWindow, Observer};

/// Outcome of resolving tonight's window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedNight {
    /// Present only if both bounds resolved.
    pub window: Option<NightWindow>,
    /// Sunset on the reference date.
    pub sunset: Option<DateTime<Utc>>,
}

/// Fetch today's and tomorrow's almanacs concurrently and derive the night window.
///
/// A failure of either fetch fails the whole resolution.
pub async fn resolve_night_window(
    source: &dyn AlmanacSource,
    observer: &Observer,
    reference_date: NaiveDate,
) -> Result<ResolvedNight, AlmanacError> {
    let next_date = reference_date
        .checked_add_days(Days::new(1))
        .unwrap_or(reference_date);

    let (today, tomorrow) = tokio::try_join!(
        source.one_day(observer, reference_date),
        source.one_day(observer, next_date),
    )?;

    Ok(night_from_almanacs(&today, &tomorrow))
}

/// Derive the night window from two consecutive almanac days.
pub fn night_from_almanacs(today: &AlmanacDay, tomorrow: &AlmanacDay) -> ResolvedNight {
    let sunset = today.instant_of(phen::SET);
    let start = today.instant_of(phen::END_CIVIL_TWILIGHT).or(sunset);
    let end = tomorrow
        .instant_of(phen::BEGIN_CIVIL_TWILIGHT)
        .or_else(|| tomorrow.instant_of(phen::RISE));

    let window = match (start, end) {
        (Some(start), Some(end)) => Some(NightWindow::new(start, end)),
        _ => {
            log::debug!(
                "Night window unresolved for {}: start={:?} end={:?}",
                today.date,
                start,
                end
            );
            None
        }
    };

    ResolvedNight { window, sunset }
}
