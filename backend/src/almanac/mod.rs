//! Per-day solar almanac data.
//!
//! The night window comes from an external almanac (the US Naval Observatory
//! `rstt/oneday` API by default). [`AlmanacSource`] abstracts the fetch so the
//! resolver can be driven by canned data in tests.

pub mod client;
pub mod error;
pub mod payload;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::models::Observer;

pub use client::UsnoClient;
pub use error::AlmanacError;
pub use payload::{parse_clock_time, AlmanacDay, SolarPhenomenon};

/// Phenomenon labels as reported by the almanac.
pub mod phen {
    pub const BEGIN_CIVIL_TWILIGHT: &str = "Begin Civil Twilight";
    pub const END_CIVIL_TWILIGHT: &str = "End Civil Twilight";
    pub const RISE: &str = "Rise";
    pub const SET: &str = "Set";
}

/// Source of one-day solar almanacs.
#[async_trait]
pub trait AlmanacSource: Send + Sync {
    /// Fetch the solar phenomena for `date` (UTC) at the observer's position.
    async fn one_day(&self, observer: &Observer, date: NaiveDate) -> Result<AlmanacDay, AlmanacError>;
}
