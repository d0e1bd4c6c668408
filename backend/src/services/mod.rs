//! Night computations.
//!
//! These services sit between the HTTP layer and the almanac/ephemeris sources.
//! The twilight resolver performs I/O; the scanners are pure CPU sweeps.

pub mod events;
pub mod moon_phase;
pub mod twilight;
pub mod visibility;
pub mod zenith;

pub use events::{BuildError, EventBuilder, ScanOptions};
pub use moon_phase::scan_moon_phases;
pub use twilight::{resolve_night_window, ResolvedNight};
pub use visibility::{scan_visibility, VisibilityParams};
pub use zenith::sample_zenith;
