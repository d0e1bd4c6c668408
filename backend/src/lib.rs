//! # Stargaze astro backend
//!
//! Builds the night-sky event list served to the stargazing frontend.
//!
//! For a given observer the backend resolves tonight's night window (end of
//! civil twilight to the next morning's begin of civil twilight, falling back
//! to sunset and sunrise) from the USNO one-day almanac, sweeps it for
//! naked-eye planet visibility, samples the constellation overhead every hour and, in the
//! forward-looking mode, scans upcoming days for the principal moon phases.
//!
//! ## Architecture
//!
//! - [`almanac`]: USNO one-day client and payload decoding
//! - [`ephemeris`]: analytic Sun/Moon/planet positions, sidereal time,
//!   constellation lookup
//! - [`services`]: twilight resolver, scanners and the event builder
//! - [`models`]: observer, windows, events and time helpers
//! - [`config`]: TOML/env configuration
//! - [`http`]: Axum server exposing `GET /api/astro`

pub mod almanac;
pub mod config;
pub mod ephemeris;
pub mod models;
pub mod services;

#[cfg(feature = "http-server")]
pub mod http;

pub use config::{ConfigError, ServiceConfig};
pub use models::{Event, EventKind, NightWindow, Observer};
pub use services::EventBuilder;
