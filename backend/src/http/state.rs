//! Application state for the HTTP server.

use std::sync::Arc;

use crate::almanac::AlmanacSource;
use crate::config::ServiceConfig;
use crate::ephemeris::Ephemeris;
use crate::services::{EventBuilder, ScanOptions};

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Immutable service configuration
    pub config: Arc<ServiceConfig>,
    /// Event builder wired to the almanac source and ephemeris
    pub builder: EventBuilder,
}

impl AppState {
    /// Create a new application state from the configuration and the two sources.
    pub fn new(
        config: ServiceConfig,
        almanac: Arc<dyn AlmanacSource>,
        ephemeris: Arc<dyn Ephemeris>,
    ) -> Self {
        let options = ScanOptions::from(&config.scan);
        Self {
            config: Arc::new(config),
            builder: EventBuilder::new(almanac, ephemeris, options),
        }
    }
}
