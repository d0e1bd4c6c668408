//! Observer location.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Validation failure for observer coordinates.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ObserverError {
    #[error("latitude must be within [-90, 90] degrees, got {0}")]
    Latitude(f64),
    #[error("longitude must be within [-180, 180] degrees, got {0}")]
    Longitude(f64),
}

/// Geographic position of the observer. Elevation is fixed at sea level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observer {
    latitude: qtty::Degree,
    longitude: qtty::Degree,
}

impl Observer {
    /// Validate and build an observer from latitude/longitude in degrees.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, ObserverError> {
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(ObserverError::Latitude(latitude));
        }
        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(ObserverError::Longitude(longitude));
        }
        Ok(Self {
            latitude: qtty::Degree::new(latitude),
            longitude: qtty::Degree::new(longitude),
        })
    }

    pub fn latitude(&self) -> qtty::Degree {
        self.latitude
    }

    /// East-positive longitude.
    pub fn longitude(&self) -> qtty::Degree {
        self.longitude
    }

    pub fn elevation_m(&self) -> f64 {
        0.0
    }
}
