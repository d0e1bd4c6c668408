//! Service configuration.
//!
//! Settings are read from a TOML file when one is found, then selectively
//! overridden by environment variables. Every field has a default, so an empty
//! file (or no file at all) yields a working configuration.
//!
//! ```toml
//! [server]
//! host = "0.0.0.0"
//! port = 8080
//!
//! [almanac]
//! base_url = "https://aa.usno.navy.mil"
//! timeout_secs = 20
//!
//! [scan]
//! min_altitude_deg = 20.0
//! sun_altitude_limit_deg = -12.0
//! step_minutes = 5.0
//! moon_phase_tolerance_deg = 1.5
//! max_days = 60
//!
//! [defaults]
//! latitude = 38.95
//! longitude = -92.33
//! ```

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::almanac::client::DEFAULT_BASE_URL;

/// Errors while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {message}")]
    Read { path: String, message: String },

    #[error("Failed to parse config file {path}: {message}")]
    Parse { path: String, message: String },

    #[error("Invalid value for {key}: {value}")]
    InvalidEnv { key: String, value: String },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Complete service configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServiceConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub almanac: AlmanacSettings,
    #[serde(default)]
    pub scan: ScanSettings,
    #[serde(default)]
    pub defaults: DefaultLocation,
}

/// Listening address.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Almanac service endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlmanacSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

/// Thresholds and granularity of the night scanners.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanSettings {
    #[serde(default = "default_min_altitude")]
    pub min_altitude_deg: qtty::Degree,
    #[serde(default = "default_sun_limit")]
    pub sun_altitude_limit_deg: qtty::Degree,
    #[serde(default = "default_step")]
    pub step_minutes: qtty::Minute,
    #[serde(default = "default_phase_tolerance")]
    pub moon_phase_tolerance_deg: qtty::Degree,
    #[serde(default = "default_max_days")]
    pub max_days: u32,
}

/// Location used when a request omits `lat`/`lon`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultLocation {
    #[serde(default = "default_latitude")]
    pub latitude: f64,
    #[serde(default = "default_longitude")]
    pub longitude: f64,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    20
}

fn default_min_altitude() -> qtty::Degree {
    qtty::Degree::new(20.0)
}

fn default_sun_limit() -> qtty::Degree {
    qtty::Degree::new(-12.0)
}

fn default_step() -> qtty::Minute {
    qtty::Minute::new(5.0)
}

fn default_phase_tolerance() -> qtty::Degree {
    qtty::Degree::new(1.5)
}

fn default_max_days() -> u32 {
    60
}

fn default_latitude() -> f64 {
    38.95
}

fn default_longitude() -> f64 {
    -92.33
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for AlmanacSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for ScanSettings {
    fn default() -> Self {
        Self {
            min_altitude_deg: default_min_altitude(),
            sun_altitude_limit_deg: default_sun_limit(),
            step_minutes: default_step(),
            moon_phase_tolerance_deg: default_phase_tolerance(),
            max_days: default_max_days(),
        }
    }
}

impl Default for DefaultLocation {
    fn default() -> Self {
        Self {
            latitude: default_latitude(),
            longitude: default_longitude(),
        }
    }
}

impl AlmanacSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl ServiceConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let display = path.as_ref().display().to_string();
        let content = fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Read {
            path: display.clone(),
            message: e.to_string(),
        })?;

        let config: ServiceConfig = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: display,
            message: e.to_string(),
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Search for `stargaze.toml` in:
    /// 1. Current directory
    /// 2. `backend/` directory
    /// 3. Parent directory
    ///
    /// Returns `Ok(None)` when no file exists.
    pub fn from_default_location() -> Result<Option<Self>, ConfigError> {
        let search_paths = [
            PathBuf::from("stargaze.toml"),
            PathBuf::from("backend/stargaze.toml"),
            PathBuf::from("../stargaze.toml"),
        ];

        for path in search_paths {
            if path.exists() {
                return Self::from_file(&path).map(Some);
            }
        }

        Ok(None)
    }

    /// File from `STARGAZE_CONFIG` or the default search, then env overrides.
    pub fn load() -> Result<Self, ConfigError> {
        let base = match env::var("STARGAZE_CONFIG") {
            Ok(path) => Self::from_file(path)?,
            Err(_) => Self::from_default_location()?.unwrap_or_default(),
        };
        base.with_env_overrides()
    }

    /// Apply `HOST`, `PORT`, `ALMANAC_BASE_URL` and `ALMANAC_TIMEOUT_SECS`.
    pub fn with_env_overrides(mut self) -> Result<Self, ConfigError> {
        if let Ok(host) = env::var("HOST") {
            self.server.host = host;
        }
        if let Ok(port) = env::var("PORT") {
            self.server.port = port
                .parse()
                .map_err(|_| ConfigError::InvalidEnv { key: "PORT".into(), value: port })?;
        }
        if let Ok(url) = env::var("ALMANAC_BASE_URL") {
            self.almanac.base_url = url;
        }
        if let Ok(timeout) = env::var("ALMANAC_TIMEOUT_SECS") {
            self.almanac.timeout_secs = timeout.parse().map_err(|_| ConfigError::InvalidEnv {
                key: "ALMANAC_TIMEOUT_SECS".into(),
                value: timeout,
            })?;
        }
        self.validate()?;
        Ok(self)
    }

    /// Reject settings the scanners cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let step = self.scan.step_minutes.value();
        if !step.is_finite() || step < 1.0 {
            return Err(ConfigError::Invalid(format!(
                "scan.step_minutes must be at least 1, got {}",
                step
            )));
        }
        let tolerance = self.scan.moon_phase_tolerance_deg.value();
        if !(0.0..=45.0).contains(&tolerance) {
            return Err(ConfigError::Invalid(format!(
                "scan.moon_phase_tolerance_deg must be within [0, 45], got {}",
                tolerance
            )));
        }
        if crate::models::Observer::new(self.defaults.latitude, self.defaults.longitude).is_err() {
            return Err(ConfigError::Invalid(
                "defaults.latitude/longitude are out of range".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = ServiceConfig::default();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.almanac.base_url, "https://aa.usno.navy.mil");
        assert_eq!(config.scan.min_altitude_deg.value(), 20.0);
        assert_eq!(config.scan.sun_altitude_limit_deg.value(), -12.0);
        assert_eq!(config.scan.step_minutes.value(), 5.0);
        assert_eq!(config.scan.max_days, 60);
        assert_eq!(config.defaults.latitude, 38.95);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[scan]\nmin_altitude_deg = 15.0\n\n[server]\nport = 9000").unwrap();

        let config = ServiceConfig::from_file(file.path()).unwrap();
        assert_eq!(config.scan.min_altitude_deg.value(), 15.0);
        assert_eq!(config.scan.step_minutes.value(), 5.0);
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "0.0.0.0");
    }

    #[test]
    fn test_invalid_toml() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[scan\nmin_altitude_deg = ").unwrap();

        let err = ServiceConfig::from_file(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_missing_file() {
        let err = ServiceConfig::from_file("/nonexistent/stargaze.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_zero_step_rejected() {
        let mut config = ServiceConfig::default();
        config.scan.step_minutes = qtty::Minute::new(0.0);
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }
}
