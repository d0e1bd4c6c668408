//! Data Transfer Objects for the HTTP API.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::error::AppError;
use crate::config::ServiceConfig;
use crate::models::{Event, Observer};

/// Which event list `/api/astro` produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AstroMode {
    Tonight,
    Future,
}

impl AstroMode {
    /// Anything other than `tonight` selects the future branch.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "tonight" => AstroMode::Tonight,
            "future" => AstroMode::Future,
            other => {
                tracing::warn!("Unknown mode '{}', using future", other);
                AstroMode::Future
            }
        }
    }
}

/// Raw query string of `GET /api/astro`.
///
/// Values are kept as strings so that malformed numbers become a 400 with a
/// readable message instead of axum's default rejection text.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AstroQuery {
    pub lat: Option<String>,
    pub lon: Option<String>,
    pub mode: Option<String>,
    pub days: Option<String>,
    pub date: Option<String>,
}

/// Validated `/api/astro` request.
#[derive(Debug, Clone, PartialEq)]
pub struct AstroRequest {
    pub observer: Observer,
    pub mode: AstroMode,
    /// Number of daily samples for the future branch, already capped.
    pub days: u32,
    /// Overrides today's date when present.
    pub date: Option<NaiveDate>,
}

impl AstroQuery {
    /// Apply defaults from `config` and validate every field.
    pub fn resolve(&self, config: &ServiceConfig) -> Result<AstroRequest, AppError> {
        let lat = parse_number("lat", self.lat.as_deref(), config.defaults.latitude)?;
        let lon = parse_number("lon", self.lon.as_deref(), config.defaults.longitude)?;
        let observer =
            Observer::new(lat, lon).map_err(|e| AppError::BadRequest(e.to_string()))?;

        let mode = self
            .mode
            .as_deref()
            .map(AstroMode::parse)
            .unwrap_or(AstroMode::Tonight);

        let default_days = match mode {
            AstroMode::Future => config.scan.max_days,
            AstroMode::Tonight => 2,
        };
        let days = match self.days.as_deref() {
            Some(raw) => raw.trim().parse::<u32>().map_err(|_| {
                AppError::BadRequest(format!("invalid days: '{}'", raw))
            })?,
            None => default_days,
        }
        .min(config.scan.max_days);

        let date = self
            .date
            .as_deref()
            .map(|raw| {
                NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|_| {
                    AppError::BadRequest(format!("invalid date: '{}' (expected YYYY-MM-DD)", raw))
                })
            })
            .transpose()?;

        Ok(AstroRequest { observer, mode, days, date })
    }
}

fn parse_number(name: &str, raw: Option<&str>, default: f64) -> Result<f64, AppError> {
    match raw {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| AppError::BadRequest(format!("invalid {}: '{}'", name, raw))),
    }
}

/// Response body of `GET /api/astro`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AstroResponse {
    pub events: Vec<Event>,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(pairs: &[(&str, &str)]) -> AstroQuery {
        let mut q = AstroQuery::default();
        for (k, v) in pairs {
            let v = Some(v.to_string());
            match *k {
                "lat" => q.lat = v,
                "lon" => q.lon = v,
                "mode" => q.mode = v,
                "days" => q.days = v,
                "date" => q.date = v,
                _ => unreachable!(),
            }
        }
        q
    }

    #[test]
    fn test_defaults() {
        let config = ServiceConfig::default();
        let req = query(&[]).resolve(&config).unwrap();
        assert_eq!(req.observer.latitude().value(), 38.95);
        assert_eq!(req.observer.longitude().value(), -92.33);
        assert_eq!(req.mode, AstroMode::Tonight);
        assert_eq!(req.days, 2);
        assert_eq!(req.date, None);
    }

    #[test]
    fn test_future_days_default_and_cap() {
        let config = ServiceConfig::default();
        let req = query(&[("mode", "future")]).resolve(&config).unwrap();
        assert_eq!(req.days, 60);

        let req = query(&[("mode", "future"), ("days", "365")]).resolve(&config).unwrap();
        assert_eq!(req.days, 60);

        let req = query(&[("mode", "future"), ("days", "7")]).resolve(&config).unwrap();
        assert_eq!(req.days, 7);
    }

    #[test]
    fn test_unknown_mode_is_future() {
        let config = ServiceConfig::default();
        let req = query(&[("mode", "weekly")]).resolve(&config).unwrap();
        assert_eq!(req.mode, AstroMode::Future);
    }

    #[test]
    fn test_invalid_values() {
        let config = ServiceConfig::default();
        for pairs in [
            vec![("lat", "north")],
            vec![("lat", "91")],
            vec![("lon", "-181")],
            vec![("lat", "NaN")],
            vec![("days", "-3")],
            vec![("date", "2026/01/16")],
        ] {
            let err = query(&pairs).resolve(&config).unwrap_err();
            assert!(matches!(err, AppError::BadRequest(_)), "{:?}", pairs);
        }
    }

    #[test]
    fn test_date_override() {
        let config = ServiceConfig::default();
        let req = query(&[("date", "2026-01-15")]).resolve(&config).unwrap();
        assert_eq!(req.date, NaiveDate::from_ymd_opt(2026, 1, 15));
    }
}
