//! HTTP client for the US Naval Observatory one-day almanac.

use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;

use super::error::{AlmanacError, AlmanacResult};
use super::payload::AlmanacDay;
use super::AlmanacSource;
use crate::models::Observer;

pub const DEFAULT_BASE_URL: &str = "https://aa.usno.navy.mil";

/// `reqwest` backed [`AlmanacSource`].
#[derive(Debug, Clone)]
pub struct UsnoClient {
    base_url: String,
    http: reqwest::Client,
}

impl UsnoClient {
    /// Build a client against `base_url` with a per-request timeout.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> AlmanacResult<Self> {
        let http = reqwest::Client::builder()
            .user_agent(format!("stargaze-backend/{}", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .map_err(|e| AlmanacError::Setup(e.to_string()))?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Request URL for one day at the observer's coordinates.
    pub fn one_day_url(&self, observer: &Observer, date: NaiveDate) -> String {
        format!(
            "{}/api/rstt/oneday?date={}&coords={},{}",
            self.base_url,
            date.format("%Y-%m-%d"),
            observer.latitude().value(),
            observer.longitude().value()
        )
    }
}

#[async_trait]
impl AlmanacSource for UsnoClient {
    async fn one_day(&self, observer: &Observer, date: NaiveDate) -> AlmanacResult<AlmanacDay> {
        let url = self.one_day_url(observer, date);
        log::debug!("Fetching almanac: {}", url);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| AlmanacError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            log::warn!("Almanac request for {} failed with status {}", date, status);
            return Err(AlmanacError::Status(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| AlmanacError::Network(e.to_string()))?;

        AlmanacDay::from_json_str(date, &body)
    }
}
