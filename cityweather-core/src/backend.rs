use async_trait::async_trait;
use reqwest::Client;
use std::fmt::Debug;

use crate::{Config, FetchError, Query, WeatherReport};

/// Seam between the search session and whatever serves weather data.
/// Production uses [`HttpBackend`]; tests script their own.
#[async_trait]
pub trait WeatherBackend: Send + Sync + Debug {
    async fn fetch(&self, query: &Query) -> Result<WeatherReport, FetchError>;
}

/// The real backend: one GET against the configured read endpoint, with
/// the query carried in a single percent-encoded `city` parameter.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    url: String,
    http: Client,
}

impl HttpBackend {
    pub fn new(config: &Config) -> Self {
        Self::with_url(config.weather_url())
    }

    /// Point the backend at an explicit URL. Tests aim this at a mock
    /// server instead of the configured endpoint.
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            http: Client::new(),
        }
    }
}

#[async_trait]
impl WeatherBackend for HttpBackend {
    async fn fetch(&self, query: &Query) -> Result<WeatherReport, FetchError> {
        let res = self
            .http
            .get(&self.url)
            .query(&[("city", query.city_param())])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            // A failing status can still carry a provider-written error
            // message in the report shape; that text is surfaced verbatim.
            if let Ok(report) = serde_json::from_str::<WeatherReport>(&body) {
                if report.error_message().is_some() {
                    return Ok(report);
                }
            }

            tracing::warn!(%status, "weather backend returned an error status");
            return Err(FetchError::Status {
                status,
                body: truncate_body(&body),
            });
        }

        let report: WeatherReport = serde_json::from_str(&body)?;
        tracing::debug!(city = %query.city_param(), "fetched weather report");

        Ok(report)
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX {
        format!("{}...", &body[..MAX])
    } else {
        body.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_leaves_short_bodies_alone() {
        assert_eq!(truncate_body("short"), "short");
    }

    #[test]
    fn truncate_caps_long_bodies() {
        let long = "x".repeat(500);
        let truncated = truncate_body(&long);

        assert_eq!(truncated.len(), 203);
        assert!(truncated.ends_with("..."));
    }
}
