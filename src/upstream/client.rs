//! HTTP client for the upstream responder service

use reqwest::Client;
use std::time::Duration;
use tracing::{debug, warn};

use crate::config::UpstreamConfig;
use crate::error::{AppError, Result};

/// Client for the responder service the gateway relays to
pub struct UpstreamClient {
    client: Client,
    base_url: String,
    data_path: String,
    health_path: String,
}

impl UpstreamClient {
    /// Create a new upstream client from configuration
    pub fn new(config: &UpstreamConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            data_path: config.data_path.clone(),
            health_path: config.health_path.clone(),
        })
    }

    fn data_url(&self) -> String {
        format!("{}{}", self.base_url, self.data_path)
    }

    fn health_url(&self) -> String {
        format!("{}{}", self.base_url, self.health_path)
    }

    /// Fetch the responder's data payload, returning the body as text
    pub async fn fetch_data(&self) -> Result<String> {
        let url = self.data_url();
        debug!(url = %url, "Requesting upstream data");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| classify_send_error(e, &url))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(url = %url, status = %status, "Upstream returned error status");
            return Err(AppError::UpstreamStatus {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        debug!(url = %url, bytes = body.len(), "Upstream call succeeded");
        Ok(body)
    }

    /// Probe the responder's health endpoint
    pub async fn health_check(&self) -> bool {
        let url = self.health_url();

        match self.client.get(&url).send().await {
            Ok(response) if response.status().is_success() => {
                debug!(url = %url, "Upstream health check passed");
                true
            }
            Ok(response) => {
                debug!(url = %url, status = %response.status(), "Upstream health check failed");
                false
            }
            Err(e) => {
                debug!(url = %url, error = %e, "Upstream health check failed");
                false
            }
        }
    }
}

/// Map a reqwest send error onto the gateway's upstream error taxonomy
fn classify_send_error(error: reqwest::Error, url: &str) -> AppError {
    if error.is_timeout() {
        AppError::UpstreamTimeout(url.to_string())
    } else if error.is_connect() {
        AppError::UpstreamUnreachable(format!("{}: {}", url, error))
    } else {
        AppError::HttpClient(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_trimmed_on_join() {
        let config = UpstreamConfig {
            base_url: "http://app2:5001/".to_string(),
            ..UpstreamConfig::default()
        };
        let client = UpstreamClient::new(&config).unwrap();
        assert_eq!(client.data_url(), "http://app2:5001/data");
        assert_eq!(client.health_url(), "http://app2:5001/health");
    }
}
