use crate::config::ClientConfig;
use crate::domain::ports::Transport;
use crate::utils::error::{MarsPhotosError, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

const USER_AGENT: &str = concat!("mars-photos/", env!("CARGO_PKG_VERSION"));

/// [`Transport`] backed by a reqwest client. One request per call, no retries.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| {
                MarsPhotosError::configuration(format!("failed to build HTTP client: {}", e))
            })?;

        Ok(Self { client })
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn get(&self, url: &str) -> Result<serde_json::Value> {
        let response = self.client.get(url).send().await.map_err(|e| {
            // reqwest errors embed the URL, which carries the credential
            let e = e.without_url();
            if e.is_timeout() {
                MarsPhotosError::network(format!("request timeout: {}", e))
            } else if e.is_connect() {
                MarsPhotosError::network(format!("connection failed: {}", e))
            } else {
                MarsPhotosError::network(format!("request failed: {}", e))
            }
        })?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if !status.is_success() {
            return Err(MarsPhotosError::Api {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        let body = response.text().await.map_err(|e| {
            MarsPhotosError::network(format!("failed to read response body: {}", e.without_url()))
        })?;

        serde_json::from_str(&body).map_err(MarsPhotosError::from)
    }
}
