//! Transport adapter
//!
//! A prepared wire request goes out as a single HTTP POST; the raw JSON
//! reply comes back for extraction. The trait is the seam where tests
//! and embedding hosts substitute the network.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;

use crate::config::TransportConfig;
use crate::error::{GatewayError, Result};
use crate::protocol::WireRequest;

/// Default `OpenAI` API base URL
const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Sends a prepared request and returns the raw JSON reply
///
/// One call, one request: no retries, no streaming, no cancellation.
/// Implementations must be safe to share across concurrent calls.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send the request and return the reply body as raw JSON
    async fn send(&self, request: &WireRequest) -> Result<Value>;
}

/// Transport backed by reqwest
pub struct HttpTransport {
    client: Client,
    base_url: String,
    api_key: SecretString,
}

impl HttpTransport {
    /// Create a transport from configuration
    ///
    /// # Panics
    ///
    /// Panics if the TLS backend cannot be initialized, which only
    /// happens on unsupported platforms.
    pub fn new(config: TransportConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .expect("failed to build HTTP client");

        let base_url = config
            .base_url
            .map_or_else(|| DEFAULT_BASE_URL.to_owned(), |url| url.as_str().to_owned());

        Self {
            client,
            base_url,
            api_key: config.api_key,
        }
    }

    /// Join the endpoint path onto the base URL
    fn endpoint(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        format!("{base}{path}")
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: &WireRequest) -> Result<Value> {
        let url = self.endpoint(request.path());

        let response = self
            .client
            .post(&url)
            .bearer_auth(self.api_key.expose_secret())
            .json(request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(endpoint = %url, error = %e, "upstream request failed");
                GatewayError::Transport(e.to_string())
            })?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(endpoint = %url, status = %status, "upstream returned error");
            return Err(GatewayError::from_upstream(status, &body));
        }

        response.json().await.map_err(|e| {
            GatewayError::MalformedResponse(format!("failed to read response body: {e}"))
        })
    }
}
