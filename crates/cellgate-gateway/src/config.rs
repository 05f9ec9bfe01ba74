use secrecy::SecretString;
use serde::Deserialize;
use url::Url;

/// Default request timeout in seconds
fn default_timeout_secs() -> u64 {
    30
}

/// Configuration for the HTTP transport
///
/// Carries only what the transport needs to reach the upstream; where
/// the API key value comes from (env, keystore, host injection) is the
/// embedder's concern.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TransportConfig {
    /// API key attached to every request as a bearer token
    pub api_key: SecretString,
    /// Base URL override; defaults to the canonical `OpenAI` endpoint
    #[serde(default)]
    pub base_url: Option<Url>,
    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl TransportConfig {
    /// Create a config with the default base URL and timeout
    pub fn new(api_key: SecretString) -> Self {
        Self {
            api_key,
            base_url: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}
