//! Gateway facade
//!
//! Composes classification, request building, transport, and
//! extraction into a single call.

use std::sync::Arc;

use serde_json::Value;

use crate::build::build;
use crate::classify::classify;
use crate::config::TransportConfig;
use crate::error::Result;
use crate::extract::extract;
use crate::transport::{HttpTransport, Transport};
use crate::types::{LogicalRequest, Protocol};

/// Stateless facade over the upstream API family
///
/// Holds nothing but the transport; calls are independent and may be
/// issued concurrently without coordination.
pub struct Gateway {
    transport: Arc<dyn Transport>,
}

impl Gateway {
    /// Create a gateway backed by the HTTP transport
    pub fn new(config: TransportConfig) -> Self {
        Self {
            transport: Arc::new(HttpTransport::new(config)),
        }
    }

    /// Create a gateway with an injected transport
    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Run one generation request end to end
    ///
    /// Empty input returns an empty string immediately without a
    /// network call; an empty cell yields an empty cell and spends no
    /// quota. Otherwise: validate options, classify the model, build
    /// the wire body, send, extract.
    ///
    /// The caller's protocol hint only selects image generation; text
    /// requests are routed by the model name alone, so a chat-only
    /// model passed to a legacy-flavor formula is transparently
    /// upgraded to the chat endpoint.
    pub async fn complete(&self, request: &LogicalRequest) -> Result<String> {
        if request.primary_text.is_empty() {
            return Ok(String::new());
        }

        request.options.validate()?;

        let protocol = match request.protocol_hint {
            Protocol::ImageGeneration => Protocol::ImageGeneration,
            Protocol::LegacyCompletion | Protocol::ChatCompletion => classify(&request.model),
        };

        let wire = build(request, protocol);

        tracing::debug!(model = %request.model, ?protocol, "dispatching upstream request");

        let raw: Value = self.transport.send(&wire).await?;

        extract(&raw, protocol)
    }
}
