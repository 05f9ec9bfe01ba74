//! Response extraction
//!
//! Reads the one field each protocol's reply carries and fails
//! distinctly when the shape is unexpected. An empty result can only
//! come from the empty-input short-circuit in the facade, never from a
//! malformed upstream reply.

use serde::Deserialize;
use serde_json::Value;

use crate::error::{GatewayError, Result};
use crate::protocol::{ChatResponse, CompletionResponse, ImageResponse};
use crate::types::Protocol;

/// Extract the generated text (or image data URI) from a raw reply
pub fn extract(raw: &Value, protocol: Protocol) -> Result<String> {
    match protocol {
        Protocol::LegacyCompletion => {
            let response: CompletionResponse = parse(raw)?;
            let choice = response.choices.first().ok_or_else(|| {
                GatewayError::MalformedResponse("completion response contained no choices".to_owned())
            })?;
            Ok(choice.text.trim().to_owned())
        }
        Protocol::ChatCompletion => {
            let response: ChatResponse = parse(raw)?;
            let choice = response.choices.first().ok_or_else(|| {
                GatewayError::MalformedResponse("chat response contained no choices".to_owned())
            })?;
            let content = choice.message.content.as_ref().ok_or_else(|| {
                GatewayError::MalformedResponse("chat choice carried no message content".to_owned())
            })?;
            Ok(content.trim().to_owned())
        }
        Protocol::ImageGeneration => {
            let response: ImageResponse = parse(raw)?;
            let image = response.data.first().ok_or_else(|| {
                GatewayError::MalformedResponse("image response contained no data".to_owned())
            })?;
            let encoded = image.b64_json.as_ref().ok_or_else(|| {
                GatewayError::MalformedResponse("image entry carried no b64_json payload".to_owned())
            })?;
            Ok(format!("data:image/png;base64,{encoded}"))
        }
    }
}

/// Deserialize the raw reply into the protocol's typed shape
fn parse<'de, T: Deserialize<'de>>(raw: &'de Value) -> Result<T> {
    T::deserialize(raw)
        .map_err(|e| GatewayError::MalformedResponse(format!("failed to parse response: {e}")))
}
