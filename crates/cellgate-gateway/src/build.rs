//! Request building
//!
//! Adapts a [`LogicalRequest`] to the protocol-specific wire body.

use crate::protocol::{
    ChatRequest, CompletionRequest, IMAGE_RESPONSE_FORMAT, ImageRequest, WireRequest,
};
use crate::style::style_phrase;
use crate::types::{ChatMessage, LogicalRequest, Protocol, Role};

/// Image size used when the caller doesn't supply one
pub const DEFAULT_IMAGE_SIZE: &str = "512x512";

/// Build the wire body for the given protocol
///
/// `protocol` is the *classified* protocol, never the caller's hint: a
/// request whose hint says legacy completion but whose model name
/// classifies as chat is transparently upgraded to the chat body. Pure;
/// nothing here touches the network.
pub fn build(request: &LogicalRequest, protocol: Protocol) -> WireRequest {
    match protocol {
        Protocol::LegacyCompletion => WireRequest::Completion(CompletionRequest {
            model: request.model.clone(),
            prompt: request.primary_text.clone(),
            options: request.options.clone(),
        }),
        Protocol::ChatCompletion => {
            let mut messages = Vec::with_capacity(2);
            if let Some(system) = &request.system_text {
                messages.push(ChatMessage {
                    role: Role::System,
                    content: system.clone(),
                });
            }
            messages.push(ChatMessage {
                role: Role::User,
                content: request.primary_text.clone(),
            });

            WireRequest::Chat(ChatRequest {
                model: request.model.clone(),
                messages,
                options: request.options.clone(),
            })
        }
        Protocol::ImageGeneration => {
            let prompt = request.style.as_ref().map_or_else(
                || request.primary_text.clone(),
                |style| format!("{} {}", request.primary_text, style_phrase(style)),
            );

            WireRequest::Image(ImageRequest {
                prompt,
                size: request
                    .size
                    .clone()
                    .unwrap_or_else(|| DEFAULT_IMAGE_SIZE.to_owned()),
                response_format: IMAGE_RESPONSE_FORMAT.to_owned(),
            })
        }
    }
}
