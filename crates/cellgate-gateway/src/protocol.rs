//! `OpenAI` wire format types for the three fixed endpoints
//!
//! Only the fields this gateway reads are modeled on the response side;
//! everything else in an upstream reply is consumed once and discarded.

use serde::{Deserialize, Serialize};

use crate::types::{ChatMessage, GenerationOptions};

/// Endpoint path for the legacy completions protocol
pub const COMPLETIONS_PATH: &str = "/completions";
/// Endpoint path for the chat completions protocol
pub const CHAT_COMPLETIONS_PATH: &str = "/chat/completions";
/// Endpoint path for the image generation protocol
pub const IMAGES_PATH: &str = "/images/generations";

/// Encoding requested for generated images
pub const IMAGE_RESPONSE_FORMAT: &str = "b64_json";

// -- Request types --

/// Legacy completions request (`POST /completions`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionRequest {
    /// Model identifier
    pub model: String,
    /// Prompt text
    pub prompt: String,
    /// Generation parameters, flattened into the body
    #[serde(flatten)]
    pub options: GenerationOptions,
}

/// Chat completions request (`POST /chat/completions`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    /// Model identifier
    pub model: String,
    /// Conversation messages
    pub messages: Vec<ChatMessage>,
    /// Generation parameters, flattened into the body
    #[serde(flatten)]
    pub options: GenerationOptions,
}

/// Image generation request (`POST /images/generations`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageRequest {
    /// Text description of the desired image
    pub prompt: String,
    /// Size of the generated image (e.g. "512x512")
    pub size: String,
    /// Response encoding, always [`IMAGE_RESPONSE_FORMAT`]
    pub response_format: String,
}

/// A request body paired with the endpoint it is destined for
///
/// The protocol decision is resolved once per call and carried here as
/// an explicit tag, so the transport stays shape-agnostic.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum WireRequest {
    /// Legacy completion body
    Completion(CompletionRequest),
    /// Chat completion body
    Chat(ChatRequest),
    /// Image generation body
    Image(ImageRequest),
}

impl WireRequest {
    /// Endpoint path this body is posted to, relative to the base URL
    pub const fn path(&self) -> &'static str {
        match self {
            Self::Completion(_) => COMPLETIONS_PATH,
            Self::Chat(_) => CHAT_COMPLETIONS_PATH,
            Self::Image(_) => IMAGES_PATH,
        }
    }
}

// -- Response types --

/// Legacy completions response
#[derive(Debug, Clone, Deserialize)]
pub struct CompletionResponse {
    /// Generated choices
    pub choices: Vec<CompletionChoice>,
}

/// Choice within a legacy completions response
#[derive(Debug, Clone, Deserialize)]
pub struct CompletionChoice {
    /// Generated text
    pub text: String,
}

/// Chat completions response
#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    /// Generated choices
    pub choices: Vec<ChatChoice>,
}

/// Choice within a chat completions response
#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoice {
    /// Generated message
    pub message: ChatChoiceMessage,
}

/// Message within a chat completions choice
#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoiceMessage {
    /// Text content; absent when the upstream reply drifts from the
    /// documented contract
    #[serde(default)]
    pub content: Option<String>,
}

/// Image generation response
#[derive(Debug, Clone, Deserialize)]
pub struct ImageResponse {
    /// Generated images
    pub data: Vec<ImageData>,
}

/// Single image entry in an image generation response
#[derive(Debug, Clone, Deserialize)]
pub struct ImageData {
    /// Base64-encoded PNG payload
    #[serde(default)]
    pub b64_json: Option<String>,
}

// -- Error response --

/// Upstream error body
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorResponse {
    /// Error details
    pub error: ErrorDetail,
}

/// Upstream error detail
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorDetail {
    /// Error message
    pub message: String,
    /// Error type (e.g. `insufficient_quota`)
    #[serde(rename = "type")]
    pub error_type: String,
    /// Parameter that caused the error
    #[serde(default)]
    pub param: Option<String>,
    /// Error code
    #[serde(default)]
    pub code: Option<String>,
}
