use serde::{Deserialize, Serialize};

/// Upstream wire shape a request is adapted to
///
/// Exactly one protocol applies per request. Text requests are resolved
/// by [`crate::classify::classify`] from the model name; image requests
/// are selected explicitly by the caller, never inferred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Protocol {
    /// `POST /completions` with a plain `prompt` string
    LegacyCompletion,
    /// `POST /chat/completions` with a message list
    ChatCompletion,
    /// `POST /images/generations`
    ImageGeneration,
}

/// Role of a message participant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// System instruction
    System,
    /// User message
    User,
}

/// Message in a chat completion request
///
/// The system message, when present, precedes the user message;
/// messages with the same role keep their insertion order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Role of the message author
    pub role: Role,
    /// Message content
    pub content: String,
}

/// Parameters controlling text generation
///
/// Absent fields are omitted from wire bodies so the upstream defaults
/// apply; they are never serialized as nulls.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerationOptions {
    /// Maximum tokens to generate
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    /// Sampling temperature (0.0 to 1.0)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    /// Stop sequences (at most 4)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stop: Option<Vec<String>>,
}

/// Maximum number of stop sequences the upstream accepts
const MAX_STOP_SEQUENCES: usize = 4;

impl GenerationOptions {
    /// Check the option values against the upstream's documented domains
    ///
    /// # Errors
    ///
    /// Returns [`crate::GatewayError::ValidationFailure`] if the
    /// temperature is outside `[0.0, 1.0]` or more than four stop
    /// sequences are supplied.
    pub fn validate(&self) -> crate::Result<()> {
        if let Some(temperature) = self.temperature
            && !(0.0..=1.0).contains(&temperature)
        {
            return Err(crate::GatewayError::ValidationFailure(format!(
                "temperature must be between 0.0 and 1.0, got {temperature}"
            )));
        }

        if let Some(stop) = &self.stop
            && stop.len() > MAX_STOP_SEQUENCES
        {
            return Err(crate::GatewayError::ValidationFailure(format!(
                "at most {MAX_STOP_SEQUENCES} stop sequences are supported, got {}",
                stop.len()
            )));
        }

        Ok(())
    }
}

/// Protocol-agnostic description of a generation request
///
/// Built once per formula call and discarded after the reply is
/// unwrapped; nothing is cached across calls.
#[derive(Debug, Clone)]
pub struct LogicalRequest {
    /// Caller's protocol intent
    ///
    /// Only [`Protocol::ImageGeneration`] is honored as-is; text
    /// requests are always re-classified from the model name.
    pub protocol_hint: Protocol,
    /// Opaque upstream model identifier
    ///
    /// Any string is accepted; classification is by substring pattern,
    /// not a fixed enum. Unused for image generation.
    pub model: String,
    /// The user's text (or templated prompt)
    ///
    /// Empty input short-circuits to an empty result without touching
    /// the network.
    pub primary_text: String,
    /// System instruction, prepended as a system message on the chat
    /// protocol and ignored elsewhere
    pub system_text: Option<String>,
    /// Image style name, looked up in [`crate::style`] and appended to
    /// the image prompt
    pub style: Option<String>,
    /// Image size (e.g. "512x512")
    pub size: Option<String>,
    /// Generation parameters
    pub options: GenerationOptions,
}

impl LogicalRequest {
    /// Create a plain text request for the given model
    pub fn text(model: impl Into<String>, primary_text: impl Into<String>) -> Self {
        Self {
            protocol_hint: Protocol::LegacyCompletion,
            model: model.into(),
            primary_text: primary_text.into(),
            system_text: None,
            style: None,
            size: None,
            options: GenerationOptions::default(),
        }
    }

    /// Create an image generation request
    pub fn image(primary_text: impl Into<String>) -> Self {
        Self {
            protocol_hint: Protocol::ImageGeneration,
            model: String::new(),
            primary_text: primary_text.into(),
            system_text: None,
            style: None,
            size: None,
            options: GenerationOptions::default(),
        }
    }
}
