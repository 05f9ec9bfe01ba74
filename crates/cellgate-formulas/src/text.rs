//! Text formulas
//!
//! One entry function per formula flavor. Each applies its template,
//! hands the templated prompt to the gateway, and returns the trimmed
//! completion. Model routing is by name: passing a chat-only model to
//! any of these transparently upgrades the request to the chat
//! endpoint.

use cellgate_gateway::{Gateway, GenerationOptions, LogicalRequest, Protocol, Result};

use crate::template;

/// Default completion model for text formulas
pub const DEFAULT_COMPLETION_MODEL: &str = "text-davinci-003";

/// Default token budget; cell values are short
pub const DEFAULT_MAX_TOKENS: u32 = 64;

/// Default sampling temperature; deterministic output recalculates
/// stably when the sheet does
pub const DEFAULT_TEMPERATURE: f64 = 0.0;

/// Options shared by the text formulas
///
/// Replaces the positional-optional parameters of the original host
/// formulas with one explicit struct; the defaults below apply when a
/// field is left at its [`Default`] value.
#[derive(Debug, Clone)]
pub struct TextFormulaOptions {
    /// Model identifier; defaults to [`DEFAULT_COMPLETION_MODEL`]
    pub model: String,
    /// System instruction, applied only when the model routes to the
    /// chat protocol
    pub system: Option<String>,
    /// Maximum tokens to generate; defaults to [`DEFAULT_MAX_TOKENS`]
    pub max_tokens: Option<u32>,
    /// Sampling temperature; defaults to [`DEFAULT_TEMPERATURE`]
    pub temperature: Option<f64>,
    /// Stop sequences; defaults to none
    pub stop: Option<Vec<String>>,
}

impl Default for TextFormulaOptions {
    fn default() -> Self {
        Self {
            model: DEFAULT_COMPLETION_MODEL.to_owned(),
            system: None,
            max_tokens: Some(DEFAULT_MAX_TOKENS),
            temperature: Some(DEFAULT_TEMPERATURE),
            stop: None,
        }
    }
}

impl TextFormulaOptions {
    /// Defaults tuned for single-line answers: generation stops at the
    /// first newline
    pub fn single_line() -> Self {
        Self {
            stop: Some(vec!["\n".to_owned()]),
            ..Self::default()
        }
    }
}

/// Forward the text as-is (identity template)
pub async fn prompt(gateway: &Gateway, text: &str, options: &TextFormulaOptions) -> Result<String> {
    run(gateway, options, text, text.to_owned()).await
}

/// Answer a question using the fixed Q/A preamble
pub async fn ask(gateway: &Gateway, text: &str, options: &TextFormulaOptions) -> Result<String> {
    run(gateway, options, text, template::question(text)).await
}

/// Summarize the text
pub async fn summarize(gateway: &Gateway, text: &str, options: &TextFormulaOptions) -> Result<String> {
    run(gateway, options, text, template::summarize(text)).await
}

/// Extract keywords from the text
pub async fn keywords(gateway: &Gateway, text: &str, options: &TextFormulaOptions) -> Result<String> {
    run(gateway, options, text, template::keywords(text)).await
}

/// Classify the text's sentiment as positive, neutral, or negative
pub async fn sentiment(gateway: &Gateway, text: &str, options: &TextFormulaOptions) -> Result<String> {
    run(gateway, options, text, template::sentiment(text)).await
}

/// Produce a css hex color matching the described mood
pub async fn mood_color(gateway: &Gateway, text: &str, options: &TextFormulaOptions) -> Result<String> {
    run(gateway, options, text, template::mood_color(text)).await
}

/// Complete the text steered by caller-supplied example pairs
///
/// Validation of the example pairs happens before the empty-input
/// short-circuit and before any network call.
pub async fn with_examples(
    gateway: &Gateway,
    example_prompts: &[String],
    example_responses: &[String],
    text: &str,
    options: &TextFormulaOptions,
) -> Result<String> {
    let templated = template::few_shot(example_prompts, example_responses, text)?;
    run(gateway, options, text, templated).await
}

/// Shared dispatch: short-circuit empty input, then hand the templated
/// prompt to the gateway
async fn run(
    gateway: &Gateway,
    options: &TextFormulaOptions,
    text: &str,
    primary_text: String,
) -> Result<String> {
    if text.is_empty() {
        return Ok(String::new());
    }

    tracing::debug!(model = %options.model, "running text formula");

    let request = LogicalRequest {
        protocol_hint: Protocol::LegacyCompletion,
        model: options.model.clone(),
        primary_text,
        system_text: options.system.clone(),
        style: None,
        size: None,
        options: GenerationOptions {
            max_tokens: options.max_tokens,
            temperature: options.temperature,
            stop: options.stop.clone(),
        },
    };

    gateway.complete(&request).await
}
