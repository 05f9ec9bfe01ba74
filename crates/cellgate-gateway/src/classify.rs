//! Model name classification
//!
//! Decides which wire protocol a model identifier is served by.

use crate::types::Protocol;

/// Model name substrings that route to the chat completions endpoint
///
/// Substring matching (rather than an exhaustive enum) means dated
/// snapshot suffixes like `gpt-4-0314` or `gpt-4-32k` route correctly
/// without updates here. The accepted tradeoff is a false positive if
/// an unrelated model name happens to contain one of these markers.
const CHAT_MODEL_MARKERS: [&str; 2] = ["gpt-3.5-turbo", "gpt-4"];

/// Classify a model identifier into the protocol that serves it
///
/// Case-sensitive substring match against [`CHAT_MODEL_MARKERS`];
/// anything else falls back to the legacy completions endpoint. Pure
/// and infallible. Never returns [`Protocol::ImageGeneration`], which
/// is selected explicitly by the caller rather than inferred.
pub fn classify(model: &str) -> Protocol {
    if CHAT_MODEL_MARKERS.iter().any(|marker| model.contains(marker)) {
        Protocol::ChatCompletion
    } else {
        Protocol::LegacyCompletion
    }
}
