//! Spreadsheet-callable formulas over the language-model gateway
//!
//! Each formula wraps the user's cell text in a fixed prompt template,
//! forwards it through [`cellgate_gateway::Gateway`], and returns the
//! unwrapped result as a single string (or image data URI). Formulas
//! are stateless: one call, one upstream request, nothing retained.
//!
//! Every formula short-circuits empty input to an empty result without
//! a network call, so blank cells never spend quota.

#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

pub mod image;
pub mod template;
pub mod text;

pub use image::{ImageFormulaOptions, image};
pub use text::{
    TextFormulaOptions, ask, keywords, mood_color, prompt, sentiment, summarize, with_examples,
};
