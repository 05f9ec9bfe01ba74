//! Language-model gateway for spreadsheet formulas
//!
//! Adapts a protocol-agnostic [`LogicalRequest`] to one of the fixed
//! `OpenAI` wire shapes (legacy completions, chat completions, image
//! generation), sends it through an injectable [`Transport`], and
//! extracts the generated text or image payload from the reply.
//!
//! The gateway holds no state between calls; every request is
//! classified, built, sent, and unwrapped independently.

#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

pub mod build;
pub mod classify;
pub mod config;
pub mod error;
pub mod extract;
pub mod gateway;
pub mod protocol;
pub mod style;
pub mod transport;
pub mod types;

pub use build::build;
pub use classify::classify;
pub use config::TransportConfig;
pub use error::{GatewayError, Result};
pub use extract::extract;
pub use gateway::Gateway;
pub use protocol::WireRequest;
pub use transport::{HttpTransport, Transport};
pub use types::{ChatMessage, GenerationOptions, LogicalRequest, Protocol, Role};
