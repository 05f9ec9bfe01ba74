use http::StatusCode;
use thiserror::Error;

use crate::protocol::ErrorResponse;

pub type Result<T> = std::result::Result<T, GatewayError>;

/// Upstream error type string indicating exhausted billing quota
const QUOTA_ERROR_TYPE: &str = "insufficient_quota";

/// Fixed, user-actionable message shown when the upstream quota is spent
pub const QUOTA_MESSAGE: &str = "You have exceeded your OpenAI API quota. \
     Check your plan and billing details at \
     https://platform.openai.com/account/billing";

/// Errors surfaced to formula callers
///
/// Every variant carries a human-readable message; nothing is silently
/// swallowed except the deliberate empty-input short-circuit, which is
/// not an error.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Upstream rejected the request because the billing quota is spent
    #[error("{0}")]
    Quota(String),

    /// Network or HTTP failure other than quota exhaustion
    #[error("upstream error: {0}")]
    Transport(String),

    /// Response JSON is missing the fields this gateway reads,
    /// indicating upstream contract drift
    #[error("malformed upstream response: {0}")]
    MalformedResponse(String),

    /// Caller-supplied arguments violate a precondition; raised before
    /// any network call
    #[error("invalid request: {0}")]
    ValidationFailure(String),
}

impl GatewayError {
    /// Translate a non-2xx upstream reply into a gateway error
    ///
    /// HTTP 429 with an `insufficient_quota` error body becomes
    /// [`Self::Quota`] with the fixed remediation message; everything
    /// else is [`Self::Transport`] with the upstream message preserved.
    pub fn from_upstream(status: StatusCode, body: &str) -> Self {
        if status == StatusCode::TOO_MANY_REQUESTS
            && let Ok(parsed) = serde_json::from_str::<ErrorResponse>(body)
            && parsed.error.error_type == QUOTA_ERROR_TYPE
        {
            return Self::Quota(QUOTA_MESSAGE.to_owned());
        }

        Self::Transport(format!("provider returned {status}: {body}"))
    }

    /// HTTP status code an embedding host should surface for this error
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::Quota(_) => StatusCode::TOO_MANY_REQUESTS,
            Self::Transport(_) | Self::MalformedResponse(_) => StatusCode::BAD_GATEWAY,
            Self::ValidationFailure(_) => StatusCode::BAD_REQUEST,
        }
    }

    /// Machine-readable error type (e.g. `invalid_request_error`)
    pub const fn error_type(&self) -> &str {
        match self {
            Self::Quota(_) => "insufficient_quota",
            Self::Transport(_) => "api_error",
            Self::MalformedResponse(_) => "malformed_response_error",
            Self::ValidationFailure(_) => "invalid_request_error",
        }
    }
}
