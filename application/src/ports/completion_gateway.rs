//! Completion gateway port
//!
//! Defines the single interface every feature uses to reach the completion
//! backend, and the error taxonomy callers render to users.

use async_trait::async_trait;
use thiserror::Error;
use vakyalok_domain::{Completion, Conversation, FailureKind, GenerationParams, Model};

pub const NETWORK_FAILURE_MESSAGE: &str = "Failed to connect to AI service";
pub const AUTH_FAILURE_MESSAGE: &str = "API key is invalid or expired";
pub const RATE_LIMITED_MESSAGE: &str = "Rate limit exceeded. Please try again later.";
pub const UPSTREAM_FAILURE_MESSAGE: &str = "Server error. Please try again later.";
pub const MALFORMED_RESPONSE_MESSAGE: &str = "Invalid response format from AI service";

/// Errors that can occur while requesting a completion.
///
/// Each variant carries a message suitable for direct display.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    #[error("{0}")]
    NetworkFailure(String),

    #[error("{0}")]
    AuthFailure(String),

    #[error("{0}")]
    RateLimited(String),

    #[error("{0}")]
    UpstreamFailure(String),

    #[error("{0}")]
    RequestFailure(String),

    #[error("{0}")]
    MalformedResponse(String),
}

impl GatewayError {
    pub fn network() -> Self {
        Self::NetworkFailure(NETWORK_FAILURE_MESSAGE.to_string())
    }

    pub fn auth() -> Self {
        Self::AuthFailure(AUTH_FAILURE_MESSAGE.to_string())
    }

    pub fn rate_limited() -> Self {
        Self::RateLimited(RATE_LIMITED_MESSAGE.to_string())
    }

    pub fn upstream() -> Self {
        Self::UpstreamFailure(UPSTREAM_FAILURE_MESSAGE.to_string())
    }

    /// A rejected request, described by the backend's message or the status line
    pub fn request_failed(detail: impl std::fmt::Display) -> Self {
        Self::RequestFailure(format!("API request failed: {}", detail))
    }

    pub fn malformed() -> Self {
        Self::MalformedResponse(MALFORMED_RESPONSE_MESSAGE.to_string())
    }

    pub fn kind(&self) -> FailureKind {
        match self {
            GatewayError::NetworkFailure(_) => FailureKind::NetworkFailure,
            GatewayError::AuthFailure(_) => FailureKind::AuthFailure,
            GatewayError::RateLimited(_) => FailureKind::RateLimited,
            GatewayError::UpstreamFailure(_) => FailureKind::UpstreamFailure,
            GatewayError::RequestFailure(_) => FailureKind::RequestFailure,
            GatewayError::MalformedResponse(_) => FailureKind::MalformedResponse,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            GatewayError::NetworkFailure(m)
            | GatewayError::AuthFailure(m)
            | GatewayError::RateLimited(m)
            | GatewayError::UpstreamFailure(m)
            | GatewayError::RequestFailure(m)
            | GatewayError::MalformedResponse(m) => m,
        }
    }
}

/// Outcome of a single completion call
pub type CompletionResult = Result<Completion, GatewayError>;

/// Per-request overrides. Unset fields fall back to the gateway's configuration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SendOptions {
    pub model: Option<Model>,
    pub params: Option<GenerationParams>,
}

impl SendOptions {
    pub fn with_model(mut self, model: Model) -> Self {
        self.model = Some(model);
        self
    }

    pub fn with_params(mut self, params: GenerationParams) -> Self {
        self.params = Some(params);
        self
    }
}

impl From<Option<&Model>> for SendOptions {
    fn from(model: Option<&Model>) -> Self {
        Self {
            model: model.cloned(),
            params: None,
        }
    }
}

/// Gateway to the completion backend
///
/// Every call is independent: one conversation in, one outbound request,
/// one classified result out. Implementations never retry.
#[async_trait]
pub trait CompletionGateway: Send + Sync {
    /// Send a conversation with explicit overrides.
    async fn send_with(&self, conversation: &Conversation, options: &SendOptions)
    -> CompletionResult;

    /// Send a conversation, optionally overriding the default model.
    async fn send(&self, conversation: &Conversation, model: Option<&Model>) -> CompletionResult {
        self.send_with(conversation, &SendOptions::from(model)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_user_message() {
        assert_eq!(GatewayError::auth().to_string(), "API key is invalid or expired");
        assert_eq!(
            GatewayError::request_failed("404 Not Found").to_string(),
            "API request failed: 404 Not Found"
        );
    }

    #[test]
    fn test_kind_mapping() {
        assert_eq!(GatewayError::network().kind(), FailureKind::NetworkFailure);
        assert_eq!(GatewayError::auth().kind(), FailureKind::AuthFailure);
        assert_eq!(GatewayError::rate_limited().kind(), FailureKind::RateLimited);
        assert_eq!(GatewayError::upstream().kind(), FailureKind::UpstreamFailure);
        assert_eq!(
            GatewayError::request_failed("x").kind(),
            FailureKind::RequestFailure
        );
        assert_eq!(
            GatewayError::malformed().kind(),
            FailureKind::MalformedResponse
        );
    }

    #[test]
    fn test_send_options_from_model() {
        let model = Model::Claude3Haiku;
        let options = SendOptions::from(Some(&model));
        assert_eq!(options.model, Some(Model::Claude3Haiku));
        assert!(options.params.is_none());
        assert_eq!(SendOptions::from(None), SendOptions::default());
    }
}
