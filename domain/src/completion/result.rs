//! Completion outcome types

use crate::core::model::Model;
use serde::{Deserialize, Serialize};

/// A successful completion: the assistant's reply, trimmed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Completion {
    pub text: String,
    pub model: Model,
}

impl Completion {
    pub fn new(text: impl Into<String>, model: Model) -> Self {
        Self {
            text: text.into(),
            model,
        }
    }

    pub fn into_text(self) -> String {
        self.text
    }
}

/// Classification of a failed completion call.
///
/// Exhaustive and mutually exclusive; every failure maps to exactly one kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// No response was received from the backend
    NetworkFailure,
    /// HTTP 401
    AuthFailure,
    /// HTTP 429
    RateLimited,
    /// HTTP 5xx
    UpstreamFailure,
    /// Any other non-2xx status
    RequestFailure,
    /// 2xx without a usable reply
    MalformedResponse,
}

impl FailureKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureKind::NetworkFailure => "network_failure",
            FailureKind::AuthFailure => "auth_failure",
            FailureKind::RateLimited => "rate_limited",
            FailureKind::UpstreamFailure => "upstream_failure",
            FailureKind::RequestFailure => "request_failure",
            FailureKind::MalformedResponse => "malformed_response",
        }
    }

    /// Whether resubmitting the same request later may succeed.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            FailureKind::NetworkFailure | FailureKind::RateLimited | FailureKind::UpstreamFailure
        )
    }
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
