//! Connection settings for the OpenRouter gateway

use std::time::Duration;
use thiserror::Error;
use vakyalok_domain::{DomainError, GenerationParams, Model};

pub const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1";
pub const DEFAULT_REFERER: &str = "http://localhost";
pub const DEFAULT_TITLE: &str = "Vakyalok - Legal Assistant";

/// Errors raised while building a gateway from its configuration
#[derive(Error, Debug)]
pub enum GatewayConfigError {
    #[error("API key is missing")]
    MissingApiKey,

    #[error("Invalid value for header {header}: {reason}")]
    InvalidHeader { header: &'static str, reason: String },

    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),

    #[error("{0}")]
    InvalidParams(#[from] DomainError),

    #[error("Failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Everything the gateway needs to reach one backend.
///
/// Passed to [`OpenRouterGateway::new`](super::OpenRouterGateway::new);
/// the gateway reads no global state.
#[derive(Clone)]
pub struct GatewayConfig {
    /// API root, without the `/chat/completions` suffix
    pub base_url: String,
    /// Bearer credential
    pub api_key: String,
    /// Model used when a request does not name one
    pub default_model: Model,
    /// Generation parameters used when a request does not override them
    pub params: GenerationParams,
    /// Origin sent as `HTTP-Referer`
    pub referer: String,
    /// Application title sent as `X-Title`
    pub title: String,
    /// Whole-request timeout; `None` keeps the HTTP client's default
    pub timeout: Option<Duration>,
}

impl GatewayConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.into(),
            default_model: Model::default(),
            params: GenerationParams::default(),
            referer: DEFAULT_REFERER.to_string(),
            title: DEFAULT_TITLE.to_string(),
            timeout: None,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_default_model(mut self, model: Model) -> Self {
        self.default_model = model;
        self
    }

    pub fn with_params(mut self, params: GenerationParams) -> Self {
        self.params = params;
        self
    }

    pub fn with_referer(mut self, referer: impl Into<String>) -> Self {
        self.referer = referer.into();
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Full URL of the chat completions endpoint
    pub fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

impl std::fmt::Debug for GatewayConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GatewayConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("default_model", &self.default_model)
            .field("params", &self.params)
            .field("referer", &self.referer)
            .field("title", &self.title)
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GatewayConfig::new("sk-test");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.default_model, Model::Mistral7bInstruct);
        assert_eq!(config.params, GenerationParams::default());
        assert!(config.timeout.is_none());
    }

    #[test]
    fn test_endpoint_handles_trailing_slash() {
        let config = GatewayConfig::new("k").with_base_url("http://127.0.0.1:9000/api/v1/");
        assert_eq!(
            config.endpoint(),
            "http://127.0.0.1:9000/api/v1/chat/completions"
        );
    }

    #[test]
    fn test_debug_redacts_key() {
        let config = GatewayConfig::new("sk-or-secret");
        let debug = format!("{:?}", config);
        assert!(!debug.contains("sk-or-secret"));
        assert!(debug.contains("<redacted>"));
    }
}
