//! Gateway configuration from TOML (`[gateway]` section)

use super::ConfigValidationError;
use crate::providers::GatewayConfig;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use vakyalok_domain::completion::params::MAX_TEMPERATURE;
use vakyalok_domain::{GenerationParams, Model};

/// Environment variable read for the API key unless configured otherwise
pub const DEFAULT_API_KEY_ENV: &str = "OPENROUTER_API_KEY";

/// Raw gateway configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGatewayConfig {
    /// API root (defaults to OpenRouter)
    pub base_url: Option<String>,
    /// Name of the environment variable holding the API key
    pub api_key_env: String,
    /// Inline API key; takes precedence over `api_key_env`
    pub api_key: Option<String>,
    /// Default model ID, e.g. "mistralai/mistral-7b-instruct"
    pub model: Option<String>,
    pub max_tokens: u32,
    pub temperature: f32,
    /// `HTTP-Referer` header value
    pub referer: Option<String>,
    /// `X-Title` header value
    pub title: Option<String>,
    /// Whole-request timeout; unset means no timeout
    pub timeout_seconds: Option<u64>,
    /// Merge identical concurrent requests into one call
    pub coalesce_in_flight: bool,
}

impl Default for FileGatewayConfig {
    fn default() -> Self {
        let params = GenerationParams::default();
        Self {
            base_url: None,
            api_key_env: DEFAULT_API_KEY_ENV.to_string(),
            api_key: None,
            model: None,
            max_tokens: params.max_tokens,
            temperature: params.temperature,
            referer: None,
            title: None,
            timeout_seconds: None,
            coalesce_in_flight: true,
        }
    }
}

impl FileGatewayConfig {
    /// Parse the configured default model. Blank names yield `None`.
    pub fn parse_model(&self) -> Option<Model> {
        self.model
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(Model::from)
    }

    /// Configured generation parameters
    pub fn params(&self) -> Result<GenerationParams, ConfigValidationError> {
        if self.max_tokens == 0 {
            return Err(ConfigValidationError::ZeroMaxTokens);
        }
        GenerationParams::new(self.max_tokens, self.temperature).map_err(|_| {
            ConfigValidationError::TemperatureOutOfRange {
                value: self.temperature,
                max: MAX_TEMPERATURE,
            }
        })
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_seconds
            .filter(|s| *s > 0)
            .map(Duration::from_secs)
    }

    pub(super) fn validate(&self) -> Vec<ConfigValidationError> {
        let mut issues = Vec::new();
        if self.max_tokens == 0 {
            issues.push(ConfigValidationError::ZeroMaxTokens);
        }
        if !(0.0..=MAX_TEMPERATURE).contains(&self.temperature) {
            issues.push(ConfigValidationError::TemperatureOutOfRange {
                value: self.temperature,
                max: MAX_TEMPERATURE,
            });
        }
        if matches!(self.model.as_deref(), Some(m) if m.trim().is_empty()) {
            issues.push(ConfigValidationError::EmptyModelName);
        }
        if self.timeout_seconds == Some(0) {
            issues.push(ConfigValidationError::InvalidTimeout);
        }
        issues
    }

    /// Resolve the API key: inline `api_key` first, then the variable named
    /// by `api_key_env`. Blank values count as missing.
    pub fn resolve_api_key(&self) -> Option<String> {
        self.resolve_api_key_with(|name| std::env::var(name).ok())
    }

    fn resolve_api_key_with(&self, lookup: impl Fn(&str) -> Option<String>) -> Option<String> {
        let non_blank = |key: String| Some(key.trim().to_string()).filter(|k| !k.is_empty());
        self.api_key
            .clone()
            .and_then(non_blank)
            .or_else(|| lookup(&self.api_key_env).and_then(non_blank))
    }

    /// Build the adapter configuration.
    ///
    /// Call after [`super::FileConfig::validate`]; invalid generation
    /// parameters fall back to the defaults here.
    pub fn to_gateway_config(&self, api_key: impl Into<String>) -> GatewayConfig {
        let mut config = GatewayConfig::new(api_key)
            .with_params(self.params().unwrap_or_default())
            .with_timeout(self.timeout());

        if let Some(url) = &self.base_url {
            config = config.with_base_url(url.clone());
        }
        if let Some(model) = self.parse_model() {
            config = config.with_default_model(model);
        }
        if let Some(referer) = &self.referer {
            config = config.with_referer(referer.clone());
        }
        if let Some(title) = &self.title {
            config = config.with_title(title.clone());
        }
        config
    }
}
