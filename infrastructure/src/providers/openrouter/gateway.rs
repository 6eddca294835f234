//! OpenRouter completion gateway

use super::classify::classify_response;
use super::config::{GatewayConfig, GatewayConfigError};
use super::protocol::ChatCompletionBody;
use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderName, HeaderValue};
use tracing::{debug, warn};
use vakyalok_application::{CompletionGateway, CompletionResult, GatewayError, SendOptions};
use vakyalok_domain::{Completion, CompletionRequest, Conversation, Model};

const HTTP_REFERER: HeaderName = HeaderName::from_static("http-referer");
const X_TITLE: HeaderName = HeaderName::from_static("x-title");

/// [`CompletionGateway`] backed by an OpenAI-compatible `/chat/completions`
/// endpoint (OpenRouter by default).
///
/// Stateless across calls: each `send` performs exactly one POST and never
/// retries. Authentication and identification headers are fixed at
/// construction.
pub struct OpenRouterGateway {
    client: reqwest::Client,
    endpoint: String,
    config: GatewayConfig,
}

impl OpenRouterGateway {
    /// Build a gateway, validating the credential, identification headers
    /// and default generation parameters.
    pub fn new(config: GatewayConfig) -> Result<Self, GatewayConfigError> {
        if config.api_key.trim().is_empty() {
            return Err(GatewayConfigError::MissingApiKey);
        }
        config.params.validate()?;
        let endpoint = config.endpoint();
        if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
            return Err(GatewayConfigError::InvalidBaseUrl(config.base_url.clone()));
        }

        let mut builder = reqwest::Client::builder().default_headers(Self::headers(&config)?);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        debug!(
            endpoint = %endpoint,
            default_model = %config.default_model,
            "OpenRouterGateway initialized"
        );

        Ok(Self {
            client,
            endpoint,
            config,
        })
    }

    fn headers(config: &GatewayConfig) -> Result<HeaderMap, GatewayConfigError> {
        let mut auth = header_value("Authorization", &format!("Bearer {}", config.api_key))?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);
        headers.insert(HTTP_REFERER, header_value("HTTP-Referer", &config.referer)?);
        headers.insert(X_TITLE, header_value("X-Title", &config.title)?);
        Ok(headers)
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Resolve per-request overrides against the configured defaults.
    fn build_request(&self, conversation: &Conversation, options: &SendOptions) -> CompletionRequest {
        let model: Model = options
            .model
            .clone()
            .unwrap_or_else(|| self.config.default_model.clone());
        let params = options.params.unwrap_or(self.config.params);
        CompletionRequest::new(conversation.clone(), model, params)
    }
}

fn header_value(header: &'static str, value: &str) -> Result<HeaderValue, GatewayConfigError> {
    HeaderValue::from_str(value).map_err(|e| GatewayConfigError::InvalidHeader {
        header,
        reason: e.to_string(),
    })
}

#[async_trait]
impl CompletionGateway for OpenRouterGateway {
    async fn send_with(
        &self,
        conversation: &Conversation,
        options: &SendOptions,
    ) -> CompletionResult {
        let request = self.build_request(conversation, options);

        // Overrides are checked here; nothing goes out with unusable params.
        if let Err(e) = request.params.validate() {
            warn!(model = %request.model, "Rejected completion request: {}", e);
            return Err(GatewayError::request_failed(e));
        }

        debug!(
            model = %request.model,
            messages = request.messages.len(),
            max_tokens = request.max_tokens(),
            temperature = request.temperature(),
            "Sending chat completion request"
        );

        let response = match self
            .client
            .post(&self.endpoint)
            .json(&ChatCompletionBody::from(&request))
            .send()
            .await
        {
            Ok(r) => r,
            Err(e) => {
                warn!(
                    model = %request.model,
                    timeout = e.is_timeout(),
                    connect = e.is_connect(),
                    "Completion request failed before a response: {}",
                    e
                );
                return Err(GatewayError::network());
            }
        };

        let status = response.status();
        let body = match response.text().await {
            Ok(b) => b,
            Err(e) => {
                warn!(status = status.as_u16(), "Failed to read response body: {}", e);
                return Err(GatewayError::network());
            }
        };

        match classify_response(status, &body) {
            Ok(text) => {
                debug!(
                    model = %request.model,
                    bytes = text.len(),
                    "Completion received"
                );
                Ok(Completion::new(text, request.model))
            }
            Err(e) => {
                warn!(
                    model = %request.model,
                    status = status.as_u16(),
                    kind = %e.kind(),
                    "Completion request rejected: {}",
                    e
                );
                Err(e)
            }
        }
    }
}
