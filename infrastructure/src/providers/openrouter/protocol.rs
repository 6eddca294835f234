//! Wire types for the OpenAI-compatible chat completions endpoint.

use serde::{Deserialize, Serialize};
use vakyalok_domain::{CompletionRequest, Message};

/// Request body for `POST /chat/completions`
#[derive(Debug, Serialize)]
pub struct ChatCompletionBody<'a> {
    pub model: &'a str,
    pub messages: &'a [Message],
    pub max_tokens: u32,
    pub temperature: f32,
    pub stream: bool,
}

impl<'a> From<&'a CompletionRequest> for ChatCompletionBody<'a> {
    fn from(request: &'a CompletionRequest) -> Self {
        Self {
            model: request.model.as_str(),
            messages: request.messages.messages(),
            max_tokens: request.max_tokens(),
            temperature: request.temperature(),
            stream: request.stream(),
        }
    }
}

/// Successful response body. Only the fields the gateway reads are modelled.
#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: Option<ChoiceMessage>,
}

#[derive(Debug, Deserialize)]
pub struct ChoiceMessage {
    pub content: Option<String>,
    pub role: Option<String>,
}

impl ChatCompletionResponse {
    /// `choices[0].message.content`, if present
    pub fn first_content(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|c| c.message.as_ref())
            .and_then(|m| m.content.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vakyalok_domain::{Conversation, GenerationParams, Model};

    #[test]
    fn test_body_matches_wire_schema() {
        let request = CompletionRequest::new(
            Conversation::with_system_prompt("You are a legal assistant").user("What is an FIR?"),
            Model::Mistral7bInstruct,
            GenerationParams::default(),
        );
        let body = serde_json::to_value(ChatCompletionBody::from(&request)).unwrap();

        assert_eq!(body["model"], "mistralai/mistral-7b-instruct");
        assert_eq!(body["max_tokens"], 1000);
        assert_eq!(body["stream"], false);
        assert!((body["temperature"].as_f64().unwrap() - 0.7).abs() < 1e-6);
        assert_eq!(
            body["messages"],
            serde_json::json!([
                {"role": "system", "content": "You are a legal assistant"},
                {"role": "user", "content": "What is an FIR?"}
            ])
        );
    }

    #[test]
    fn test_first_content() {
        let response: ChatCompletionResponse = serde_json::from_str(
            r#"{"choices":[{"message":{"role":"assistant","content":"hi"}}]}"#,
        )
        .unwrap();
        assert_eq!(response.first_content(), Some("hi"));

        let response: ChatCompletionResponse =
            serde_json::from_str(r#"{"choices":[{"message":{"role":"assistant","content":null}}]}"#)
                .unwrap();
        assert_eq!(response.first_content(), None);

        let response: ChatCompletionResponse = serde_json::from_str(r#"{"id":"x"}"#).unwrap();
        assert_eq!(response.first_content(), None);
    }
}
