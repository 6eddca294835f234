//! Completion request entity

use super::params::GenerationParams;
use crate::conversation::entities::Conversation;
use crate::core::model::Model;

/// A single outbound completion request.
///
/// Built once per send from the caller's conversation and the effective
/// model and parameters, then discarded. Streaming is always off.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub model: Model,
    pub messages: Conversation,
    pub params: GenerationParams,
}

impl CompletionRequest {
    pub fn new(messages: Conversation, model: Model, params: GenerationParams) -> Self {
        Self {
            model,
            messages,
            params,
        }
    }

    pub fn max_tokens(&self) -> u32 {
        self.params.max_tokens
    }

    pub fn temperature(&self) -> f32 {
        self.params.temperature
    }

    /// Always `false`: replies are returned whole.
    pub fn stream(&self) -> bool {
        false
    }
}
