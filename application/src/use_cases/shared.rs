//! Shared helpers for use cases.
//!
//! Every feature sends through [`send_logged`], so each exchange is traced
//! and recorded in the conversation log the same way.

use crate::ports::completion_gateway::{CompletionGateway, CompletionResult, SendOptions};
use crate::ports::conversation_logger::{ConversationEvent, ConversationLogger};
use serde_json::json;
use tracing::debug;
use vakyalok_domain::Conversation;

/// Send `conversation` once and record the outcome under `feature`.
pub(crate) async fn send_logged(
    gateway: &dyn CompletionGateway,
    logger: &dyn ConversationLogger,
    feature: &'static str,
    conversation: &Conversation,
    options: &SendOptions,
) -> CompletionResult {
    debug!(
        feature,
        messages = conversation.len(),
        "Sending conversation to completion gateway"
    );

    let result = gateway.send_with(conversation, options).await;

    match &result {
        Ok(completion) => {
            logger.log(ConversationEvent::new(
                "completion_succeeded",
                json!({
                    "feature": feature,
                    "model": completion.model.as_str(),
                    "messages": conversation,
                    "reply": completion.text,
                }),
            ));
        }
        Err(e) => {
            debug!(feature, kind = %e.kind(), "Completion failed");
            logger.log(ConversationEvent::new(
                "completion_failed",
                json!({
                    "feature": feature,
                    "model": options.model.as_ref().map(|m| m.as_str()),
                    "messages": conversation,
                    "kind": e.kind(),
                    "error": e.message(),
                }),
            ));
        }
    }

    result
}
