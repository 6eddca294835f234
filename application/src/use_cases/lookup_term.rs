//! Lookup Term use case
//!
//! Explains a legal term in plain language, one gateway call per lookup.

use crate::ports::completion_gateway::{CompletionGateway, GatewayError, SendOptions};
use crate::ports::conversation_logger::{ConversationLogger, NoConversationLogger};
use crate::use_cases::shared::send_logged;
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;
use vakyalok_domain::{Conversation, Language, LegalPromptTemplate, Model};

#[derive(Error, Debug)]
pub enum LookupError {
    #[error("Please enter a legal term to search")]
    EmptyTerm,

    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

/// Explanation of a single legal term
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TermExplanation {
    pub term: String,
    pub language: Language,
    pub explanation: String,
}

pub struct LookupTermUseCase {
    gateway: Arc<dyn CompletionGateway>,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl LookupTermUseCase {
    pub fn new(gateway: Arc<dyn CompletionGateway>) -> Self {
        Self {
            gateway,
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    pub async fn execute(
        &self,
        term: &str,
        language: Language,
        model: Option<&Model>,
    ) -> Result<TermExplanation, LookupError> {
        let term = term.trim();
        if term.is_empty() {
            return Err(LookupError::EmptyTerm);
        }

        let conversation =
            Conversation::new().user(LegalPromptTemplate::term_explanation(term, language));

        let completion = send_logged(
            self.gateway.as_ref(),
            self.conversation_logger.as_ref(),
            "lookup_term",
            &conversation,
            &SendOptions::from(model),
        )
        .await?;

        Ok(TermExplanation {
            term: term.to_string(),
            language,
            explanation: completion.text,
        })
    }
}
