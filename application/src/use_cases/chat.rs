//! Chat use case
//!
//! A multi-turn conversation with the legal assistant. The transcript is
//! owned by the caller as a [`ChatSession`]; each turn rebuilds the full
//! conversation (system prompt + history + new user message) and sends it
//! through the gateway once.

use crate::ports::completion_gateway::{CompletionGateway, GatewayError, SendOptions};
use crate::ports::conversation_logger::{ConversationLogger, NoConversationLogger};
use crate::use_cases::shared::send_logged;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;
use vakyalok_domain::{Completion, Conversation, Language, LegalPromptTemplate, Model};

/// Errors that can occur during a chat turn
#[derive(Error, Debug)]
pub enum ChatError {
    #[error("Message cannot be empty")]
    EmptyMessage,

    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

/// One completed exchange
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatTurn {
    pub user: String,
    pub assistant: String,
}

/// Caller-owned chat state
///
/// Only successful exchanges are recorded, so a failed turn can simply be
/// resubmitted.
#[derive(Debug, Clone, Default)]
pub struct ChatSession {
    language: Language,
    turns: Vec<ChatTurn>,
}

impl ChatSession {
    pub fn new(language: Language) -> Self {
        Self {
            language,
            turns: Vec::new(),
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Change the reply language; applies from the next turn on.
    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    pub fn turns(&self) -> &[ChatTurn] {
        &self.turns
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn clear(&mut self) {
        self.turns.clear();
    }

    /// The conversation that would be sent for `user_text`
    pub fn conversation_for(&self, user_text: &str) -> Conversation {
        let mut conversation =
            Conversation::with_system_prompt(LegalPromptTemplate::chat_system(self.language));
        for turn in &self.turns {
            conversation.push_user(turn.user.as_str());
            conversation.push_assistant(turn.assistant.as_str());
        }
        conversation.push_user(user_text);
        conversation
    }

    fn record(&mut self, user: String, assistant: String) {
        self.turns.push(ChatTurn { user, assistant });
    }
}

/// Use case for sending one chat turn
pub struct SendChatTurnUseCase {
    gateway: Arc<dyn CompletionGateway>,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl SendChatTurnUseCase {
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

    /// Send `input` as the next user turn of `session`.
    ///
    /// On success both the user message and the reply are appended to the
    /// session. On failure the session is left untouched.
    pub async fn execute(
        &self,
        session: &mut ChatSession,
        input: &str,
        model: Option<&Model>,
    ) -> Result<Completion, ChatError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(ChatError::EmptyMessage);
        }

        let conversation = session.conversation_for(input);
        let completion = send_logged(
            self.gateway.as_ref(),
            self.conversation_logger.as_ref(),
            "chat",
            &conversation,
            &SendOptions::from(model),
        )
        .await?;

        info!(
            turn = session.turns().len() + 1,
            model = %completion.model,
            "Chat turn completed"
        );
        session.record(input.to_string(), completion.text.clone());
        Ok(completion)
    }
}
