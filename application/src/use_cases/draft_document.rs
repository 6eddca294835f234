//! Draft Document use case
//!
//! Produces a formal FIR or RTI draft from a free-text issue description in
//! a single gateway call.

use crate::ports::completion_gateway::{CompletionGateway, GatewayError, SendOptions};
use crate::ports::conversation_logger::{ConversationLogger, NoConversationLogger};
use crate::use_cases::shared::send_logged;
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;
use vakyalok_domain::{Conversation, DocumentKind, Language, LegalPromptTemplate, Model};

/// Errors that can occur while drafting a document
#[derive(Error, Debug)]
pub enum DraftError {
    #[error("Please provide a description of your issue.")]
    MissingDescription,

    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

/// Input for the [`DraftDocumentUseCase`]
#[derive(Debug, Clone)]
pub struct DraftRequest {
    pub kind: DocumentKind,
    pub description: String,
    pub language: Language,
    pub model: Option<Model>,
}

impl DraftRequest {
    pub fn new(kind: DocumentKind, description: impl Into<String>) -> Self {
        Self {
            kind,
            description: description.into(),
            language: Language::default(),
            model: None,
        }
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    pub fn with_model(mut self, model: Model) -> Self {
        self.model = Some(model);
        self
    }
}

/// A generated document draft
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentDraft {
    pub kind: DocumentKind,
    pub language: Language,
    pub model: Model,
    pub content: String,
}

/// Use case for drafting FIR / RTI documents
pub struct DraftDocumentUseCase {
    gateway: Arc<dyn CompletionGateway>,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl DraftDocumentUseCase {
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

    pub async fn execute(&self, request: DraftRequest) -> Result<DocumentDraft, DraftError> {
        let description = request.description.trim();
        if description.is_empty() {
            return Err(DraftError::MissingDescription);
        }

        let prompt =
            LegalPromptTemplate::document_draft(request.kind, description, request.language);
        let conversation = Conversation::new().user(prompt);

        let completion = send_logged(
            self.gateway.as_ref(),
            self.conversation_logger.as_ref(),
            "draft_document",
            &conversation,
            &SendOptions::from(request.model.as_ref()),
        )
        .await?;

        info!(
            kind = %request.kind,
            language = %request.language,
            bytes = completion.text.len(),
            "Document draft generated"
        );

        Ok(DocumentDraft {
            kind: request.kind,
            language: request.language,
            model: completion.model,
            content: completion.text,
        })
    }
}
