//! Application layer for vakyalok
//!
//! This crate contains use cases and port definitions.
//! It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    completion_gateway::{CompletionGateway, CompletionResult, GatewayError, SendOptions},
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger},
};
pub use use_cases::chat::{ChatError, ChatSession, ChatTurn, SendChatTurnUseCase};
pub use use_cases::draft_document::{
    DocumentDraft, DraftDocumentUseCase, DraftError, DraftRequest,
};
pub use use_cases::lookup_term::{LookupError, LookupTermUseCase, TermExplanation};
