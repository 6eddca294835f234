//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("System message must be the first message of a conversation (found at position {0})")]
    MisplacedSystemMessage(usize),

    #[error("Invalid generation parameters: {0}")]
    InvalidGenerationParams(String),

    #[error("Unknown language code: {0}")]
    UnknownLanguage(String),

    #[error("Unknown document kind: {0}")]
    UnknownDocumentKind(String),
}
