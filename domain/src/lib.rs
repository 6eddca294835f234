//! Domain layer for vakyalok
//!
//! This crate contains the entities and value objects of the legal assistant.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Conversation
//!
//! Every feature (chat turn, document draft, dictionary lookup) builds a
//! [`Conversation`] (an ordered list of role-tagged messages with at most one
//! leading system prompt) and hands it to a completion gateway.
//!
//! ## Completion
//!
//! A call either yields a [`Completion`] (the trimmed reply) or fails with one
//! of the [`FailureKind`]s.

pub mod completion;
pub mod conversation;
pub mod core;
pub mod prompt;

// Re-export commonly used types
pub use completion::{
    params::GenerationParams,
    request::CompletionRequest,
    result::{Completion, FailureKind},
};
pub use conversation::entities::{Conversation, Message, Role};
pub use core::{error::DomainError, language::Language, model::Model};
pub use prompt::{COMMON_LEGAL_TERMS, DocumentKind, LegalPromptTemplate};
