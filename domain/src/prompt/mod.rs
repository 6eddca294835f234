//! Prompt domain
//!
//! Templates for the chat assistant, document drafting and the legal dictionary.

pub mod document;
mod template;

pub use document::DocumentKind;
pub use template::{COMMON_LEGAL_TERMS, LegalPromptTemplate};
