//! Use cases
//!
//! Application-level operations. Each one assembles a conversation and sends
//! it through the completion gateway exactly once per request.

pub mod chat;
pub mod draft_document;
pub mod lookup_term;
pub(crate) mod shared;
