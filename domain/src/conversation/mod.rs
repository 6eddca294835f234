//! Conversation domain.
//!
//! - [`entities::Conversation`]: an ordered, role-tagged transcript
//! - [`entities::Message`]: a single message within a conversation

pub mod entities;
