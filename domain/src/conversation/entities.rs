//! Conversation domain entities

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Role of a message in a conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::System => "system",
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A message in a conversation (Entity)
///
/// The role is fixed when the message is created. Empty content is allowed
/// and forwarded as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Message {
    role: Role,
    content: String,
}

impl Message {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new(Role::System, content)
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

/// Ordered transcript sent to the completion backend (Entity)
///
/// Insertion order is the dialogue order. A conversation holds at most one
/// `system` message and only in first position; every constructor enforces
/// this. An empty conversation is representable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Conversation {
    messages: Vec<Message>,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a conversation with the given system prompt
    pub fn with_system_prompt(prompt: impl Into<String>) -> Self {
        Self {
            messages: vec![Message::system(prompt)],
        }
    }

    /// Build from an existing list, validating system message placement
    pub fn from_messages(messages: Vec<Message>) -> Result<Self, DomainError> {
        if let Some(pos) = messages
            .iter()
            .skip(1)
            .position(|m| m.role() == Role::System)
        {
            return Err(DomainError::MisplacedSystemMessage(pos + 1));
        }
        Ok(Self { messages })
    }

    /// Append a message.
    ///
    /// A system message is only accepted into an empty conversation.
    pub fn push(&mut self, message: Message) -> Result<(), DomainError> {
        if message.role() == Role::System && !self.messages.is_empty() {
            return Err(DomainError::MisplacedSystemMessage(self.messages.len()));
        }
        self.messages.push(message);
        Ok(())
    }

    pub fn push_user(&mut self, content: impl Into<String>) {
        self.messages.push(Message::user(content));
    }

    pub fn push_assistant(&mut self, content: impl Into<String>) {
        self.messages.push(Message::assistant(content));
    }

    /// Builder-style [`push_user`](Self::push_user)
    pub fn user(mut self, content: impl Into<String>) -> Self {
        self.push_user(content);
        self
    }

    /// Builder-style [`push_assistant`](Self::push_assistant)
    pub fn assistant(mut self, content: impl Into<String>) -> Self {
        self.push_assistant(content);
        self
    }

    /// Append every message of `history` (which must not contain a system message).
    pub fn extend_history<'a>(
        &mut self,
        history: impl IntoIterator<Item = &'a Message>,
    ) -> Result<(), DomainError> {
        for message in history {
            self.push(message.clone())?;
        }
        Ok(())
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn system_prompt(&self) -> Option<&str> {
        self.messages
            .first()
            .filter(|m| m.role() == Role::System)
            .map(|m| m.content())
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl<'de> Deserialize<'de> for Conversation {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let messages = Vec::<Message>::deserialize(deserializer)?;
        Conversation::from_messages(messages).map_err(serde::de::Error::custom)
    }
}

impl<'a> IntoIterator for &'a Conversation {
    type Item = &'a Message;
    type IntoIter = std::slice::Iter<'a, Message>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.iter()
    }
}
