//! Chat configuration from TOML (`[chat]` section)

use super::ConfigValidationError;
use serde::{Deserialize, Serialize};
use vakyalok_domain::Language;

/// Raw chat configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileChatConfig {
    /// Reply language code or name ("hi", "Hindi", ...)
    pub language: Option<String>,
    /// Path to the REPL history file
    pub history_file: Option<String>,
    /// Show a spinner while waiting for a reply
    pub show_progress: bool,
}

impl Default for FileChatConfig {
    fn default() -> Self {
        Self {
            language: None,
            history_file: None,
            show_progress: true,
        }
    }
}

impl FileChatConfig {
    /// Parse the configured language, English when unset
    pub fn parse_language(&self) -> Result<Language, ConfigValidationError> {
        match self.language.as_deref() {
            None => Ok(Language::default()),
            Some(raw) => raw
                .parse()
                .map_err(|_| ConfigValidationError::UnknownLanguage(raw.to_string())),
        }
    }
}
