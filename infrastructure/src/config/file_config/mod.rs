//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! Values stay as strings until parsed into domain types, so that a typo
//! becomes a validation issue instead of a deserialization failure.

mod chat;
mod gateway;
mod logging;
mod output;

pub use chat::FileChatConfig;
pub use gateway::FileGatewayConfig;
pub use logging::FileLoggingConfig;
pub use output::FileOutputConfig;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A configuration value that cannot be used
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigValidationError {
    #[error("gateway.max_tokens must be at least 1")]
    ZeroMaxTokens,

    #[error("gateway.temperature must be between 0.0 and {max}, got {value}")]
    TemperatureOutOfRange { value: f32, max: f32 },

    #[error("gateway.model cannot be empty")]
    EmptyModelName,

    #[error("gateway.timeout_seconds cannot be 0")]
    InvalidTimeout,

    #[error("chat.language: unknown language '{0}' (expected en, hi, te or mr)")]
    UnknownLanguage(String),
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Completion endpoint and generation settings
    pub gateway: FileGatewayConfig,
    /// Chat defaults
    pub chat: FileChatConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Conversation transcript settings
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut issues = self.gateway.validate();
        if let Err(e) = self.chat.parse_language() {
            issues.push(e);
        }
        issues
    }
}
