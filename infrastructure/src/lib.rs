//! Infrastructure layer for vakyalok
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod logging;
pub mod providers;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileChatConfig, FileConfig, FileGatewayConfig,
    FileLoggingConfig, FileOutputConfig,
};
pub use logging::JsonlConversationLogger;
pub use providers::{
    CoalescingGateway, GatewayConfig, GatewayConfigError, OpenRouterGateway,
};
