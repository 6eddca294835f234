//! OpenRouter adapter for the [`CompletionGateway`](vakyalok_application::CompletionGateway) port.
//!
//! - [`config`]: connection settings injected at construction
//! - [`protocol`]: request/response wire types
//! - [`classify`]: HTTP outcome → result mapping
//! - [`gateway`]: the reqwest-based gateway

pub mod classify;
pub mod config;
pub mod gateway;
pub mod protocol;

pub use classify::classify_response;
pub use config::{GatewayConfig, GatewayConfigError};
pub use gateway::OpenRouterGateway;
