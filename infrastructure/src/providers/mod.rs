//! Completion providers and gateway decorators.

pub mod coalescing;
pub mod openrouter;

pub use coalescing::CoalescingGateway;
pub use openrouter::{GatewayConfig, GatewayConfigError, OpenRouterGateway};
