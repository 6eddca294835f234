//! Completion domain.
//!
//! - [`params::GenerationParams`]: sampling parameters with validated defaults
//! - [`request::CompletionRequest`]: one outbound request
//! - [`result::Completion`] / [`result::FailureKind`]: the outcome of a call

pub mod params;
pub mod request;
pub mod result;
