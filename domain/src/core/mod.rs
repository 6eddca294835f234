//! Core domain concepts shared across all subdomains.
//!
//! - [`model::Model`]: completion backend models
//! - [`language::Language`]: the language replies are requested in
//! - [`error::DomainError`]: domain-level errors

pub mod error;
pub mod language;
pub mod model;
