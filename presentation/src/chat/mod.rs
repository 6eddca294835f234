//! Interactive chat module
//!
//! Provides a readline-based chat with the legal assistant.

mod repl;

pub use repl::{ChatRepl, ReplCommand};
