//! Presentation layer for vakyalok
//!
//! This crate contains CLI definitions, output formatters,
//! progress spinners, and the interactive chat interface.

pub mod chat;
pub mod cli;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use chat::ChatRepl;
pub use cli::commands::{Cli, Command, DocumentArg, OutputFormat, join_words};
pub use output::console::ConsoleFormatter;
pub use progress::spinner::WaitSpinner;
