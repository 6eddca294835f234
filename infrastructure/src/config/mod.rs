//! Configuration file loading for vakyalok
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `VAKYALOK_*` environment variables (`__` separates sections)
//! 2. `--config <path>` specified file
//! 3. Project root: `./vakyalok.toml` or `./.vakyalok.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/vakyalok/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileChatConfig, FileConfig, FileGatewayConfig, FileLoggingConfig,
    FileOutputConfig,
};
pub use loader::ConfigLoader;
