//! Configuration file loading for twenty-questions
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `TWENTYQ_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./twentyq.toml` or `./.twentyq.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/twenty-questions/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    FileConfig, FileLoggingConfig, FileModelConfig, FileOpenAiConfig, FileOutputConfig,
    FileProvidersConfig, FileReplConfig,
};
pub use loader::ConfigLoader;
