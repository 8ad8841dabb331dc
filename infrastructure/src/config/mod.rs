//! Configuration file loading for chartroom
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `CHARTROOM_` environment variables (`__` separates section and key)
//! 2. `--config <path>` specified file
//! 3. Project root: `./chartroom.toml` or `./.chartroom.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/chartroom/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    DEFAULT_GEMINI_BASE_URL, FileBehaviorConfig, FileConfig, FileGeminiConfig,
    FileLoggingConfig, FileModelsConfig, FileOutputConfig, FilePromptsConfig, FileServerConfig,
};
pub use loader::ConfigLoader;
