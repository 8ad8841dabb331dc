//! Infrastructure layer for chartroom
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod gemini;
pub mod logging;
pub mod output;
pub mod prompts;

// Re-export commonly used types
pub use config::{
    ConfigLoader, FileBehaviorConfig, FileConfig, FileGeminiConfig, FileLoggingConfig,
    FileModelsConfig, FileOutputConfig, FilePromptsConfig, FileServerConfig,
};
pub use gemini::{GeminiError, GeminiInvoker, ModelSelector};
pub use logging::JsonlConversationLogger;
pub use output::FileOutputSink;
pub use prompts::LocalPromptLoader;
