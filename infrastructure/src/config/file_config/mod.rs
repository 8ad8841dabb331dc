//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! Every section defaults, so an empty file is a valid configuration.

mod behavior;
mod gemini;
mod models;
mod output;
mod server;

pub use behavior::{FileBehaviorConfig, FileLoggingConfig};
pub use gemini::{DEFAULT_GEMINI_BASE_URL, FileGeminiConfig};
pub use models::FileModelsConfig;
pub use output::{FileOutputConfig, FilePromptsConfig};
pub use server::FileServerConfig;

use chartroom_domain::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Per-slot model hints and fallback policy
    pub models: FileModelsConfig,
    /// Gemini credentials and endpoint
    pub gemini: FileGeminiConfig,
    /// Artifact directory
    pub output: FileOutputConfig,
    /// System instruction directory
    pub prompts: FilePromptsConfig,
    /// HTTP listener and public URL
    pub server: FileServerConfig,
    /// Model call timeout
    pub behavior: FileBehaviorConfig,
    /// File logging and the JSONL conversation log
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// Checks, in order:
    /// 1. Empty model names (slots and fallbacks)
    /// 2. Unparseable `server.bind`
    /// 3. No Gemini API key in the file or the environment
    pub fn validate(&self) -> Vec<ConfigIssue> {
        self.validate_with(|name| std::env::var(name).ok())
    }

    pub fn validate_with(&self, lookup: impl Fn(&str) -> Option<String>) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        issues.extend(self.models.to_model_config().1);
        issues.extend(self.models.parse_fallbacks().1);

        if self.server.bind_addr().is_err() {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::InvalidValue {
                    field: "server.bind".to_string(),
                    value: self.server.bind.clone(),
                },
                format!(
                    "server.bind: '{}' is not a socket address (expected host:port)",
                    self.server.bind
                ),
            ));
        }

        if self.gemini.resolve_api_key_with(lookup).is_none() {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::MissingApiKey {
                    tried: self.gemini.api_key_env.clone(),
                },
                format!(
                    "No Gemini API key found. Set one of: {}, or gemini.api_key",
                    self.gemini.api_key_env.join(", ")
                ),
            ));
        }

        issues
    }
}
