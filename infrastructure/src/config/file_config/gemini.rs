//! Gemini API access from TOML (`[gemini]` section)

use serde::{Deserialize, Serialize};

pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Gemini credentials and endpoint
///
/// ```toml
/// [gemini]
/// api_key_env = ["GEMINI_API_KEY", "GOOGLE_API_KEY", "key"]
/// # api_key = "..."        # takes precedence over the environment
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGeminiConfig {
    /// Environment variables searched in order for the API key
    pub api_key_env: Vec<String>,
    pub api_key: Option<String>,
    pub base_url: String,
}

impl Default for FileGeminiConfig {
    fn default() -> Self {
        Self {
            api_key_env: vec![
                "GEMINI_API_KEY".to_string(),
                "GOOGLE_API_KEY".to_string(),
                "key".to_string(),
            ],
            api_key: None,
            base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
        }
    }
}

impl FileGeminiConfig {
    /// First non-empty key: the explicit `api_key`, then each `api_key_env`
    /// variable in order.
    pub fn resolve_api_key(&self) -> Option<String> {
        self.resolve_api_key_with(|name| std::env::var(name).ok())
    }

    pub fn resolve_api_key_with(&self, lookup: impl Fn(&str) -> Option<String>) -> Option<String> {
        self.api_key
            .iter()
            .cloned()
            .chain(self.api_key_env.iter().filter_map(|name| lookup(name)))
            .map(|raw| clean_key(&raw))
            .find(|key| !key.is_empty())
    }
}

/// Strip surrounding whitespace, then double and single quotes
fn clean_key(raw: &str) -> String {
    raw.trim()
        .trim_matches('"')
        .trim_matches('\'')
        .to_string()
}
