//! Model selection from TOML (`[models]` section)

use chartroom_domain::agent::model_config::ModelConfig;
use chartroom_domain::{ConfigIssue, ConfigIssueCode, Model};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Model hints per agent slot, plus the fallback policy the Gemini client
/// applies when a hint is not served.
///
/// # Example
///
/// ```toml
/// [models]
/// main = "gemini-2.5-flash"            # Deck, coaches, simulator, live chat
/// reviewer_a = "gemini-2.0-flash"      # Customer Panel 1
/// fallbacks = ["gemini-2.5-flash", "gemini-2.0-flash"]
///
/// [models.aliases]
/// "gemini-1.5-pro" = "gemini-2.5-flash"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileModelsConfig {
    pub main: String,
    pub reviewer_a: String,
    pub reviewer_b: String,
    pub reviewer_c: String,
    /// Preferred substitutes, tried in order after the chosen model
    pub fallbacks: Vec<String>,
    /// Retired model names mapped to their replacement
    pub aliases: BTreeMap<String, String>,
}

impl Default for FileModelsConfig {
    fn default() -> Self {
        let defaults = ModelConfig::default();
        let replacement = Model::Gemini3FlashPreview.to_string();
        Self {
            main: defaults.main.to_string(),
            reviewer_a: defaults.reviewer_a.to_string(),
            reviewer_b: defaults.reviewer_b.to_string(),
            reviewer_c: defaults.reviewer_c.to_string(),
            fallbacks: Model::default_fallbacks()
                .iter()
                .map(ToString::to_string)
                .collect(),
            aliases: [Model::Gemini15Flash, Model::Gemini15Pro]
                .iter()
                .map(|legacy| (legacy.to_string(), replacement.clone()))
                .collect(),
        }
    }
}

impl FileModelsConfig {
    fn empty_name(field: &str) -> ConfigIssue {
        ConfigIssue::error(
            ConfigIssueCode::EmptyModelName {
                field: field.to_string(),
            },
            format!("models.{}: model name cannot be empty", field),
        )
    }

    /// Build the slot configuration. Empty names keep the built-in default
    /// for that slot and are reported as errors.
    pub fn to_model_config(&self) -> (ModelConfig, Vec<ConfigIssue>) {
        let mut issues = Vec::new();
        let mut config = ModelConfig::default();

        let slots: [(&str, &String, fn(ModelConfig, Model) -> ModelConfig); 4] = [
            ("main", &self.main, ModelConfig::with_main),
            ("reviewer_a", &self.reviewer_a, ModelConfig::with_reviewer_a),
            ("reviewer_b", &self.reviewer_b, ModelConfig::with_reviewer_b),
            ("reviewer_c", &self.reviewer_c, ModelConfig::with_reviewer_c),
        ];
        for (field, value, apply) in slots {
            let name = value.trim();
            if name.is_empty() {
                issues.push(Self::empty_name(field));
            } else {
                config = apply(config, Model::from(name));
            }
        }

        (config, issues)
    }

    /// Non-empty fallback names in configured order
    pub fn parse_fallbacks(&self) -> (Vec<String>, Vec<ConfigIssue>) {
        let mut issues = Vec::new();
        let mut names = Vec::new();
        for name in &self.fallbacks {
            let name = name.trim();
            if name.is_empty() {
                issues.push(Self::empty_name("fallbacks"));
            } else {
                names.push(name.to_string());
            }
        }
        (names, issues)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chartroom_domain::Severity;

    #[test]
    fn test_defaults_match_domain() {
        let (config, issues) = FileModelsConfig::default().to_model_config();
        assert!(issues.is_empty());
        assert_eq!(config, ModelConfig::default());
    }

    #[test]
    fn test_default_aliases_and_fallbacks() {
        let models = FileModelsConfig::default();
        assert_eq!(
            models.aliases.get("gemini-1.5-flash").map(String::as_str),
            Some("gemini-3-flash-preview")
        );
        assert_eq!(models.fallbacks[0], "gemini-3-flash-preview");
        assert_eq!(models.fallbacks.len(), 4);
    }

    #[test]
    fn test_empty_name_keeps_default() {
        let models = FileModelsConfig {
            main: "  ".to_string(),
            reviewer_b: "gemini-2.0-flash".to_string(),
            ..Default::default()
        };
        let (config, issues) = models.to_model_config();
        assert_eq!(config.main, Model::Gemini15Pro);
        assert_eq!(config.reviewer_b, Model::Gemini20Flash);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Error);
        assert!(issues[0].message.contains("models.main"));
    }

    #[test]
    fn test_fallbacks_skip_blank_entries() {
        let models = FileModelsConfig {
            fallbacks: vec!["gemini-2.5-flash".to_string(), "".to_string()],
            ..Default::default()
        };
        let (names, issues) = models.parse_fallbacks();
        assert_eq!(names, vec!["gemini-2.5-flash"]);
        assert_eq!(issues.len(), 1);
    }
}
