//! Artifact and prompt locations (`[output]` and `[prompts]` sections)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where finalize artifacts are written
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    pub dir: PathBuf,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("outputs"),
        }
    }
}

/// Directory holding `system_<agent>.txt` instruction files
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilePromptsConfig {
    pub dir: PathBuf,
}

impl Default for FilePromptsConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("prompts"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::FileConfig;
    use std::path::Path;

    #[test]
    fn test_dirs_deserialize() {
        let toml_str = r#"
[output]
dir = "/var/lib/chartroom"

[prompts]
dir = "config/prompts"
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.output.dir, Path::new("/var/lib/chartroom"));
        assert_eq!(config.prompts.dir, Path::new("config/prompts"));
    }
}
