//! Runtime behavior and logging from TOML (`[behavior]`, `[logging]`)

use chartroom_application::BehaviorConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileBehaviorConfig {
    /// Per model call; unset or 0 disables the timeout
    pub timeout_seconds: Option<u64>,
}

impl FileBehaviorConfig {
    pub fn to_behavior_config(&self) -> BehaviorConfig {
        BehaviorConfig::from_timeout_seconds(self.timeout_seconds)
    }
}

/// ```toml
/// [logging]
/// dir = "logs"                                        # daily rolling file
/// conversation_log = "logs/conversation.jsonl"        # model call audit trail
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    pub dir: Option<PathBuf>,
    pub conversation_log: Option<PathBuf>,
}
