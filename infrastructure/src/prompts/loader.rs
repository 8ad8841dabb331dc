//! Local file system prompt loader
//!
//! Reads per-agent system instructions from a directory. Each agent looks
//! for `system_<agent>.txt` (for example `system_reviewer_gtm.txt`); agents
//! without a readable, non-blank file keep their built-in instruction.
//!
//! # Example
//!
//! ```no_run
//! use chartroom_infrastructure::LocalPromptLoader;
//!
//! let prompts = LocalPromptLoader::new("prompts").load();
//! println!("{} agents use custom prompts", prompts.overridden().count());
//! ```

use chartroom_domain::{AgentKind, SystemPrompts};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

#[derive(Debug, Clone)]
pub struct LocalPromptLoader {
    dir: PathBuf,
}

impl LocalPromptLoader {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Load every agent's instruction, falling back per agent.
    ///
    /// A missing directory is not an error: all agents use defaults.
    pub fn load(&self) -> SystemPrompts {
        let mut prompts = SystemPrompts::new();
        if !self.dir.is_dir() {
            debug!("Prompt directory {} not found, using defaults", self.dir.display());
            return prompts;
        }

        for kind in AgentKind::ALL {
            let path = self.dir.join(kind.file_name());
            match fs::read_to_string(&path) {
                Ok(text) if !text.trim().is_empty() => {
                    debug!("Loaded {} prompt from {}", kind, path.display());
                    prompts.set(kind, text.trim());
                }
                Ok(_) => warn!("Prompt file {} is blank, using default", path.display()),
                Err(e) if e.kind() == ErrorKind::NotFound => {}
                Err(e) => warn!("Could not read prompt file {}: {}", path.display(), e),
            }
        }
        prompts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chartroom_domain::PersonaId;

    #[test]
    fn test_missing_dir_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let prompts = LocalPromptLoader::new(dir.path().join("absent")).load();
        assert_eq!(prompts.overridden().count(), 0);
        assert_eq!(
            prompts.get(AgentKind::PitchBuilder),
            AgentKind::PitchBuilder.default_instruction()
        );
    }

    #[test]
    fn test_loads_files_and_skips_blank() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("system_reviewer_gtm.txt"), "  Review adoption.\n").unwrap();
        fs::write(dir.path().join("system_interview_coach.txt"), "\n\n").unwrap();
        fs::write(dir.path().join("unrelated.txt"), "ignored").unwrap();

        let prompts = LocalPromptLoader::new(dir.path()).load();

        assert_eq!(
            prompts.get(AgentKind::Reviewer(PersonaId::Persona3)),
            "Review adoption."
        );
        assert_eq!(
            prompts.get(AgentKind::InterviewCoach),
            AgentKind::InterviewCoach.default_instruction()
        );
        assert_eq!(prompts.overridden().count(), 1);
    }
}
