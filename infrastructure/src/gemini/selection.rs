//! Model name resolution against the models the API actually serves.

use chartroom_domain::Model;
use std::collections::HashMap;

/// Maps a requested model hint onto the ordered list of names to try.
#[derive(Debug, Clone)]
pub struct ModelSelector {
    fallbacks: Vec<String>,
    aliases: HashMap<String, String>,
}

impl Default for ModelSelector {
    fn default() -> Self {
        let replacement = Model::Gemini3FlashPreview.to_string();
        Self {
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

impl ModelSelector {
    pub fn new(
        fallbacks: impl IntoIterator<Item = String>,
        aliases: impl IntoIterator<Item = (String, String)>,
    ) -> Self {
        Self {
            fallbacks: fallbacks.into_iter().collect(),
            aliases: aliases.into_iter().collect(),
        }
    }

    pub fn fallbacks(&self) -> &[String] {
        &self.fallbacks
    }

    /// Pick the model to try first.
    ///
    /// The alias map is applied before anything else. An empty `available`
    /// list means the catalogue is unknown, and the (aliased) request is
    /// trusted as is.
    pub fn choose(&self, requested: &str, available: &[String]) -> String {
        let requested = self
            .aliases
            .get(requested)
            .map(String::as_str)
            .unwrap_or(requested);

        if available.is_empty() || available.iter().any(|m| m == requested) {
            return requested.to_string();
        }
        self.fallbacks
            .iter()
            .find(|candidate| available.contains(candidate))
            .or_else(|| available.first())
            .cloned()
            .unwrap_or_else(|| requested.to_string())
    }

    /// Chosen model followed by the fallback list, blanks and duplicates removed
    pub fn candidates(&self, requested: &str, available: &[String]) -> Vec<String> {
        let mut out: Vec<String> = Vec::with_capacity(self.fallbacks.len() + 1);
        let chosen = self.choose(requested, available);
        for name in std::iter::once(&chosen).chain(self.fallbacks.iter()) {
            if !name.is_empty() && !out.contains(name) {
                out.push(name.clone());
            }
        }
        out
    }
}
