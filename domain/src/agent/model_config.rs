//! Role-based model configuration.
//!
//! [`ModelConfig`] groups the model hints for each agent role. It is a static
//! value object: once created, models don't change at runtime.

use crate::core::model::Model;
use serde::{Deserialize, Serialize};

/// Which configured model an agent call runs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModelSlot {
    /// Single-call agents: pitch builder, coaches, simulator, live chat
    Main,
    ReviewerA,
    ReviewerB,
    ReviewerC,
}

/// Role-based model configuration.
///
/// ## Roles
/// - **Main**: every single-call agent (deck, coaching, simulation, live chat)
/// - **Reviewer A/B/C**: one model per board reviewer, so the three reviews can
///   run on different (cheaper) models
///
/// # Example
///
/// ```
/// use chartroom_domain::agent::model_config::{ModelConfig, ModelSlot};
/// use chartroom_domain::Model;
///
/// let config = ModelConfig::default().with_reviewer_b(Model::Gemini25Flash);
///
/// assert_eq!(config.model_for(ModelSlot::ReviewerB), &Model::Gemini25Flash);
/// assert_eq!(config.model_for(ModelSlot::Main), &Model::Gemini15Pro);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelConfig {
    pub main: Model,
    pub reviewer_a: Model,
    pub reviewer_b: Model,
    pub reviewer_c: Model,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            main: Model::Gemini15Pro,
            reviewer_a: Model::Gemini15Flash,
            reviewer_b: Model::Gemini15Flash,
            reviewer_c: Model::Gemini15Flash,
        }
    }
}

impl ModelConfig {
    // ==================== Builder Methods ====================

    pub fn with_main(mut self, model: Model) -> Self {
        self.main = model;
        self
    }

    pub fn with_reviewer_a(mut self, model: Model) -> Self {
        self.reviewer_a = model;
        self
    }

    pub fn with_reviewer_b(mut self, model: Model) -> Self {
        self.reviewer_b = model;
        self
    }

    pub fn with_reviewer_c(mut self, model: Model) -> Self {
        self.reviewer_c = model;
        self
    }

    /// Resolve a slot to its configured model
    pub fn model_for(&self, slot: ModelSlot) -> &Model {
        match slot {
            ModelSlot::Main => &self.main,
            ModelSlot::ReviewerA => &self.reviewer_a,
            ModelSlot::ReviewerB => &self.reviewer_b,
            ModelSlot::ReviewerC => &self.reviewer_c,
        }
    }
}
