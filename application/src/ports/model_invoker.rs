//! Model Invoker port
//!
//! Defines the interface for asking a generative model for structured JSON.

use async_trait::async_trait;
use chartroom_domain::{Model, ModelOutput};
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur during a model invocation
#[derive(Error, Debug, Clone)]
pub enum InvokeError {
    /// Every candidate model failed; carries the last error seen
    #[error("Model unavailable ({model}): {reason}")]
    ModelUnavailable { model: String, reason: String },

    #[error("Model call timed out after {0:?}")]
    Timeout(Duration),

    #[error("Agent task failed: {0}")]
    TaskFailed(String),
}

impl InvokeError {
    pub fn unavailable(model: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ModelUnavailable {
            model: model.into(),
            reason: reason.into(),
        }
    }
}

/// Gateway to a generative model provider
///
/// Implementations resolve model-name fallback internally. Empty or
/// non-JSON replies are not errors: they come back as degraded
/// [`ModelOutput`] sentinels (see [`ModelOutput::from_text`]).
#[async_trait]
pub trait ModelInvoker: Send + Sync {
    async fn invoke(
        &self,
        model: &Model,
        system_instruction: &str,
        user_prompt: &str,
    ) -> Result<ModelOutput, InvokeError>;
}
