//! Shared machinery for every persona agent call.

use crate::config::BehaviorConfig;
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::model_invoker::{InvokeError, ModelInvoker};
use chartroom_domain::{AgentKind, AgentResult, ModelConfig, ModelSlot, SystemPrompts};
use serde_json::json;
use std::sync::Arc;
use tracing::{debug, warn};

/// Resolves models and instructions, applies the timeout, and records every
/// invocation before handing back a decoded result.
#[derive(Clone)]
pub struct AgentRuntime {
    invoker: Arc<dyn ModelInvoker>,
    models: ModelConfig,
    prompts: SystemPrompts,
    behavior: BehaviorConfig,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl AgentRuntime {
    pub fn new(invoker: Arc<dyn ModelInvoker>) -> Self {
        Self {
            invoker,
            models: ModelConfig::default(),
            prompts: SystemPrompts::default(),
            behavior: BehaviorConfig::default(),
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    pub fn with_models(mut self, models: ModelConfig) -> Self {
        self.models = models;
        self
    }

    pub fn with_prompts(mut self, prompts: SystemPrompts) -> Self {
        self.prompts = prompts;
        self
    }

    pub fn with_behavior(mut self, behavior: BehaviorConfig) -> Self {
        self.behavior = behavior;
        self
    }

    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    pub fn models(&self) -> &ModelConfig {
        &self.models
    }

    pub fn conversation_logger(&self) -> &Arc<dyn ConversationLogger> {
        &self.conversation_logger
    }

    /// Invoke one agent and decode its output.
    ///
    /// Degraded output (empty or non-JSON reply) is returned as an empty
    /// result; only an unreachable model or a timeout is an error.
    pub async fn run<R: AgentResult>(
        &self,
        kind: AgentKind,
        slot: ModelSlot,
        user_prompt: &str,
    ) -> Result<R, InvokeError> {
        let model = self.models.model_for(slot);
        let system = self.prompts.get(kind);
        debug!(
            "Agent {} on {}: system {} bytes, prompt {} bytes",
            kind,
            model,
            system.len(),
            user_prompt.len()
        );

        let call = self.invoker.invoke(model, system, user_prompt);
        let output = match self.behavior.timeout {
            Some(limit) => tokio::time::timeout(limit, call)
                .await
                .map_err(|_| InvokeError::Timeout(limit))??,
            None => call.await?,
        };

        let degraded = output.is_degraded();
        if degraded {
            warn!(
                "Agent {} returned degraded output: {}",
                kind,
                output.error().unwrap_or_default()
            );
        }

        self.conversation_logger.log(ConversationEvent::new(
            "model_invocation",
            json!({
                "agent": kind.as_str(),
                "model": model.as_str(),
                "prompt_bytes": user_prompt.len(),
                "degraded": degraded,
            }),
        ));

        let result = R::from_output(output);
        let extra = result.extra_keys();
        if !extra.is_empty() {
            debug!("Agent {} returned unexpected keys: {:?}", kind, extra);
        }
        Ok(result)
    }
}
