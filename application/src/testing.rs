//! Hand-written port doubles shared by the unit tests in this crate.

use crate::ports::conversation_logger::{ConversationEvent, ConversationLogger};
use crate::ports::model_invoker::{InvokeError, ModelInvoker};
use crate::ports::output_sink::{OutputSink, SinkError};
use async_trait::async_trait;
use chartroom_domain::{AgentKind, Model, ModelOutput, SystemPrompts};
use serde_json::Value;
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use std::time::Duration;

/// System prompts whose text is just the agent name, so the scripted
/// invoker can tell which agent is calling.
pub fn tagged_prompts() -> SystemPrompts {
    AgentKind::ALL
        .into_iter()
        .fold(SystemPrompts::new(), |prompts, kind| prompts.with(kind, kind.as_str()))
}

#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub model: String,
    pub agent: String,
    pub user_prompt: String,
}

/// Replies per agent name; unknown agents get `{}`.
#[derive(Default)]
pub struct ScriptedInvoker {
    replies: Mutex<HashMap<String, ModelOutput>>,
    failing: Mutex<HashSet<String>>,
    delay: Option<Duration>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl ScriptedInvoker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(self, kind: AgentKind, value: Value) -> Self {
        let output = match value {
            Value::Object(map) => ModelOutput::new(map),
            other => ModelOutput::invalid_json(&other.to_string()),
        };
        self.replies
            .lock()
            .unwrap()
            .insert(kind.as_str().to_string(), output);
        self
    }

    pub fn degraded(self, kind: AgentKind) -> Self {
        self.replies
            .lock()
            .unwrap()
            .insert(kind.as_str().to_string(), ModelOutput::empty_response());
        self
    }

    pub fn failing(self, kind: AgentKind) -> Self {
        self.failing
            .lock()
            .unwrap()
            .insert(kind.as_str().to_string());
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn calls_for(&self, kind: AgentKind) -> Vec<RecordedCall> {
        self.calls()
            .into_iter()
            .filter(|c| c.agent == kind.as_str())
            .collect()
    }
}

#[async_trait]
impl ModelInvoker for ScriptedInvoker {
    async fn invoke(
        &self,
        model: &Model,
        system_instruction: &str,
        user_prompt: &str,
    ) -> Result<ModelOutput, InvokeError> {
        self.calls.lock().unwrap().push(RecordedCall {
            model: model.to_string(),
            agent: system_instruction.to_string(),
            user_prompt: user_prompt.to_string(),
        });
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if self.failing.lock().unwrap().contains(system_instruction) {
            return Err(InvokeError::unavailable(model.as_str(), "scripted failure"));
        }
        Ok(self
            .replies
            .lock()
            .unwrap()
            .get(system_instruction)
            .cloned()
            .unwrap_or_default())
    }
}

/// Keeps every written artifact in memory.
#[derive(Default)]
pub struct MemorySink {
    written: Mutex<Vec<(String, String)>>,
    fail: bool,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// (label, content) pairs in write order
    pub fn written(&self) -> Vec<(String, String)> {
        self.written.lock().unwrap().clone()
    }

    fn store(&self, name: &str, content: String) -> Result<String, SinkError> {
        if self.fail {
            return Err(SinkError::Write {
                name: name.to_string(),
                reason: "disk full".to_string(),
            });
        }
        let mut written = self.written.lock().unwrap();
        written.push((name.to_string(), content));
        Ok(format!("mem://{}/{:04}", name, written.len()))
    }
}

#[async_trait]
impl OutputSink for MemorySink {
    async fn write_structured(&self, name: &str, payload: &Value) -> Result<String, SinkError> {
        self.store(name, payload.to_string())
    }

    async fn write_text(&self, name: &str, text: &str) -> Result<String, SinkError> {
        self.store(name, text.to_string())
    }
}

/// Collects conversation events for assertions.
#[derive(Default)]
pub struct RecordingLogger {
    events: Mutex<Vec<(String, Value)>>,
}

impl RecordingLogger {
    pub fn event_types(&self) -> Vec<String> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .map(|(t, _)| t.clone())
            .collect()
    }

    pub fn events(&self) -> Vec<(String, Value)> {
        self.events.lock().unwrap().clone()
    }
}

impl ConversationLogger for RecordingLogger {
    fn log(&self, event: ConversationEvent) {
        self.events
            .lock()
            .unwrap()
            .push((event.event_type.to_string(), event.payload));
    }
}
