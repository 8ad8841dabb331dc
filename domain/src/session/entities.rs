//! Session domain entities

use super::mode::SessionMode;
use super::persona::PersonaId;
use crate::orchestration::value_objects::FinalPayload;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque session identifier (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SessionId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Where the session came from, for channel-specific routing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChannelMeta {
    /// Set only for SMS-originated sessions
    pub phone_number: Option<String>,
}

impl ChannelMeta {
    pub fn web() -> Self {
        Self::default()
    }

    pub fn sms(phone_number: impl Into<String>) -> Self {
        Self {
            phone_number: Some(phone_number.into()),
        }
    }
}

/// Background material the user supplies alongside the conversation.
///
/// Each field is last-write-wins: overwritten by a non-empty value, never
/// cleared by an empty one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionContext {
    pub resume_text: String,
    pub company_context: String,
    pub projects_context: String,
    pub coding_experience_level: String,
}

/// A batch of optional context updates arriving with one turn.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContextUpdate {
    pub resume_text: Option<String>,
    pub company_context: Option<String>,
    pub projects_context: Option<String>,
    pub coding_experience_level: Option<String>,
}

impl ContextUpdate {
    pub fn with_resume(mut self, text: impl Into<String>) -> Self {
        self.resume_text = Some(text.into());
        self
    }

    pub fn with_company(mut self, text: impl Into<String>) -> Self {
        self.company_context = Some(text.into());
        self
    }

    pub fn with_projects(mut self, text: impl Into<String>) -> Self {
        self.projects_context = Some(text.into());
        self
    }

    pub fn with_experience(mut self, level: impl Into<String>) -> Self {
        self.coding_experience_level = Some(level.into());
        self
    }

    /// Check if no field carries a non-empty value
    pub fn is_empty(&self) -> bool {
        [
            &self.resume_text,
            &self.company_context,
            &self.projects_context,
            &self.coding_experience_level,
        ]
        .iter()
        .all(|v| v.as_deref().is_none_or(str::is_empty))
    }
}

impl SessionContext {
    /// Apply an update. Only non-empty values overwrite; values are stored as supplied.
    pub fn apply(&mut self, update: ContextUpdate) {
        fn overwrite(slot: &mut String, value: Option<String>) {
            if let Some(value) = value
                && !value.is_empty()
            {
                *slot = value;
            }
        }

        overwrite(&mut self.resume_text, update.resume_text);
        overwrite(&mut self.company_context, update.company_context);
        overwrite(&mut self.projects_context, update.projects_context);
        overwrite(
            &mut self.coding_experience_level,
            update.coding_experience_level,
        );
    }
}

/// One engagement: an id-keyed accumulator of turns and context (Entity)
#[derive(Debug, Clone)]
pub struct Session {
    id: SessionId,
    mode: SessionMode,
    submode: String,
    messages: Vec<String>,
    context: SessionContext,
    channel: ChannelMeta,
    selected_persona: PersonaId,
    final_payload: Option<FinalPayload>,
}

impl Session {
    pub fn new(
        id: SessionId,
        mode: SessionMode,
        submode: impl Into<String>,
        channel: ChannelMeta,
    ) -> Self {
        Self {
            id,
            mode,
            submode: submode.into(),
            messages: Vec::new(),
            context: SessionContext::default(),
            channel,
            selected_persona: PersonaId::default(),
            final_payload: None,
        }
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn mode(&self) -> SessionMode {
        self.mode
    }

    pub fn submode(&self) -> &str {
        &self.submode
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn context(&self) -> &SessionContext {
        &self.context
    }

    pub fn phone_number(&self) -> Option<&str> {
        self.channel.phone_number.as_deref()
    }

    pub fn selected_persona(&self) -> PersonaId {
        self.selected_persona
    }

    pub fn final_payload(&self) -> Option<&FinalPayload> {
        self.final_payload.as_ref()
    }

    /// Append a message unless it is blank. Returns whether it was stored.
    ///
    /// The message is stored exactly as supplied; trimming is only used to
    /// decide emptiness.
    pub fn add_message(&mut self, message: impl Into<String>) -> bool {
        let message = message.into();
        if message.trim().is_empty() {
            return false;
        }
        self.messages.push(message);
        true
    }

    pub fn apply_context(&mut self, update: ContextUpdate) {
        self.context.apply(update);
    }

    pub fn select_persona(&mut self, persona: PersonaId) {
        self.selected_persona = persona;
    }

    /// Replace (not merge) the stored finalize payload
    pub fn set_final_payload(&mut self, payload: FinalPayload) {
        self.final_payload = Some(payload);
    }

    /// Messages joined by newline, in arrival order
    pub fn transcript(&self) -> String {
        self.messages.join("\n")
    }
}
