//! Request and response bodies of the JSON API

use chartroom_domain::{ContextUpdate, PersonaId, Session, SessionId, SessionMode, TurnResponse};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StartRequest {
    pub mode: String,
    pub submode: String,
    pub resume_text: String,
    pub company_context: String,
    pub projects_text: String,
    pub coding_experience_level: String,
}

impl StartRequest {
    pub fn context_update(&self) -> ContextUpdate {
        context_update(
            &self.resume_text,
            &self.company_context,
            &self.projects_text,
            &self.coding_experience_level,
        )
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct StartResponse {
    pub session_id: SessionId,
    pub mode: SessionMode,
    pub submode: String,
    pub selected_persona: PersonaId,
}

impl From<&Session> for StartResponse {
    fn from(session: &Session) -> Self {
        Self {
            session_id: session.id().clone(),
            mode: session.mode(),
            submode: session.submode().to_string(),
            selected_persona: session.selected_persona(),
        }
    }
}

/// Body of both `/message` and `/message/respond`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MessageRequest {
    pub session_id: String,
    pub message: String,
    pub resume_text: String,
    pub company_context: String,
    pub projects_text: String,
    pub coding_experience_level: String,
}

impl MessageRequest {
    pub fn session_id(&self) -> SessionId {
        SessionId::new(self.session_id.trim())
    }

    pub fn message(&self) -> &str {
        self.message.trim()
    }

    /// Blank message and no context value the session would store
    pub fn is_empty(&self) -> bool {
        self.message().is_empty() && self.context_update().is_empty()
    }

    pub fn context_update(&self) -> ContextUpdate {
        context_update(
            &self.resume_text,
            &self.company_context,
            &self.projects_text,
            &self.coding_experience_level,
        )
    }
}

fn context_update(resume: &str, company: &str, projects: &str, experience: &str) -> ContextUpdate {
    ContextUpdate::default()
        .with_resume(resume)
        .with_company(company)
        .with_projects(projects)
        .with_experience(experience)
}

#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub ok: bool,
    pub messages_count: usize,
    pub company_context_set: bool,
    pub projects_context_set: bool,
    pub resume_set: bool,
}

impl From<&Session> for MessageResponse {
    fn from(session: &Session) -> Self {
        let ctx = session.context();
        Self {
            ok: true,
            messages_count: session.messages().len(),
            company_context_set: !ctx.company_context.is_empty(),
            projects_context_set: !ctx.projects_context.is_empty(),
            resume_set: !ctx.resume_text.is_empty(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RespondResponse {
    pub ok: bool,
    #[serde(flatten)]
    pub turn: TurnResponse,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SelectPersonaRequest {
    #[serde(alias = "boss_id")]
    pub persona_id: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SelectPersonaResponse {
    pub ok: bool,
    pub session_id: SessionId,
    pub selected_persona: PersonaId,
}

impl From<&Session> for SelectPersonaResponse {
    fn from(session: &Session) -> Self {
        Self {
            ok: true,
            session_id: session.id().clone(),
            selected_persona: session.selected_persona(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_message_request_emptiness() {
        let empty: MessageRequest =
            serde_json::from_value(json!({"session_id": "s", "message": "   "})).unwrap();
        assert!(empty.is_empty());

        let with_resume: MessageRequest =
            serde_json::from_value(json!({"session_id": "s", "resume_text": "10 years"})).unwrap();
        assert!(!with_resume.is_empty());

        let experience_only: MessageRequest = serde_json::from_value(
            json!({"session_id": "s", "coding_experience_level": "senior"}),
        )
        .unwrap();
        assert!(!experience_only.is_empty());

        let blank_resume: MessageRequest =
            serde_json::from_value(json!({"session_id": "s", "resume_text": "  "})).unwrap();
        assert!(!blank_resume.is_empty());
    }

    #[test]
    fn test_select_accepts_boss_id_alias() {
        let req: SelectPersonaRequest =
            serde_json::from_value(json!({"boss_id": "persona_2"})).unwrap();
        assert_eq!(req.persona_id, "persona_2");
    }
}
