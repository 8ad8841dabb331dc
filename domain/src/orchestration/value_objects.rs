//! Orchestration value objects - the outputs of each session operation.
//!
//! - [`FinalPayload`] - everything a finalize produced, stored on the session
//! - [`SessionSummary`] - the read model returned by the result operation
//! - [`TurnResponse`] - conversational replies to one user turn
//! - [`Artifact`] - names of the files a finalize persists

use crate::agent::results::{DeckOutline, InterviewCoaching, InterviewSimulation, InvestorPrepReport};
use crate::consensus::{Consensus, ReviewerBoard};
use crate::session::entities::{Session, SessionId};
use crate::session::mode::SessionMode;
use crate::session::persona::PersonaId;
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;

/// Persisted outputs of a finalize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Artifact {
    DeckOutline,
    ReviewerBoardReport,
    InterviewReport,
    InvestorPrepReport,
    TalkingPoints,
    MockInterview,
}

impl Artifact {
    /// Key under `files` in the payload
    pub fn key(&self) -> &'static str {
        match self {
            Artifact::DeckOutline => "deck_outline",
            Artifact::ReviewerBoardReport => "reviewer_board_report",
            Artifact::InterviewReport => "interview_report",
            Artifact::InvestorPrepReport => "investor_prep_report",
            Artifact::TalkingPoints => "talking_points",
            Artifact::MockInterview => "mock_interview",
        }
    }

    /// Label handed to the output sink (becomes the file name prefix)
    pub fn sink_label(&self) -> &'static str {
        match self {
            Artifact::InterviewReport => "interview_coach_report",
            other => other.key(),
        }
    }
}

/// Mode-specific raw results, flattened into [`FinalPayload`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ModeReport {
    Board {
        selected_persona: PersonaId,
        deck: DeckOutline,
        reviewers: ReviewerBoard,
    },
    Interview {
        coding_experience_level: String,
        interview_coach: InterviewCoaching,
    },
    InvestorPrep {
        coding_experience_level: String,
        investor_prep: InvestorPrepReport,
    },
}

/// Everything one finalize produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FinalPayload {
    pub mode: SessionMode,
    pub submode: String,
    pub company_context: String,
    pub projects_context: String,
    #[serde(flatten)]
    pub report: ModeReport,
    pub consensus: Consensus,
    pub mock_interview: InterviewSimulation,
    /// Artifact key → sink locator
    pub files: BTreeMap<String, String>,
    /// RFC 3339 timestamp
    pub generated_at: String,
}

impl FinalPayload {
    pub fn file(&self, artifact: Artifact) -> Option<&str> {
        self.files.get(artifact.key()).map(String::as_str)
    }
}

fn final_or_empty<S: Serializer>(
    payload: &Option<FinalPayload>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match payload {
        Some(payload) => payload.serialize(serializer),
        None => serde_json::Map::new().serialize(serializer),
    }
}

/// Read model of a session.
#[derive(Debug, Clone, Serialize)]
pub struct SessionSummary {
    pub session_id: SessionId,
    pub mode: SessionMode,
    pub submode: String,
    pub selected_persona: PersonaId,
    pub company_context: String,
    pub projects_context: String,
    pub coding_experience_level: String,
    pub messages_count: usize,
    pub has_final: bool,
    /// Latest payload, or `{}` before the first finalize
    #[serde(rename = "final", serialize_with = "final_or_empty")]
    pub final_payload: Option<FinalPayload>,
}

impl From<&Session> for SessionSummary {
    fn from(session: &Session) -> Self {
        let ctx = session.context();
        Self {
            session_id: session.id().clone(),
            mode: session.mode(),
            submode: session.submode().to_string(),
            selected_persona: session.selected_persona(),
            company_context: ctx.company_context.clone(),
            projects_context: ctx.projects_context.clone(),
            coding_experience_level: ctx.coding_experience_level.clone(),
            messages_count: session.messages().len(),
            has_final: session.final_payload().is_some(),
            final_payload: session.final_payload().cloned(),
        }
    }
}

/// Persona id used for the single coach reply
pub const COACH_ID: &str = "coach";

/// One conversational reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PersonaReply {
    pub persona_id: String,
    pub label: String,
    pub message: String,
}

impl PersonaReply {
    pub fn panel(persona: PersonaId, message: impl Into<String>) -> Self {
        Self {
            persona_id: persona.as_str().to_string(),
            label: persona.panel_label().to_string(),
            message: message.into(),
        }
    }

    pub fn coach(mode: SessionMode, message: impl Into<String>) -> Self {
        Self {
            persona_id: COACH_ID.to_string(),
            label: mode.coach_label().to_string(),
            message: message.into(),
        }
    }
}

/// Replies to one user turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TurnResponse {
    pub session_id: SessionId,
    pub mode: SessionMode,
    pub responses: Vec<PersonaReply>,
}
