//! Typed views over agent outputs.
//!
//! Each result decodes the fields its agent is asked for, with every field
//! defaulting to empty. The full [`ModelOutput`] is kept alongside so
//! serialization reproduces exactly what the model returned, including keys
//! nobody asked for.

use super::output::ModelOutput;
use crate::session::persona::PersonaId;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Common surface of every decoded agent result.
pub trait AgentResult: Sized {
    /// Keys this result understands; anything else lands in [`AgentResult::extra_keys`]
    const KNOWN_KEYS: &'static [&'static str];

    fn from_output(output: ModelOutput) -> Self;

    fn raw(&self) -> &ModelOutput;

    fn extra_keys(&self) -> Vec<String> {
        self.raw().unexpected_keys(Self::KNOWN_KEYS)
    }

    fn is_degraded(&self) -> bool {
        self.raw().is_degraded()
    }
}

/// Serialize as the raw output and deserialize through [`AgentResult::from_output`].
macro_rules! serde_via_raw {
    ($ty:ty) => {
        impl Serialize for $ty {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                self.raw().serialize(serializer)
            }
        }

        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                ModelOutput::deserialize(deserializer).map(<$ty>::from_output)
            }
        }
    };
}

// ==================== Pitch Builder ====================

/// Deck outline produced by the pitch builder.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeckOutline {
    pub investor_narrative_60s: String,
    pub interview_narrative_60s: String,
    pub past_work_leverage: Vec<String>,
    raw: ModelOutput,
}

impl AgentResult for DeckOutline {
    const KNOWN_KEYS: &'static [&'static str] = &[
        "title",
        "slides",
        "investor_narrative_60s",
        "interview_narrative_60s",
        "past_work_leverage",
    ];

    fn from_output(output: ModelOutput) -> Self {
        Self {
            investor_narrative_60s: output.text("investor_narrative_60s"),
            interview_narrative_60s: output.text("interview_narrative_60s"),
            past_work_leverage: output.list("past_work_leverage"),
            raw: output,
        }
    }

    fn raw(&self) -> &ModelOutput {
        &self.raw
    }
}

serde_via_raw!(DeckOutline);

// ==================== Reviewer ====================

/// One board reviewer's structured critique.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReviewerResponse {
    pub top_strengths: Vec<String>,
    pub top_gaps: Vec<String>,
    pub key_questions: Vec<String>,
    pub highest_roi_next_steps_30d: Vec<String>,
    pub customer_requested_changes: Vec<String>,
    pub website_change_recommendations: Vec<String>,
    raw: ModelOutput,
}

impl AgentResult for ReviewerResponse {
    const KNOWN_KEYS: &'static [&'static str] = &[
        "top_strengths",
        "top_gaps",
        "key_questions",
        "highest_roi_next_steps_30d",
        "customer_requested_changes",
        "website_change_recommendations",
    ];

    fn from_output(output: ModelOutput) -> Self {
        Self {
            top_strengths: output.list("top_strengths"),
            top_gaps: output.list("top_gaps"),
            key_questions: output.list("key_questions"),
            highest_roi_next_steps_30d: output.list("highest_roi_next_steps_30d"),
            customer_requested_changes: output.list("customer_requested_changes"),
            website_change_recommendations: output.list("website_change_recommendations"),
            raw: output,
        }
    }

    fn raw(&self) -> &ModelOutput {
        &self.raw
    }
}

serde_via_raw!(ReviewerResponse);

// ==================== Interview Coach ====================

/// Interview coaching report.
///
/// Note the narrative is `project_narrative_60s` here; it surfaces as the
/// consensus `investor_narrative_60s` after projection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InterviewCoaching {
    pub top_strengths: Vec<String>,
    pub top_gaps: Vec<String>,
    pub project_narrative_60s: String,
    pub interview_narrative_60s: String,
    pub past_work_leverage: Vec<String>,
    pub highest_roi_next_steps_30d: Vec<String>,
    pub customer_requested_changes: Vec<String>,
    pub website_change_recommendations: Vec<String>,
    raw: ModelOutput,
}

impl AgentResult for InterviewCoaching {
    const KNOWN_KEYS: &'static [&'static str] = &[
        "top_strengths",
        "top_gaps",
        "project_narrative_60s",
        "interview_narrative_60s",
        "past_work_leverage",
        "highest_roi_next_steps_30d",
        "customer_requested_changes",
        "website_change_recommendations",
    ];

    fn from_output(output: ModelOutput) -> Self {
        Self {
            top_strengths: output.list("top_strengths"),
            top_gaps: output.list("top_gaps"),
            project_narrative_60s: output.text("project_narrative_60s"),
            interview_narrative_60s: output.text("interview_narrative_60s"),
            past_work_leverage: output.list("past_work_leverage"),
            highest_roi_next_steps_30d: output.list("highest_roi_next_steps_30d"),
            customer_requested_changes: output.list("customer_requested_changes"),
            website_change_recommendations: output.list("website_change_recommendations"),
            raw: output,
        }
    }

    fn raw(&self) -> &ModelOutput {
        &self.raw
    }
}

serde_via_raw!(InterviewCoaching);

// ==================== Investor Prep ====================

/// Investor meeting preparation report.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InvestorPrepReport {
    pub top_strengths: Vec<String>,
    pub top_gaps: Vec<String>,
    pub investor_narrative_60s: String,
    pub highest_roi_next_steps_30d: Vec<String>,
    pub realistic_investor_questions: Vec<String>,
    pub suggested_strong_answers: Vec<String>,
    pub likely_follow_up_questions: Vec<String>,
    pub diligence_red_flags: Vec<String>,
    pub funding_use_plan: Vec<String>,
    raw: ModelOutput,
}

impl AgentResult for InvestorPrepReport {
    const KNOWN_KEYS: &'static [&'static str] = &[
        "top_strengths",
        "top_gaps",
        "investor_narrative_60s",
        "highest_roi_next_steps_30d",
        "realistic_investor_questions",
        "suggested_strong_answers",
        "likely_follow_up_questions",
        "diligence_red_flags",
        "funding_use_plan",
    ];

    fn from_output(output: ModelOutput) -> Self {
        Self {
            top_strengths: output.list("top_strengths"),
            top_gaps: output.list("top_gaps"),
            investor_narrative_60s: output.text("investor_narrative_60s"),
            highest_roi_next_steps_30d: output.list("highest_roi_next_steps_30d"),
            realistic_investor_questions: output.list("realistic_investor_questions"),
            suggested_strong_answers: output.list("suggested_strong_answers"),
            likely_follow_up_questions: output.list("likely_follow_up_questions"),
            diligence_red_flags: output.list("diligence_red_flags"),
            funding_use_plan: output.list("funding_use_plan"),
            raw: output,
        }
    }

    fn raw(&self) -> &ModelOutput {
        &self.raw
    }
}

serde_via_raw!(InvestorPrepReport);

// ==================== Interview Simulator ====================

/// One exchange in a simulated interview.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulatedTurn {
    #[serde(default)]
    pub speaker: String,
    #[serde(default)]
    pub message: String,
}

/// Scripted mock interview generated after the consensus is known.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InterviewSimulation {
    pub interview_title: String,
    pub scenario: String,
    pub turns: Vec<SimulatedTurn>,
    pub coach_notes: Vec<String>,
    raw: ModelOutput,
}

impl AgentResult for InterviewSimulation {
    const KNOWN_KEYS: &'static [&'static str] =
        &["interview_title", "scenario", "turns", "coach_notes"];

    fn from_output(output: ModelOutput) -> Self {
        // Turns that are not objects are skipped rather than failing the whole simulation
        let turns = match output.get("turns") {
            Some(serde_json::Value::Array(items)) => items
                .iter()
                .filter_map(|item| serde_json::from_value::<SimulatedTurn>(item.clone()).ok())
                .collect(),
            _ => Vec::new(),
        };
        Self {
            interview_title: output.text("interview_title"),
            scenario: output.text("scenario"),
            turns,
            coach_notes: output.list("coach_notes"),
            raw: output,
        }
    }

    fn raw(&self) -> &ModelOutput {
        &self.raw
    }
}

serde_via_raw!(InterviewSimulation);

// ==================== Live Chat ====================

/// One short in-character reply per board persona.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoardChatReplies {
    raw: ModelOutput,
}

impl BoardChatReplies {
    /// Trimmed reply of one persona; empty when the model skipped it
    pub fn reply(&self, persona: PersonaId) -> String {
        self.raw.text(persona.as_str()).trim().to_string()
    }
}

impl AgentResult for BoardChatReplies {
    const KNOWN_KEYS: &'static [&'static str] = &["persona_1", "persona_2", "persona_3"];

    fn from_output(output: ModelOutput) -> Self {
        Self { raw: output }
    }

    fn raw(&self) -> &ModelOutput {
        &self.raw
    }
}

/// Single coach reply for non-board modes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CoachReply {
    pub coach_reply: String,
    raw: ModelOutput,
}

impl AgentResult for CoachReply {
    const KNOWN_KEYS: &'static [&'static str] = &["coach_reply"];

    fn from_output(output: ModelOutput) -> Self {
        Self {
            coach_reply: output.text("coach_reply").trim().to_string(),
            raw: output,
        }
    }

    fn raw(&self) -> &ModelOutput {
        &self.raw
    }
}
