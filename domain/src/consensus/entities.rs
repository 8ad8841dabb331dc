//! Consensus and reviewer board entities

use crate::agent::results::ReviewerResponse;
use crate::session::persona::PersonaId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One reviewer's seat on the board: fixed role plus what the model said.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReviewerEntry {
    pub label: String,
    pub focus: String,
    pub response: ReviewerResponse,
}

impl ReviewerEntry {
    /// Entry carrying the persona's fixed label and focus
    pub fn for_persona(persona: PersonaId, response: ReviewerResponse) -> Self {
        Self {
            label: persona.reviewer_label().to_string(),
            focus: persona.reviewer_focus().to_string(),
            response,
        }
    }
}

/// Reviewer outputs keyed by persona id, iterated in role order.
pub type ReviewerBoard = BTreeMap<PersonaId, ReviewerEntry>;

/// The selected reviewer's full, untruncated view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedPath {
    pub persona_id: PersonaId,
    pub label: String,
    pub focus: String,
    pub top_strengths: Vec<String>,
    pub top_gaps: Vec<String>,
    pub key_questions: Vec<String>,
    pub highest_roi_next_steps_30d: Vec<String>,
    pub customer_requested_changes: Vec<String>,
    pub website_change_recommendations: Vec<String>,
}

/// Merged, prioritized summary derived at finalize time.
///
/// Board sessions fill the selected path and the five prioritized lists;
/// interview and investor sessions project their single report into the same
/// shape. Fields a mode doesn't produce stay empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Consensus {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_persona_path: Option<SelectedPath>,
    pub top_strengths: Vec<String>,
    pub top_gaps: Vec<String>,
    pub investor_narrative_60s: String,
    pub interview_narrative_60s: String,
    pub past_work_leverage: Vec<String>,
    pub highest_roi_next_steps_30d: Vec<String>,
    pub customer_requested_changes: Vec<String>,
    pub website_change_recommendations: Vec<String>,

    // Investor prep only
    pub realistic_investor_questions: Vec<String>,
    pub suggested_strong_answers: Vec<String>,
    pub likely_follow_up_questions: Vec<String>,
    pub diligence_red_flags: Vec<String>,
    pub funding_use_plan: Vec<String>,
}
