//! Persona agents and their system instructions.
//!
//! Instruction text is deployment content: it is normally loaded from a
//! prompts directory (`system_<agent>.txt`). The built-in defaults below only
//! pin down the JSON keys each agent must return.

use crate::session::persona::PersonaId;
use std::collections::HashMap;
use std::fmt;

/// Every model-backed agent in the system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AgentKind {
    BoardLiveChat,
    LiveCoachChat,
    PitchBuilder,
    /// Board reviewer bound to one persona's role
    Reviewer(PersonaId),
    InterviewCoach,
    InvestorPrep,
    InterviewSimulator,
}

impl AgentKind {
    pub const ALL: [AgentKind; 9] = [
        AgentKind::BoardLiveChat,
        AgentKind::LiveCoachChat,
        AgentKind::PitchBuilder,
        AgentKind::Reviewer(PersonaId::Persona1),
        AgentKind::Reviewer(PersonaId::Persona2),
        AgentKind::Reviewer(PersonaId::Persona3),
        AgentKind::InterviewCoach,
        AgentKind::InvestorPrep,
        AgentKind::InterviewSimulator,
    ];

    /// Short identifier used in logs and prompt file names
    pub fn as_str(&self) -> &'static str {
        match self {
            AgentKind::BoardLiveChat => "board_live_chat",
            AgentKind::LiveCoachChat => "live_coach_chat",
            AgentKind::PitchBuilder => "pitch_builder",
            AgentKind::Reviewer(PersonaId::Persona1) => "reviewer_pmfit",
            AgentKind::Reviewer(PersonaId::Persona2) => "reviewer_tech",
            AgentKind::Reviewer(PersonaId::Persona3) => "reviewer_gtm",
            AgentKind::InterviewCoach => "interview_coach",
            AgentKind::InvestorPrep => "investor_prep",
            AgentKind::InterviewSimulator => "interview_simulator",
        }
    }

    /// File the system instruction is loaded from
    pub fn file_name(&self) -> String {
        format!("system_{}.txt", self.as_str())
    }

    /// Built-in fallback instruction
    pub fn default_instruction(&self) -> &'static str {
        match self {
            AgentKind::BoardLiveChat => {
                "You are a panel of three customer reviewers listening to a founder. \
Reply in JSON with keys persona_1, persona_2, persona_3, each one or two sentences \
in that reviewer's voice."
            }
            AgentKind::LiveCoachChat => {
                "You are a concise, encouraging coach. Reply in JSON with a single key \
coach_reply containing your next question or feedback."
            }
            AgentKind::PitchBuilder => {
                "You turn a founder's notes into a pitch deck outline. Reply in JSON with \
keys title, slides, investor_narrative_60s, interview_narrative_60s, past_work_leverage."
            }
            AgentKind::Reviewer(PersonaId::Persona1) => {
                "You review a pitch for customer value and problem fit. Reply in JSON with \
keys top_strengths, top_gaps, key_questions, highest_roi_next_steps_30d, \
customer_requested_changes, website_change_recommendations (all lists of strings)."
            }
            AgentKind::Reviewer(PersonaId::Persona2) => {
                "You review a pitch for product usability and technical friction. Reply in \
JSON with keys top_strengths, top_gaps, key_questions, highest_roi_next_steps_30d, \
customer_requested_changes, website_change_recommendations (all lists of strings)."
            }
            AgentKind::Reviewer(PersonaId::Persona3) => {
                "You review a pitch for adoption, messaging and trust signals. Reply in JSON \
with keys top_strengths, top_gaps, key_questions, highest_roi_next_steps_30d, \
customer_requested_changes, website_change_recommendations (all lists of strings)."
            }
            AgentKind::InterviewCoach => {
                "You coach a candidate for a one-on-one interview. Reply in JSON with keys \
top_strengths, top_gaps, project_narrative_60s, interview_narrative_60s, \
past_work_leverage, highest_roi_next_steps_30d."
            }
            AgentKind::InvestorPrep => {
                "You prepare a founder for investor meetings. Reply in JSON with keys \
top_strengths, top_gaps, investor_narrative_60s, highest_roi_next_steps_30d, \
realistic_investor_questions, suggested_strong_answers, likely_follow_up_questions, \
diligence_red_flags, funding_use_plan."
            }
            AgentKind::InterviewSimulator => {
                "You script a realistic mock interview. Reply in JSON with keys \
interview_title, scenario, turns (list of {speaker, message}), coach_notes."
            }
        }
    }
}

impl fmt::Display for AgentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// System instructions per agent, with built-in fallbacks.
#[derive(Debug, Clone, Default)]
pub struct SystemPrompts {
    overrides: HashMap<AgentKind, String>,
}

impl SystemPrompts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override one agent's instruction. Blank text is ignored.
    pub fn with(mut self, kind: AgentKind, instruction: impl Into<String>) -> Self {
        self.set(kind, instruction);
        self
    }

    pub fn set(&mut self, kind: AgentKind, instruction: impl Into<String>) {
        let instruction = instruction.into();
        if !instruction.trim().is_empty() {
            self.overrides.insert(kind, instruction);
        }
    }

    pub fn get(&self, kind: AgentKind) -> &str {
        self.overrides
            .get(&kind)
            .map(String::as_str)
            .unwrap_or_else(|| kind.default_instruction())
    }

    /// Agents using a loaded (non-default) instruction
    pub fn overridden(&self) -> impl Iterator<Item = AgentKind> + '_ {
        self.overrides.keys().copied()
    }
}
