//! Projection of single-agent reports into the consensus shape.

use super::entities::Consensus;
use crate::agent::results::{InterviewCoaching, InvestorPrepReport};

impl Consensus {
    /// Interview coaching → consensus.
    ///
    /// The coach's `project_narrative_60s` is surfaced as
    /// `investor_narrative_60s` so downstream rendering treats every mode alike.
    pub fn from_interview(coach: &InterviewCoaching) -> Self {
        Self {
            top_strengths: coach.top_strengths.clone(),
            top_gaps: coach.top_gaps.clone(),
            investor_narrative_60s: coach.project_narrative_60s.clone(),
            interview_narrative_60s: coach.interview_narrative_60s.clone(),
            past_work_leverage: coach.past_work_leverage.clone(),
            highest_roi_next_steps_30d: coach.highest_roi_next_steps_30d.clone(),
            customer_requested_changes: coach.customer_requested_changes.clone(),
            website_change_recommendations: coach.website_change_recommendations.clone(),
            ..Self::default()
        }
    }

    /// Investor prep → consensus with the investor-specific lists
    pub fn from_investor_prep(prep: &InvestorPrepReport) -> Self {
        Self {
            top_strengths: prep.top_strengths.clone(),
            top_gaps: prep.top_gaps.clone(),
            investor_narrative_60s: prep.investor_narrative_60s.clone(),
            highest_roi_next_steps_30d: prep.highest_roi_next_steps_30d.clone(),
            realistic_investor_questions: prep.realistic_investor_questions.clone(),
            suggested_strong_answers: prep.suggested_strong_answers.clone(),
            likely_follow_up_questions: prep.likely_follow_up_questions.clone(),
            diligence_red_flags: prep.diligence_red_flags.clone(),
            funding_use_plan: prep.funding_use_plan.clone(),
            ..Self::default()
        }
    }
}
