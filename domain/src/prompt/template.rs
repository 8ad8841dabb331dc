//! User prompt templates for each persona agent

use crate::session::entities::SessionContext;
use crate::session::mode::SessionMode;

/// Placeholder for experience level when the user never gave one
const NOT_PROVIDED: &str = "not provided";

fn experience(ctx: &SessionContext) -> &str {
    if ctx.coding_experience_level.is_empty() {
        NOT_PROVIDED
    } else {
        &ctx.coding_experience_level
    }
}

/// Templates for building the user prompt of each agent call
pub struct PromptTemplate;

impl PromptTemplate {
    /// Deck outline from the founder's conversation
    pub fn pitch_builder(transcript: &str, ctx: &SessionContext) -> String {
        format!(
            "Founder transcript:\n{transcript}\n\n\
Company context (optional, for existing company pitches):\n{}\n\n\
Projects context (optional, startups or personal projects):\n{}\n\n\
Resume text (optional):\n{}",
            ctx.company_context, ctx.projects_context, ctx.resume_text
        )
    }

    /// Shared prompt for all three reviewers
    pub fn reviewer(deck_json: &str, transcript: &str, ctx: &SessionContext) -> String {
        format!(
            "Pitch outline JSON:\n{deck_json}\n\n\
Founder transcript:\n{transcript}\n\n\
Company context (optional):\n{}\n\n\
Projects context (optional, startups or personal projects):\n{}\n\n\
Resume text:\n{}",
            ctx.company_context, ctx.projects_context, ctx.resume_text
        )
    }

    pub fn interview_coach(transcript: &str, submode: &str, ctx: &SessionContext) -> String {
        let submode = if submode.is_empty() { "none" } else { submode };
        format!(
            "Mode: interview_1on1\nSubmode: {submode}\n\n\
Coding experience level: {}\n\n\
Conversation transcript:\n{transcript}\n\n\
Company context (optional):\n{}\n\n\
Projects context (optional, startups or personal projects):\n{}\n\n\
Resume text:\n{}",
            experience(ctx),
            ctx.company_context,
            ctx.projects_context,
            ctx.resume_text
        )
    }

    pub fn investor_prep(transcript: &str, ctx: &SessionContext) -> String {
        format!(
            "Coding experience level: {}\n\n\
Founder transcript:\n{transcript}\n\n\
Company context:\n{}\n\n\
Projects context:\n{}\n\n\
Resume text:\n{}",
            experience(ctx),
            ctx.company_context,
            ctx.projects_context,
            ctx.resume_text
        )
    }

    pub fn interview_simulator(
        mode: SessionMode,
        transcript: &str,
        ctx: &SessionContext,
        consensus_json: &str,
    ) -> String {
        format!(
            "Session mode: {mode}\n\n\
Founder transcript:\n{transcript}\n\n\
Company context:\n{}\n\n\
Projects context:\n{}\n\n\
Resume text:\n{}\n\n\
Consensus summary JSON:\n{consensus_json}\n",
            ctx.company_context, ctx.projects_context, ctx.resume_text
        )
    }

    pub fn board_live_chat(latest: &str, transcript: &str, ctx: &SessionContext) -> String {
        format!(
            "Latest founder message:\n{latest}\n\n\
Coding experience level:\n{}\n\n\
Conversation transcript so far:\n{transcript}\n\n\
Company context:\n{}\n\n\
Projects context:\n{}\n\n\
Resume context:\n{}\n",
            experience(ctx),
            ctx.company_context,
            ctx.projects_context,
            ctx.resume_text
        )
    }

    pub fn live_coach_chat(
        mode: SessionMode,
        latest: &str,
        transcript: &str,
        ctx: &SessionContext,
    ) -> String {
        format!(
            "Mode: {mode}\n\
Coding experience level: {}\n\n\
Latest user message:\n{latest}\n\n\
Conversation transcript so far:\n{transcript}\n\n\
Company context:\n{}\n\n\
Projects context:\n{}\n\n\
Resume context:\n{}\n",
            experience(ctx),
            ctx.company_context,
            ctx.projects_context,
            ctx.resume_text
        )
    }
}
