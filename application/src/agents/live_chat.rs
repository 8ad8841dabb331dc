//! Conversational agents answering a single user turn.

use super::runtime::AgentRuntime;
use crate::ports::model_invoker::InvokeError;
use chartroom_domain::{
    AgentKind, BoardChatReplies, CoachReply, ModelSlot, PromptTemplate, SessionContext,
    SessionMode,
};

/// One in-character reply per board persona
pub async fn board_replies(
    runtime: &AgentRuntime,
    latest: &str,
    transcript: &str,
    ctx: &SessionContext,
) -> Result<BoardChatReplies, InvokeError> {
    let prompt = PromptTemplate::board_live_chat(latest, transcript, ctx);
    runtime
        .run(AgentKind::BoardLiveChat, ModelSlot::Main, &prompt)
        .await
}

/// Single coach reply for interview and investor sessions
pub async fn coach_reply(
    runtime: &AgentRuntime,
    mode: SessionMode,
    latest: &str,
    transcript: &str,
    ctx: &SessionContext,
) -> Result<CoachReply, InvokeError> {
    let prompt = PromptTemplate::live_coach_chat(mode, latest, transcript, ctx);
    runtime
        .run(AgentKind::LiveCoachChat, ModelSlot::Main, &prompt)
        .await
}
