//! Pitch builder: turns the founder's conversation into a deck outline.

use super::runtime::AgentRuntime;
use crate::ports::model_invoker::InvokeError;
use chartroom_domain::{AgentKind, DeckOutline, ModelSlot, PromptTemplate, SessionContext};

pub async fn build(
    runtime: &AgentRuntime,
    transcript: &str,
    ctx: &SessionContext,
) -> Result<DeckOutline, InvokeError> {
    let prompt = PromptTemplate::pitch_builder(transcript, ctx);
    runtime
        .run(AgentKind::PitchBuilder, ModelSlot::Main, &prompt)
        .await
}
