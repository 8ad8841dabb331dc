//! Single-call coaching agents: interview coach, investor prep and the
//! mock-interview simulator.

use super::runtime::AgentRuntime;
use crate::ports::model_invoker::InvokeError;
use chartroom_domain::{
    AgentKind, Consensus, InterviewCoaching, InterviewSimulation, InvestorPrepReport, ModelSlot,
    PromptTemplate, SessionContext, SessionMode,
};

pub async fn interview_coach(
    runtime: &AgentRuntime,
    transcript: &str,
    submode: &str,
    ctx: &SessionContext,
) -> Result<InterviewCoaching, InvokeError> {
    let prompt = PromptTemplate::interview_coach(transcript, submode, ctx);
    runtime
        .run(AgentKind::InterviewCoach, ModelSlot::Main, &prompt)
        .await
}

pub async fn investor_prep(
    runtime: &AgentRuntime,
    transcript: &str,
    ctx: &SessionContext,
) -> Result<InvestorPrepReport, InvokeError> {
    let prompt = PromptTemplate::investor_prep(transcript, ctx);
    runtime
        .run(AgentKind::InvestorPrep, ModelSlot::Main, &prompt)
        .await
}

/// Script a mock interview informed by the already-computed consensus
pub async fn interview_simulator(
    runtime: &AgentRuntime,
    mode: SessionMode,
    transcript: &str,
    ctx: &SessionContext,
    consensus: &Consensus,
) -> Result<InterviewSimulation, InvokeError> {
    let consensus_json =
        serde_json::to_string_pretty(consensus).unwrap_or_else(|_| "{}".to_string());
    let prompt = PromptTemplate::interview_simulator(mode, transcript, ctx, &consensus_json);
    runtime
        .run(AgentKind::InterviewSimulator, ModelSlot::Main, &prompt)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BehaviorConfig;
    use crate::testing::{RecordingLogger, ScriptedInvoker, tagged_prompts};
    use serde_json::json;
    use std::sync::Arc;
    use std::time::Duration;

    #[tokio::test]
    async fn test_simulator_prompt_carries_consensus() {
        let invoker = Arc::new(ScriptedInvoker::new().reply(
            AgentKind::InterviewSimulator,
            json!({"interview_title": "Series A", "turns": []}),
        ));
        let runtime = AgentRuntime::new(invoker.clone()).with_prompts(tagged_prompts());
        let consensus = Consensus {
            top_gaps: vec!["no moat".into()],
            ..Consensus::default()
        };

        let sim = interview_simulator(
            &runtime,
            SessionMode::InvestorPitchPrep,
            "we sell shovels",
            &SessionContext::default(),
            &consensus,
        )
        .await
        .unwrap();

        assert_eq!(sim.interview_title, "Series A");
        let call = &invoker.calls_for(AgentKind::InterviewSimulator)[0];
        assert!(call.user_prompt.starts_with("Session mode: investor_pitch_prep"));
        assert!(call.user_prompt.contains("no moat"));
        assert_eq!(call.model, "gemini-1.5-pro");
    }

    #[tokio::test]
    async fn test_degraded_output_is_not_an_error() {
        let invoker = Arc::new(ScriptedInvoker::new().degraded(AgentKind::InterviewCoach));
        let logger = Arc::new(RecordingLogger::default());
        let runtime = AgentRuntime::new(invoker)
            .with_prompts(tagged_prompts())
            .with_conversation_logger(logger.clone());

        let coaching = interview_coach(&runtime, "", "", &SessionContext::default())
            .await
            .unwrap();
        assert!(coaching.top_strengths.is_empty());

        let events = logger.events();
        assert_eq!(events[0].0, "model_invocation");
        assert_eq!(events[0].1["agent"], "interview_coach");
        assert_eq!(events[0].1["degraded"], true);
    }

    #[tokio::test]
    async fn test_timeout_is_an_error() {
        let invoker = Arc::new(ScriptedInvoker::new().with_delay(Duration::from_millis(500)));
        let runtime = AgentRuntime::new(invoker).with_behavior(BehaviorConfig {
            timeout: Some(Duration::from_millis(20)),
        });

        let err = investor_prep(&runtime, "", &SessionContext::default())
            .await
            .unwrap_err();
        assert!(matches!(err, InvokeError::Timeout(_)));
    }
}
