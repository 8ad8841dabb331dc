//! Finalize: run the mode pipeline, persist artifacts, store the payload.
//!
//! Model calls run on a snapshot of the session; no lock is held while the
//! agents work. The payload is written back under the session lock at the
//! end, so concurrent finalizes of one session resolve last-writer-wins.

use super::orchestrator::{Orchestrator, OrchestratorError};
use crate::agents::{coaching, pitch_builder, reviewer_board};
use crate::ports::conversation_logger::ConversationEvent;
use crate::ports::output_sink::SinkError;
use chartroom_domain::report::talking_points;
use chartroom_domain::{
    Artifact, Consensus, FinalPayload, ModeReport, Session, SessionId, SessionMode,
    merge_reviewer_consensus,
};
use chrono::{Local, Utc};
use serde::Serialize;
use serde_json::{Value, json};
use std::collections::BTreeMap;
use tracing::info;

/// Locators of the artifacts written so far, keyed by artifact
#[derive(Default)]
struct WrittenFiles(BTreeMap<String, String>);

impl WrittenFiles {
    fn record(&mut self, artifact: Artifact, locator: String) {
        self.0.insert(artifact.key().to_string(), locator);
    }
}

fn to_json(artifact: Artifact, value: &impl Serialize) -> Result<Value, SinkError> {
    serde_json::to_value(value).map_err(|e| SinkError::Encode {
        name: artifact.sink_label().to_string(),
        reason: e.to_string(),
    })
}

impl Orchestrator {
    /// Produce the durable report set for a session.
    ///
    /// Repeatable: each call runs the pipeline again, writes new artifacts
    /// and replaces the stored payload.
    pub async fn finalize(&self, id: &SessionId) -> Result<FinalPayload, OrchestratorError> {
        let session = self.snapshot(id).await?;
        let mode = session.mode();
        info!(
            "Finalizing session {} ({} mode, {} messages)",
            id,
            mode,
            session.messages().len()
        );

        let mut files = WrittenFiles::default();
        let (report, consensus) = match mode {
            SessionMode::BoardInvestors => self.finalize_board(&session, &mut files).await?,
            SessionMode::Interview1on1 => self.finalize_interview(&session, &mut files).await?,
            SessionMode::InvestorPitchPrep => {
                self.finalize_investor_prep(&session, &mut files).await?
            }
        };

        let transcript = session.transcript();
        let mock_interview = coaching::interview_simulator(
            &self.runtime,
            mode,
            &transcript,
            session.context(),
            &consensus,
        )
        .await?;
        self.write_json(Artifact::MockInterview, &mock_interview, &mut files)
            .await?;

        let ctx = session.context();
        let payload = FinalPayload {
            mode,
            submode: session.submode().to_string(),
            company_context: ctx.company_context.clone(),
            projects_context: ctx.projects_context.clone(),
            report,
            consensus,
            mock_interview,
            files: files.0,
            generated_at: Utc::now().to_rfc3339(),
        };

        let stored = payload.clone();
        self.store
            .with_session(id, move |s| s.set_final_payload(stored))
            .await
            .ok_or_else(|| OrchestratorError::SessionNotFound(id.clone()))?;

        self.runtime
            .conversation_logger()
            .log(ConversationEvent::new(
                "session_finalized",
                json!({
                    "session_id": id.as_str(),
                    "mode": mode.as_str(),
                    "files": &payload.files,
                }),
            ));
        info!("Session {} finalized: {} artifacts", id, payload.files.len());
        Ok(payload)
    }

    async fn finalize_board(
        &self,
        session: &Session,
        files: &mut WrittenFiles,
    ) -> Result<(ModeReport, Consensus), OrchestratorError> {
        let transcript = session.transcript();
        let ctx = session.context();

        let deck = pitch_builder::build(&self.runtime, &transcript, ctx).await?;
        let reviewers = reviewer_board::review(&self.runtime, &deck, &transcript, ctx).await?;
        let consensus = merge_reviewer_consensus(&reviewers, &deck, session.selected_persona());

        self.write_json(Artifact::DeckOutline, &deck, files).await?;
        let board_report = json!({
            "reviewers": to_json(Artifact::ReviewerBoardReport, &reviewers)?,
            "consensus": to_json(Artifact::ReviewerBoardReport, &consensus)?,
        });
        self.write_json(Artifact::ReviewerBoardReport, &board_report, files)
            .await?;
        self.write_talking_points(session.mode(), &consensus, files)
            .await?;

        let report = ModeReport::Board {
            selected_persona: session.selected_persona(),
            deck,
            reviewers,
        };
        Ok((report, consensus))
    }

    async fn finalize_interview(
        &self,
        session: &Session,
        files: &mut WrittenFiles,
    ) -> Result<(ModeReport, Consensus), OrchestratorError> {
        let ctx = session.context();
        let coach = coaching::interview_coach(
            &self.runtime,
            &session.transcript(),
            session.submode(),
            ctx,
        )
        .await?;
        let consensus = Consensus::from_interview(&coach);

        self.write_json(Artifact::InterviewReport, &coach, files)
            .await?;
        self.write_talking_points(session.mode(), &consensus, files)
            .await?;

        let report = ModeReport::Interview {
            coding_experience_level: ctx.coding_experience_level.clone(),
            interview_coach: coach,
        };
        Ok((report, consensus))
    }

    async fn finalize_investor_prep(
        &self,
        session: &Session,
        files: &mut WrittenFiles,
    ) -> Result<(ModeReport, Consensus), OrchestratorError> {
        let ctx = session.context();
        let prep = coaching::investor_prep(&self.runtime, &session.transcript(), ctx).await?;
        let consensus = Consensus::from_investor_prep(&prep);

        self.write_json(Artifact::InvestorPrepReport, &prep, files)
            .await?;
        self.write_talking_points(session.mode(), &consensus, files)
            .await?;

        let report = ModeReport::InvestorPrep {
            coding_experience_level: ctx.coding_experience_level.clone(),
            investor_prep: prep,
        };
        Ok((report, consensus))
    }

    async fn write_json(
        &self,
        artifact: Artifact,
        value: &impl Serialize,
        files: &mut WrittenFiles,
    ) -> Result<(), SinkError> {
        let value = to_json(artifact, value)?;
        let locator = self
            .sink
            .write_structured(artifact.sink_label(), &value)
            .await?;
        files.record(artifact, locator);
        Ok(())
    }

    async fn write_talking_points(
        &self,
        mode: SessionMode,
        consensus: &Consensus,
        files: &mut WrittenFiles,
    ) -> Result<(), SinkError> {
        let date = Local::now().format("%Y-%m-%d %H:%M").to_string();
        let text = talking_points::render(mode, consensus, &date);
        let artifact = Artifact::TalkingPoints;
        let locator = self.sink.write_text(artifact.sink_label(), &text).await?;
        files.record(artifact, locator);
        Ok(())
    }
}
