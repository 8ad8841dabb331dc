//! Live conversational replies to a single user turn.

use super::orchestrator::{Orchestrator, OrchestratorError};
use crate::agents::live_chat;
use chartroom_domain::{PersonaId, PersonaReply, SessionId, TurnResponse};
use tracing::debug;

impl Orchestrator {
    /// Reply to `message` in the session's voice(s).
    ///
    /// Does not append `message` to the session; callers that want it in the
    /// transcript add it first with [`Orchestrator::add_message`].
    pub async fn respond_to_message(
        &self,
        id: &SessionId,
        message: &str,
    ) -> Result<TurnResponse, OrchestratorError> {
        let session = self.snapshot(id).await?;
        let mode = session.mode();
        let transcript = session.transcript();
        let ctx = session.context();

        let responses = if mode.is_board() {
            let replies =
                live_chat::board_replies(&self.runtime, message, &transcript, ctx).await?;
            PersonaId::ALL
                .into_iter()
                .map(|persona| PersonaReply::panel(persona, replies.reply(persona)))
                .collect()
        } else {
            let reply =
                live_chat::coach_reply(&self.runtime, mode, message, &transcript, ctx).await?;
            vec![PersonaReply::coach(mode, reply.coach_reply)]
        };
        debug!("Session {}: {} live replies", id, responses.len());

        Ok(TurnResponse {
            session_id: id.clone(),
            mode,
            responses,
        })
    }
}
