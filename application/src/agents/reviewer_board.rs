//! Reviewer board: three persona reviewers critique the same deck in parallel.

use super::runtime::AgentRuntime;
use crate::ports::model_invoker::InvokeError;
use chartroom_domain::{
    AgentKind, AgentResult, DeckOutline, PersonaId, PromptTemplate, ReviewerBoard, ReviewerEntry,
    ReviewerResponse, SessionContext,
};
use std::sync::Arc;
use tokio::task::JoinSet;
use tracing::{info, warn};

/// Run all three reviewers concurrently and wait for every one of them.
///
/// All reviewers get the same user prompt; each runs under its persona's
/// instruction and model slot. Any reviewer failing fails the board, but only
/// after all three have finished.
pub async fn review(
    runtime: &Arc<AgentRuntime>,
    deck: &DeckOutline,
    transcript: &str,
    ctx: &SessionContext,
) -> Result<ReviewerBoard, InvokeError> {
    let deck_json = serde_json::to_string_pretty(deck.raw().as_map())
        .unwrap_or_else(|_| "{}".to_string());
    let prompt: Arc<str> = PromptTemplate::reviewer(&deck_json, transcript, ctx).into();

    info!("Reviewer board: dispatching {} reviewers", PersonaId::ALL.len());

    let mut join_set = JoinSet::new();
    for persona in PersonaId::ALL {
        let runtime = Arc::clone(runtime);
        let prompt = Arc::clone(&prompt);
        join_set.spawn(async move {
            let result = runtime
                .run::<ReviewerResponse>(AgentKind::Reviewer(persona), persona.model_slot(), &prompt)
                .await;
            (persona, result)
        });
    }

    let mut board = ReviewerBoard::new();
    let mut first_error = None;
    while let Some(joined) = join_set.join_next().await {
        match joined {
            Ok((persona, Ok(response))) => {
                board.insert(persona, ReviewerEntry::for_persona(persona, response));
            }
            Ok((persona, Err(e))) => {
                warn!("Reviewer {} failed: {}", persona, e);
                first_error.get_or_insert(e);
            }
            Err(e) => {
                warn!("Reviewer task join error: {}", e);
                first_error.get_or_insert(InvokeError::TaskFailed(e.to_string()));
            }
        }
    }

    match first_error {
        Some(e) => Err(e),
        None => Ok(board),
    }
}
