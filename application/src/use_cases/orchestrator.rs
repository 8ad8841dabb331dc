//! Session orchestrator
//!
//! Drives a session through create → accumulate → (select persona) →
//! finalize. Finalize may be repeated; each run replaces the stored payload.
//!
//! The orchestrator re-validates mode and persona ids itself so transport
//! adapters can hand raw strings straight through.

use crate::agents::AgentRuntime;
use crate::ports::model_invoker::InvokeError;
use crate::ports::output_sink::{OutputSink, SinkError};
use crate::session_store::SessionStore;
use chartroom_domain::{
    ChannelMeta, ContextUpdate, DomainError, PersonaId, Session, SessionId, SessionMode,
    SessionSummary,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};
use uuid::Uuid;

/// Errors returned by session operations
#[derive(Error, Debug)]
pub enum OrchestratorError {
    #[error("Session not found: {0}")]
    SessionNotFound(SessionId),

    #[error("Invalid mode: {0}")]
    InvalidMode(String),

    #[error("{0}")]
    InvalidPersona(DomainError),

    #[error("Model unavailable: {0}")]
    ModelUnavailable(#[from] InvokeError),

    #[error("Output unavailable: {0}")]
    OutputUnavailable(#[from] SinkError),
}

impl From<DomainError> for OrchestratorError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::InvalidMode(mode) => OrchestratorError::InvalidMode(mode),
            e @ DomainError::InvalidPersona(_) => OrchestratorError::InvalidPersona(e),
        }
    }
}

impl OrchestratorError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, OrchestratorError::SessionNotFound(_))
    }

    /// Caller supplied a value outside a closed set
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            OrchestratorError::InvalidMode(_) | OrchestratorError::InvalidPersona(_)
        )
    }
}

/// Core of the system: owns the session store and runs the agents.
pub struct Orchestrator {
    pub(super) store: Arc<SessionStore>,
    pub(super) runtime: Arc<AgentRuntime>,
    pub(super) sink: Arc<dyn OutputSink>,
}

impl Orchestrator {
    pub fn new(runtime: AgentRuntime, sink: Arc<dyn OutputSink>) -> Self {
        Self {
            store: Arc::new(SessionStore::new()),
            runtime: Arc::new(runtime),
            sink,
        }
    }

    /// Share an externally owned store (e.g. one an eviction task also holds)
    pub fn with_store(mut self, store: Arc<SessionStore>) -> Self {
        self.store = store;
        self
    }

    pub fn store(&self) -> &Arc<SessionStore> {
        &self.store
    }

    /// Create a session with a fresh random id and register it.
    pub async fn start_session(
        &self,
        mode: &str,
        submode: &str,
        channel: ChannelMeta,
    ) -> Result<Session, OrchestratorError> {
        let mode: SessionMode = mode.parse()?;
        let id = SessionId::new(Uuid::new_v4().to_string());
        let session = Session::new(id, mode, submode, channel);

        info!("Session {} started in {} mode", session.id(), mode);
        self.store.insert(session.clone()).await;
        Ok(session)
    }

    /// Append a message (if non-blank) and apply context updates.
    ///
    /// All-empty input is a valid no-op that still returns the session.
    pub async fn add_message(
        &self,
        id: &SessionId,
        message: &str,
        update: ContextUpdate,
    ) -> Result<Session, OrchestratorError> {
        self.store
            .with_session(id, |session| {
                let appended = session.add_message(message);
                session.apply_context(update);
                debug!(
                    "Session {}: message appended={}, {} messages",
                    session.id(),
                    appended,
                    session.messages().len()
                );
                session.clone()
            })
            .await
            .ok_or_else(|| OrchestratorError::SessionNotFound(id.clone()))
    }

    /// Select the board persona whose critique takes priority.
    ///
    /// The session is looked up first, so an unknown id is reported as not
    /// found even when the persona is also invalid.
    pub async fn select_persona(
        &self,
        id: &SessionId,
        persona_id: &str,
    ) -> Result<Session, OrchestratorError> {
        if !self.store.contains(id).await {
            return Err(OrchestratorError::SessionNotFound(id.clone()));
        }
        let persona: PersonaId = persona_id.parse()?;
        self.store
            .with_session(id, |session| {
                session.select_persona(persona);
                info!("Session {} selected {}", session.id(), persona);
                session.clone()
            })
            .await
            .ok_or_else(|| OrchestratorError::SessionNotFound(id.clone()))
    }

    /// Summary of a session, including the latest finalize payload if any
    pub async fn result(&self, id: &SessionId) -> Result<SessionSummary, OrchestratorError> {
        self.store
            .with_session(id, |session| SessionSummary::from(&*session))
            .await
            .ok_or_else(|| OrchestratorError::SessionNotFound(id.clone()))
    }

    pub(super) async fn snapshot(&self, id: &SessionId) -> Result<Session, OrchestratorError> {
        self.store
            .snapshot(id)
            .await
            .ok_or_else(|| OrchestratorError::SessionNotFound(id.clone()))
    }
}
