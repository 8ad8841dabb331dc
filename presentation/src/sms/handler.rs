//! `POST /webhook/sms`: keyword-driven sessions over text messages.
//!
//! Each phone number is bound to at most one active session. Sending a mode
//! digit replaces the binding with a fresh session.

use super::keyword::SmsCommand;
use super::twiml;
use crate::server::{ApiError, AppState};
use axum::Form;
use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use chartroom_application::OrchestratorError;
use chartroom_domain::{Artifact, ChannelMeta, ContextUpdate, SessionId, SessionMode};
use serde::Deserialize;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::{info, warn};

const MENU: &str =
    "Welcome to Chartroom. Reply 1 for Board, 2 for 1-on-1 Interview, 3 for Investor Pitch Prep.";
const NO_SESSION: &str = "Text START to begin.";
const SAVED: &str = "Saved. Keep going, or send DONE to finalize.";

/// Phone number → active session id
#[derive(Default)]
pub struct SmsSessions {
    by_phone: RwLock<HashMap<String, SessionId>>,
}

impl SmsSessions {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn get(&self, phone: &str) -> Option<SessionId> {
        self.by_phone.read().await.get(phone).cloned()
    }

    pub async fn bind(&self, phone: &str, id: SessionId) {
        self.by_phone.write().await.insert(phone.to_string(), id);
    }

    pub async fn unbind(&self, phone: &str) {
        self.by_phone.write().await.remove(phone);
    }
}

/// Provider form fields (Twilio naming)
#[derive(Debug, Default, Deserialize)]
pub struct SmsForm {
    #[serde(rename = "From", default)]
    pub from: String,
    #[serde(rename = "Body", default)]
    pub body: String,
}

fn started_message(mode: SessionMode) -> &'static str {
    match mode {
        SessionMode::BoardInvestors => {
            "Board mode started. Share your startup idea, problem, users, traction, and resume highlights. Send DONE when finished."
        }
        SessionMode::Interview1on1 => {
            "1-on-1 mode started. Describe your program. Optional: mention past work experience leverage. Send DONE when finished."
        }
        SessionMode::InvestorPitchPrep => {
            "Investor prep mode started. Share company context, traction, ask, and likely investor concerns. Send DONE when finished."
        }
    }
}

pub async fn webhook(State(state): State<AppState>, Form(form): Form<SmsForm>) -> Response {
    let phone = form.from.trim();
    if phone.is_empty() {
        return StatusCode::BAD_REQUEST.into_response();
    }

    match reply(&state, phone, &form.body).await {
        Ok(text) => (
            [(header::CONTENT_TYPE, "application/xml")],
            twiml::message(&text),
        )
            .into_response(),
        Err(e) if e.is_not_found() => {
            // Binding outlived its session (evicted); start over
            warn!("SMS session for {} no longer exists", phone);
            state.sms_sessions.unbind(phone).await;
            (
                [(header::CONTENT_TYPE, "application/xml")],
                twiml::message(NO_SESSION),
            )
                .into_response()
        }
        Err(e) => ApiError::from(e).into_response(),
    }
}

async fn reply(state: &AppState, phone: &str, body: &str) -> Result<String, OrchestratorError> {
    let orchestrator = &state.orchestrator;
    let bound = state.sms_sessions.get(phone).await;

    match (SmsCommand::parse(body), bound) {
        (SmsCommand::Menu, _) => Ok(MENU.to_string()),
        (SmsCommand::Begin(mode), _) => {
            let session = orchestrator
                .start_session(mode.as_str(), "", ChannelMeta::sms(phone))
                .await?;
            info!("SMS {} bound to session {}", phone, session.id());
            state.sms_sessions.bind(phone, session.id().clone()).await;
            Ok(started_message(mode).to_string())
        }
        (_, None) => Ok(NO_SESSION.to_string()),
        (SmsCommand::Done, Some(id)) => {
            let payload = orchestrator.finalize(&id).await?;
            let talking_points = payload.file(Artifact::TalkingPoints).unwrap_or("n/a");
            Ok(format!(
                "Session finalized. Talking points file: {} Result page: {}/result/{}",
                talking_points, state.base_url, id
            ))
        }
        (SmsCommand::SelectPersona(persona), Some(id)) => {
            orchestrator.select_persona(&id, persona.as_str()).await?;
            Ok(format!(
                "Selected {}. Keep sharing details, then send DONE.",
                persona
            ))
        }
        (SmsCommand::Text(text), Some(id)) => {
            orchestrator
                .add_message(&id, &text, ContextUpdate::default())
                .await?;
            Ok(SAVED.to_string())
        }
    }
}
