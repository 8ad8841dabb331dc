//! HTTP server: the JSON session API and the SMS webhook.
//!
//! | Route | Operation |
//! |-------|-----------|
//! | `POST /api/session/start` | start a session (optionally with context) |
//! | `POST /api/session/message` | append a message and/or context |
//! | `POST /api/session/message/respond` | append, then get live replies |
//! | `POST /api/session/{id}/finalize` | run the agents, write artifacts |
//! | `POST /api/session/{id}/select-persona` | choose the prioritized reviewer |
//! | `GET /api/session/{id}/result` | session summary and latest payload |
//! | `GET /result/{id}` | same summary, linked from SMS replies |
//! | `POST /webhook/sms` | SMS keyword dispatcher (TwiML reply) |
//! | `GET /api/health` | liveness |

pub mod dto;
mod error;
mod routes;

pub use error::ApiError;

use crate::sms::{self, SmsSessions};
use axum::Router;
use axum::routing::{get, post};
use chartroom_application::Orchestrator;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tracing::info;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub orchestrator: Arc<Orchestrator>,
    /// Phone number → active session, owned by the SMS channel
    pub sms_sessions: Arc<SmsSessions>,
    /// Public URL prefix for result links
    pub base_url: Arc<str>,
}

impl AppState {
    pub fn new(orchestrator: Arc<Orchestrator>, base_url: &str) -> Self {
        Self {
            orchestrator,
            sms_sessions: Arc::new(SmsSessions::new()),
            base_url: Arc::from(base_url.trim_end_matches('/')),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(routes::health))
        .route("/api/session/start", post(routes::start_session))
        .route("/api/session/message", post(routes::add_message))
        .route("/api/session/message/respond", post(routes::respond))
        .route("/api/session/:session_id/finalize", post(routes::finalize))
        .route(
            "/api/session/:session_id/select-persona",
            post(routes::select_persona),
        )
        .route("/api/session/:session_id/result", get(routes::result))
        .route("/result/:session_id", get(routes::result))
        .route("/webhook/sms", post(sms::webhook))
        .with_state(state)
}

/// Serve until `shutdown` is cancelled, then drain in-flight requests.
pub async fn serve(
    listener: TcpListener,
    app: Router,
    shutdown: CancellationToken,
) -> std::io::Result<()> {
    if let Ok(addr) = listener.local_addr() {
        info!("Listening on http://{}", addr);
    }
    axum::serve(listener, app)
        .with_graceful_shutdown(async move { shutdown.cancelled().await })
        .await
}
