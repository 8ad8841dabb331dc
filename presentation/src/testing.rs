//! Port doubles and request helpers for the HTTP and SMS tests.

use crate::server::{self, AppState};
use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use chartroom_application::{
    AgentRuntime, InvokeError, ModelInvoker, Orchestrator, OutputSink, SinkError,
};
use chartroom_domain::{Model, ModelOutput};
use serde_json::{Value, json};
use std::sync::Arc;
use std::sync::Mutex;
use tower::ServiceExt;

pub const BASE_URL: &str = "http://test.local";

/// Answers every agent with one object carrying every agent's keys.
pub struct CannedInvoker {
    fail: bool,
}

impl CannedInvoker {
    pub fn new() -> Self {
        Self { fail: false }
    }

    pub fn failing() -> Self {
        Self { fail: true }
    }
}

#[async_trait]
impl ModelInvoker for CannedInvoker {
    async fn invoke(
        &self,
        model: &Model,
        _system_instruction: &str,
        _user_prompt: &str,
    ) -> Result<ModelOutput, InvokeError> {
        if self.fail {
            return Err(InvokeError::unavailable(model.as_str(), "quota exceeded"));
        }
        let reply = json!({
            "persona_1": "Who pays?",
            "persona_2": "Is setup hard?",
            "persona_3": "Why trust you?",
            "coach_reply": "Tell me more.",
            "title": "Acme",
            "investor_narrative_60s": "We help dentists.",
            "top_strengths": ["clear pain"],
            "top_gaps": ["pricing"],
            "interview_title": "Mock",
            "turns": [{"speaker": "Interviewer", "message": "Walk me through it."}]
        });
        Ok(ModelOutput::from_text(&reply.to_string()))
    }
}

/// Keeps artifacts in memory; locators are `mem://<name>/<n>`.
#[derive(Default)]
pub struct MemorySink {
    written: Mutex<Vec<String>>,
}

impl MemorySink {
    fn push(&self, name: &str) -> String {
        let mut written = self.written.lock().unwrap();
        let locator = format!("mem://{}/{}", name, written.len());
        written.push(locator.clone());
        locator
    }
}

#[async_trait]
impl OutputSink for MemorySink {
    async fn write_structured(&self, name: &str, _payload: &Value) -> Result<String, SinkError> {
        Ok(self.push(name))
    }

    async fn write_text(&self, name: &str, _text: &str) -> Result<String, SinkError> {
        Ok(self.push(name))
    }
}

pub fn app_state(invoker: CannedInvoker) -> AppState {
    let runtime = AgentRuntime::new(Arc::new(invoker));
    let orchestrator = Orchestrator::new(runtime, Arc::new(MemorySink::default()));
    AppState::new(Arc::new(orchestrator), BASE_URL)
}

pub fn app(state: AppState) -> Router {
    server::router(state)
}

pub fn json_post(uri: &str, body: Value) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

/// Form-encoded SMS webhook call; `body` must already be URL-safe
pub fn sms(from: &str, body: &str) -> Request<Body> {
    Request::post("/webhook/sms")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(format!("From={}&Body={}", from, body)))
        .unwrap()
}

/// Run one request; returns status, content type and raw body text
pub async fn send_raw(app: &Router, req: Request<Body>) -> (StatusCode, String, String) {
    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let content_type = resp
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, content_type, String::from_utf8(bytes.to_vec()).unwrap())
}

/// Run one request and decode a JSON body
pub async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let (status, _, body) = send_raw(app, req).await;
    let value = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_str(&body).unwrap()
    };
    (status, value)
}
