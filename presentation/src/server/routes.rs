//! JSON API handlers

use super::AppState;
use super::dto::{
    MessageRequest, MessageResponse, RespondResponse, SelectPersonaRequest,
    SelectPersonaResponse, StartRequest, StartResponse,
};
use super::error::ApiError;
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use chartroom_domain::{ChannelMeta, FinalPayload, SessionId, SessionSummary};
use serde_json::{Value, json};

const EMPTY_MESSAGE: &str =
    "Provide at least one of: message, resume_text, company_context, projects_text";

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// `POST /api/session/start`
pub async fn start_session(
    State(state): State<AppState>,
    payload: Result<Json<StartRequest>, JsonRejection>,
) -> Result<Json<StartResponse>, ApiError> {
    let Json(req) = payload?;
    let orchestrator = &state.orchestrator;

    let mut session = orchestrator
        .start_session(&req.mode, &req.submode, ChannelMeta::web())
        .await?;
    let update = req.context_update();
    if !update.is_empty() {
        session = orchestrator.add_message(session.id(), "", update).await?;
    }
    Ok(Json(StartResponse::from(&session)))
}

/// `POST /api/session/message`
pub async fn add_message(
    State(state): State<AppState>,
    payload: Result<Json<MessageRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Json(req) = payload?;
    if req.is_empty() {
        return Err(ApiError::BadRequest(EMPTY_MESSAGE.to_string()));
    }

    let session = state
        .orchestrator
        .add_message(&req.session_id(), req.message(), req.context_update())
        .await?;
    Ok(Json(MessageResponse::from(&session)))
}

/// `POST /api/session/message/respond`: record the turn, then reply to it
pub async fn respond(
    State(state): State<AppState>,
    payload: Result<Json<MessageRequest>, JsonRejection>,
) -> Result<Json<RespondResponse>, ApiError> {
    let Json(req) = payload?;
    if req.message().is_empty() {
        return Err(ApiError::BadRequest("Provide a message".to_string()));
    }

    let id = req.session_id();
    let orchestrator = &state.orchestrator;
    orchestrator
        .add_message(&id, req.message(), req.context_update())
        .await?;
    let turn = orchestrator.respond_to_message(&id, req.message()).await?;
    Ok(Json(RespondResponse { ok: true, turn }))
}

/// `POST /api/session/{id}/finalize`
pub async fn finalize(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<Json<FinalPayload>, ApiError> {
    let payload = state
        .orchestrator
        .finalize(&SessionId::new(session_id))
        .await
        .map_err(ApiError::finalize)?;
    Ok(Json(payload))
}

/// `POST /api/session/{id}/select-persona`
pub async fn select_persona(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
    payload: Result<Json<SelectPersonaRequest>, JsonRejection>,
) -> Result<Json<SelectPersonaResponse>, ApiError> {
    let Json(req) = payload?;
    let session = state
        .orchestrator
        .select_persona(&SessionId::new(session_id), req.persona_id.trim())
        .await?;
    Ok(Json(SelectPersonaResponse::from(&session)))
}

/// `GET /api/session/{id}/result` and `GET /result/{id}`
pub async fn result(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<Json<SessionSummary>, ApiError> {
    let summary = state.orchestrator.result(&SessionId::new(session_id)).await?;
    Ok(Json(summary))
}

#[cfg(test)]
mod tests {
    use crate::testing::{CannedInvoker, app, app_state, get, json_post, send};
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use serde_json::json;

    async fn start(app: &axum::Router, mode: &str) -> String {
        let (status, body) = send(app, json_post("/api/session/start", json!({"mode": mode}))).await;
        assert_eq!(status, StatusCode::OK);
        body["session_id"].as_str().unwrap().to_string()
    }

    #[tokio::test]
    async fn test_health() {
        let app = app(app_state(CannedInvoker::new()));
        let (status, body) = send(&app, get("/api/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_start_applies_initial_context() {
        let app = app(app_state(CannedInvoker::new()));
        let (status, body) = send(
            &app,
            json_post(
                "/api/session/start",
                json!({"mode": "interview_1on1", "submode": "swe", "company_context": "Acme", "coding_experience_level": "senior"}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["mode"], "interview_1on1");
        assert_eq!(body["submode"], "swe");
        assert_eq!(body["selected_persona"], "persona_1");

        let id = body["session_id"].as_str().unwrap();
        let (_, summary) = send(&app, get(&format!("/api/session/{}/result", id))).await;
        assert_eq!(summary["company_context"], "Acme");
        assert_eq!(summary["coding_experience_level"], "senior");
        assert_eq!(summary["messages_count"], 0);
        assert_eq!(summary["final"], json!({}));
    }

    #[tokio::test]
    async fn test_start_invalid_mode_is_400() {
        let app = app(app_state(CannedInvoker::new()));
        let (status, body) =
            send(&app, json_post("/api/session/start", json!({"mode": "board"}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("board"));
    }

    #[tokio::test]
    async fn test_malformed_json_is_400() {
        let app = app(app_state(CannedInvoker::new()));
        let req = Request::post("/api/session/start")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap();
        let (status, body) = send(&app, req).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn test_add_message() {
        let app = app(app_state(CannedInvoker::new()));
        let id = start(&app, "board_investors").await;

        let (status, body) = send(
            &app,
            json_post(
                "/api/session/message",
                json!({"session_id": id, "message": "  We sell to dentists ", "resume_text": "ex-Stripe"}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "ok": true,
                "messages_count": 1,
                "company_context_set": false,
                "projects_context_set": false,
                "resume_set": true
            })
        );
    }

    #[tokio::test]
    async fn test_add_message_requires_content() {
        let app = app(app_state(CannedInvoker::new()));
        let id = start(&app, "board_investors").await;

        let (status, body) = send(
            &app,
            json_post("/api/session/message", json!({"session_id": id, "message": "  "})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body["error"],
            "Provide at least one of: message, resume_text, company_context, projects_text"
        );
    }

    #[tokio::test]
    async fn test_add_message_experience_only() {
        let app = app(app_state(CannedInvoker::new()));
        let id = start(&app, "interview_1on1").await;

        let (status, body) = send(
            &app,
            json_post(
                "/api/session/message",
                json!({"session_id": id, "coding_experience_level": "senior"}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["messages_count"], 0);

        let (_, summary) = send(&app, get(&format!("/api/session/{}/result", id))).await;
        assert_eq!(summary["coding_experience_level"], "senior");
    }

    #[tokio::test]
    async fn test_unknown_session_is_404() {
        let app = app(app_state(CannedInvoker::new()));
        let not_found = json!({"error": "session not found"});

        let (status, body) = send(
            &app,
            json_post("/api/session/message", json!({"session_id": "nope", "message": "hi"})),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, not_found);

        for req in [
            json_post("/api/session/nope/finalize", json!({})),
            json_post("/api/session/nope/select-persona", json!({"persona_id": "persona_9"})),
            get("/api/session/nope/result"),
            get("/result/nope"),
        ] {
            let (status, body) = send(&app, req).await;
            assert_eq!(status, StatusCode::NOT_FOUND);
            assert_eq!(body, not_found);
        }
    }

    #[tokio::test]
    async fn test_select_persona() {
        let app = app(app_state(CannedInvoker::new()));
        let id = start(&app, "board_investors").await;
        let uri = format!("/api/session/{}/select-persona", id);

        let (status, body) = send(&app, json_post(&uri, json!({"persona_id": "persona_9"}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("persona_9"));

        let (status, body) = send(&app, json_post(&uri, json!({"persona_id": "persona_2"}))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["ok"], true);
        assert_eq!(body["session_id"], id.as_str());
        assert_eq!(body["selected_persona"], "persona_2");
    }

    #[tokio::test]
    async fn test_finalize_board_session() {
        let app = app(app_state(CannedInvoker::new()));
        let id = start(&app, "board_investors").await;
        send(
            &app,
            json_post("/api/session/message", json!({"session_id": id, "message": "We sell to dentists"})),
        )
        .await;

        let (status, body) =
            send(&app, json_post(&format!("/api/session/{}/finalize", id), json!({}))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["mode"], "board_investors");
        assert_eq!(body["consensus"]["top_strengths"], json!(["clear pain"]));
        assert_eq!(body["selected_persona"], "persona_1");
        assert!(
            body["files"]["talking_points"]
                .as_str()
                .unwrap()
                .starts_with("mem://talking_points/")
        );

        let (_, summary) = send(&app, get(&format!("/result/{}", id))).await;
        assert_eq!(summary["has_final"], true);
        assert_eq!(summary["final"]["files"], body["files"]);
    }

    #[tokio::test]
    async fn test_finalize_model_failure_is_500() {
        let app = app(app_state(CannedInvoker::failing()));
        let id = start(&app, "investor_pitch_prep").await;

        let (status, body) =
            send(&app, json_post(&format!("/api/session/{}/finalize", id), json!({}))).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        let error = body["error"].as_str().unwrap();
        assert!(error.starts_with("finalize failed: "));
        assert!(error.contains("quota exceeded"));
    }

    #[tokio::test]
    async fn test_respond_appends_then_replies() {
        let app = app(app_state(CannedInvoker::new()));
        let id = start(&app, "board_investors").await;

        let (status, body) = send(
            &app,
            json_post(
                "/api/session/message/respond",
                json!({"session_id": id, "message": "We sell to dentists"}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["ok"], true);
        assert_eq!(body["mode"], "board_investors");
        let responses = body["responses"].as_array().unwrap();
        assert_eq!(responses.len(), 3);
        assert_eq!(responses[0]["label"], "Panel 1");
        assert_eq!(responses[0]["message"], "Who pays?");

        let (_, summary) = send(&app, get(&format!("/api/session/{}/result", id))).await;
        assert_eq!(summary["messages_count"], 1);
    }

    #[tokio::test]
    async fn test_respond_coach_mode() {
        let app = app(app_state(CannedInvoker::new()));
        let id = start(&app, "interview_1on1").await;

        let (_, body) = send(
            &app,
            json_post("/api/session/message/respond", json!({"session_id": id, "message": "hi"})),
        )
        .await;
        assert_eq!(
            body["responses"],
            json!([{"persona_id": "coach", "label": "Interview Coach", "message": "Tell me more."}])
        );
    }
}
