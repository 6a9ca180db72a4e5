use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::{debug, error};

use crate::AppState;

use super::models::{ChatRequest, ChatResponse, ErrorResponse};

pub async fn chat(
    State(state): State<AppState>,
    Json(payload): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, (StatusCode, Json<ErrorResponse>)> {
    debug!("POST /api/chat");

    match state.hf.generate(&payload.query).await {
        Ok(text) => Ok(Json(ChatResponse { response: text })),
        Err(err) => {
            error!("inference request failed: {err}");
            Err((
                err.status_code(),
                Json(ErrorResponse {
                    error: err.to_string(),
                }),
            ))
        }
    }
}

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok"
    }))
}

pub async fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: "route not found".to_string(),
        }),
    )
        .into_response()
}
