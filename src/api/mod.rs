mod handlers;
mod models;

use axum::{
    routing::{get, post},
    Router,
};

use crate::AppState;

pub use handlers::{chat, health, not_found};
pub use models::{ChatRequest, ChatResponse, ErrorResponse};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/chat", post(chat))
        .route("/health", get(health))
        .fallback(not_found)
        .with_state(state)
}
