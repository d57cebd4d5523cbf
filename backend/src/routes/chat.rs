//! Chatbot API routes

use crate::error::ApiError;
use crate::services::ChatService;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use chrono::Local;
use healthy_diary_shared::models::ChatMessage;
use healthy_diary_shared::types::{ChatReplyResponse, ChatRequest};

/// Create chat routes
pub fn chat_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(send_message))
        .route("/history", axum::routing::get(get_history).delete(clear_history))
}

/// POST /api/v1/chat - Send a message to the assistant
async fn send_message(
    State(state): State<AppState>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ChatReplyResponse>, ApiError> {
    let now = Local::now().naive_local();
    let reply = ChatService::send(&state.diary, &state.chat, state.catalog, req, now).await?;
    Ok(Json(reply))
}

/// GET /api/v1/chat/history
async fn get_history(State(state): State<AppState>) -> Json<Vec<ChatMessage>> {
    Json(ChatService::history(&state.chat).await)
}

/// DELETE /api/v1/chat/history - Start a new conversation
async fn clear_history(State(state): State<AppState>) -> StatusCode {
    ChatService::clear(&state.chat).await;
    StatusCode::NO_CONTENT
}
