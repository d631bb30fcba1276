//! Chat session routes.

use axum::{
    Router,
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

use super::app_state::AppState;
use super::error::ApiError;
use crate::models::{ChatSession, MessageType};
use crate::services::ChatService;

/// Create the chat router
pub fn chat_router() -> Router<AppState> {
    Router::new()
        .route("/sessions", post(create_session))
        .route("/sessions/{id}", get(get_session))
        .route("/sessions/{id}/messages", post(add_message))
        .route("/sessions/{id}/close", post(close_session))
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateSessionRequest {
    #[serde(default)]
    pub draft_id: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct AddMessageRequest {
    /// Defaults to user
    #[serde(default, rename = "type")]
    pub message_type: Option<MessageType>,
    #[serde(default)]
    pub content: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SessionResponse {
    pub session: ChatSession,
}

/// POST /chat/sessions - Open a chat session for a draft
#[utoipa::path(
    post,
    path = "/chat/sessions",
    tag = "Chat",
    request_body = CreateSessionRequest,
    responses(
        (status = 201, description = "Session created", body = SessionResponse),
        (status = 400, description = "Draft ID missing"),
        (status = 404, description = "Draft not found")
    )
)]
pub async fn create_session(
    State(chat): State<Arc<ChatService>>,
    Json(request): Json<CreateSessionRequest>,
) -> Result<(StatusCode, Json<SessionResponse>), ApiError> {
    let session = chat.create_session(&request.draft_id)?;
    Ok((StatusCode::CREATED, Json(SessionResponse { session })))
}

/// GET /chat/sessions/{id} - Get a chat session with its messages
#[utoipa::path(
    get,
    path = "/chat/sessions/{id}",
    tag = "Chat",
    params(("id" = String, Path, description = "Session ID")),
    responses(
        (status = 200, description = "Session found", body = SessionResponse),
        (status = 404, description = "Session not found")
    )
)]
pub async fn get_session(
    State(chat): State<Arc<ChatService>>,
    Path(id): Path<String>,
) -> Result<Json<SessionResponse>, ApiError> {
    let session = chat.get_session(&id)?;
    Ok(Json(SessionResponse { session }))
}

/// POST /chat/sessions/{id}/messages - Append a message
#[utoipa::path(
    post,
    path = "/chat/sessions/{id}/messages",
    tag = "Chat",
    params(("id" = String, Path, description = "Session ID")),
    request_body = AddMessageRequest,
    responses(
        (status = 201, description = "Message appended", body = SessionResponse),
        (status = 400, description = "Empty content or closed session"),
        (status = 404, description = "Session not found")
    )
)]
pub async fn add_message(
    State(chat): State<Arc<ChatService>>,
    Path(id): Path<String>,
    Json(request): Json<AddMessageRequest>,
) -> Result<(StatusCode, Json<SessionResponse>), ApiError> {
    let session = chat.add_message(
        &id,
        request.message_type.unwrap_or(MessageType::User),
        request.content,
    )?;
    Ok((StatusCode::CREATED, Json(SessionResponse { session })))
}

/// POST /chat/sessions/{id}/close - Deactivate a session
#[utoipa::path(
    post,
    path = "/chat/sessions/{id}/close",
    tag = "Chat",
    params(("id" = String, Path, description = "Session ID")),
    responses(
        (status = 200, description = "Session closed", body = SessionResponse),
        (status = 404, description = "Session not found")
    )
)]
pub async fn close_session(
    State(chat): State<Arc<ChatService>>,
    Path(id): Path<String>,
) -> Result<Json<SessionResponse>, ApiError> {
    let session = chat.close_session(&id)?;
    Ok(Json(SessionResponse { session }))
}
