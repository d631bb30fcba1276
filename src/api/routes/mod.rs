//! API routes module - organizes all route handlers.

pub mod app_state;
pub mod chat;
pub mod drafts;
pub mod error;
pub mod ideas;
pub mod openapi;
pub mod resources;

use axum::{Router, response::Json, routing::get};
use serde_json::{Value, json};

pub use app_state::AppState;
pub use error::ApiError;

/// Create the API router combining all route modules.
///
/// Routes are relative; the application mounts them under `/api`.
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .nest("/drafts", drafts::drafts_router())
        .nest("/resources", resources::resources_router())
        .nest("/ideas", ideas::ideas_router())
        .nest("/chat", chat::chat_router())
        // OpenAPI documentation endpoint
        .merge(openapi::openapi_router())
}

/// Create the application state backed by a fresh in-memory store.
pub fn create_app_state() -> AppState {
    AppState::new()
}

/// Build the full application: health check plus the API under `/api`, with state applied.
///
/// Middleware layers are left to the caller.
pub fn create_app(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .nest("/api", create_api_router())
        .with_state(app_state)
}

async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "blog-writer-api",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
