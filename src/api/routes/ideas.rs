//! Idea routes. Ideas are stored and served; generating them is not implemented.

use axum::{
    Router,
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::get,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

use super::app_state::AppState;
use super::error::ApiError;
use crate::models::Idea;
use crate::services::IdeaService;

/// Create the ideas router
pub fn ideas_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_ideas).post(create_idea))
        .route("/{id}", get(get_idea))
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateIdeaRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub confidence: f64,
    #[serde(default)]
    pub sources: Option<Vec<String>>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct IdeaResponse {
    pub idea: Idea,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct IdeasResponse {
    pub ideas: Vec<Idea>,
}

/// GET /ideas - List stored ideas
#[utoipa::path(
    get,
    path = "/ideas",
    tag = "Ideas",
    responses((status = 200, description = "All ideas", body = IdeasResponse))
)]
pub async fn list_ideas(
    State(ideas): State<Arc<IdeaService>>,
) -> Result<Json<IdeasResponse>, ApiError> {
    let ideas = ideas.list_ideas()?;
    Ok(Json(IdeasResponse { ideas }))
}

/// POST /ideas - Store an idea
#[utoipa::path(
    post,
    path = "/ideas",
    tag = "Ideas",
    request_body = CreateIdeaRequest,
    responses(
        (status = 201, description = "Idea stored", body = IdeaResponse),
        (status = 400, description = "Title missing or confidence out of range")
    )
)]
pub async fn create_idea(
    State(ideas): State<Arc<IdeaService>>,
    Json(request): Json<CreateIdeaRequest>,
) -> Result<(StatusCode, Json<IdeaResponse>), ApiError> {
    let idea = ideas.create_idea(
        request.title,
        request.description,
        request.content,
        request.confidence,
        request.sources.unwrap_or_default(),
        request.tags.unwrap_or_default(),
    )?;
    Ok((StatusCode::CREATED, Json(IdeaResponse { idea })))
}

/// GET /ideas/{id} - Get an idea
#[utoipa::path(
    get,
    path = "/ideas/{id}",
    tag = "Ideas",
    params(("id" = String, Path, description = "Idea ID")),
    responses(
        (status = 200, description = "Idea found", body = IdeaResponse),
        (status = 404, description = "Idea not found")
    )
)]
pub async fn get_idea(
    State(ideas): State<Arc<IdeaService>>,
    Path(id): Path<String>,
) -> Result<Json<IdeaResponse>, ApiError> {
    let idea = ideas.get_idea(&id)?;
    Ok(Json(IdeaResponse { idea }))
}
