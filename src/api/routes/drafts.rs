//! Draft routes for managing drafts and their resource references.

use axum::{
    Router,
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{delete, get, post},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

use super::app_state::AppState;
use super::error::ApiError;
use crate::models::Draft;
use crate::services::DraftService;

/// Create the drafts router
pub fn drafts_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_drafts).post(create_draft))
        .route(
            "/{id}",
            get(get_draft).put(update_draft).delete(delete_draft),
        )
        .route("/{id}/resources", post(add_resource_to_draft))
        .route(
            "/{id}/resources/{resource_id}",
            delete(remove_resource_from_draft),
        )
}

/// Request body for creating or updating a draft.
///
/// A missing title deserializes as empty and is rejected by the service.
#[derive(Debug, Deserialize, ToSchema)]
pub struct DraftRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

/// Request body for linking a resource to a draft
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddResourceRequest {
    #[serde(default)]
    pub resource_id: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DraftResponse {
    pub draft: Draft,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DraftsResponse {
    pub drafts: Vec<Draft>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

/// GET /drafts - List all drafts
#[utoipa::path(
    get,
    path = "/drafts",
    tag = "Drafts",
    responses(
        (status = 200, description = "All drafts", body = DraftsResponse),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn list_drafts(
    State(drafts): State<Arc<DraftService>>,
) -> Result<Json<DraftsResponse>, ApiError> {
    let drafts = drafts.list_drafts()?;
    Ok(Json(DraftsResponse { drafts }))
}

/// POST /drafts - Create a draft
#[utoipa::path(
    post,
    path = "/drafts",
    tag = "Drafts",
    request_body = DraftRequest,
    responses(
        (status = 201, description = "Draft created", body = DraftResponse),
        (status = 400, description = "Title missing")
    )
)]
pub async fn create_draft(
    State(drafts): State<Arc<DraftService>>,
    Json(request): Json<DraftRequest>,
) -> Result<(StatusCode, Json<DraftResponse>), ApiError> {
    let draft = drafts.create_draft(
        request.title,
        request.content,
        request.tags.unwrap_or_default(),
    )?;
    Ok((StatusCode::CREATED, Json(DraftResponse { draft })))
}

/// GET /drafts/{id} - Get a draft
#[utoipa::path(
    get,
    path = "/drafts/{id}",
    tag = "Drafts",
    params(("id" = String, Path, description = "Draft ID")),
    responses(
        (status = 200, description = "Draft found", body = DraftResponse),
        (status = 404, description = "Draft not found")
    )
)]
pub async fn get_draft(
    State(drafts): State<Arc<DraftService>>,
    Path(id): Path<String>,
) -> Result<Json<DraftResponse>, ApiError> {
    let draft = drafts.get_draft(&id)?;
    Ok(Json(DraftResponse { draft }))
}

/// PUT /drafts/{id} - Replace title, content and tags of a draft
#[utoipa::path(
    put,
    path = "/drafts/{id}",
    tag = "Drafts",
    params(("id" = String, Path, description = "Draft ID")),
    request_body = DraftRequest,
    responses(
        (status = 200, description = "Draft updated", body = DraftResponse),
        (status = 400, description = "Title missing"),
        (status = 404, description = "Draft not found")
    )
)]
pub async fn update_draft(
    State(drafts): State<Arc<DraftService>>,
    Path(id): Path<String>,
    Json(request): Json<DraftRequest>,
) -> Result<Json<DraftResponse>, ApiError> {
    let draft = drafts.update_draft(
        &id,
        request.title,
        request.content,
        request.tags.unwrap_or_default(),
    )?;
    Ok(Json(DraftResponse { draft }))
}

/// DELETE /drafts/{id} - Delete a draft
#[utoipa::path(
    delete,
    path = "/drafts/{id}",
    tag = "Drafts",
    params(("id" = String, Path, description = "Draft ID")),
    responses(
        (status = 204, description = "Draft deleted"),
        (status = 404, description = "Draft not found")
    )
)]
pub async fn delete_draft(
    State(drafts): State<Arc<DraftService>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    drafts.delete_draft(&id)?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /drafts/{id}/resources - Reference a resource from a draft
#[utoipa::path(
    post,
    path = "/drafts/{id}/resources",
    tag = "Drafts",
    params(("id" = String, Path, description = "Draft ID")),
    request_body = AddResourceRequest,
    responses(
        (status = 200, description = "Resource referenced (idempotent)", body = MessageResponse),
        (status = 400, description = "Resource ID missing"),
        (status = 404, description = "Draft or resource not found")
    )
)]
pub async fn add_resource_to_draft(
    State(drafts): State<Arc<DraftService>>,
    Path(id): Path<String>,
    Json(request): Json<AddResourceRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    drafts.add_resource_to_draft(&id, &request.resource_id)?;
    Ok(Json(MessageResponse {
        message: "resource added to draft".to_string(),
    }))
}

/// DELETE /drafts/{id}/resources/{resource_id} - Drop a resource reference from a draft
#[utoipa::path(
    delete,
    path = "/drafts/{id}/resources/{resource_id}",
    tag = "Drafts",
    params(
        ("id" = String, Path, description = "Draft ID"),
        ("resource_id" = String, Path, description = "Resource ID")
    ),
    responses(
        (status = 200, description = "Reference removed (idempotent)", body = MessageResponse),
        (status = 404, description = "Draft not found")
    )
)]
pub async fn remove_resource_from_draft(
    State(drafts): State<Arc<DraftService>>,
    Path((id, resource_id)): Path<(String, String)>,
) -> Result<Json<MessageResponse>, ApiError> {
    drafts.remove_resource_from_draft(&id, &resource_id)?;
    Ok(Json(MessageResponse {
        message: "resource removed from draft".to_string(),
    }))
}
