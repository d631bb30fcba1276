//! Resource routes for managing collected resources.

use axum::{
    Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
    routing::get,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

use super::app_state::AppState;
use super::error::ApiError;
use crate::models::{Resource, ResourceType};
use crate::services::{ResourceService, ServiceError};

/// Create the resources router
pub fn resources_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_resources).post(create_resource))
        .route(
            "/{id}",
            get(get_resource)
                .put(update_resource)
                .delete(delete_resource),
        )
}

/// Query parameters for GET /resources
#[derive(Debug, Default, Deserialize)]
pub struct ResourceFilterQuery {
    #[serde(rename = "type")]
    pub resource_type: Option<String>,
    pub category: Option<String>,
}

/// Request body for creating a resource
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateResourceRequest {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// One of link, blog, document, video, other. Empty or missing means other.
    #[serde(default, rename = "type")]
    pub resource_type: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

/// Request body for updating a resource. The URL cannot change.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateResourceRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, rename = "type")]
    pub resource_type: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ResourceResponse {
    pub resource: Resource,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ResourcesResponse {
    pub resources: Vec<Resource>,
}

fn parse_type(value: &str) -> Result<Option<ResourceType>, ServiceError> {
    ResourceType::parse_optional(value).map_err(ServiceError::Validation)
}

/// GET /resources - List resources, optionally filtered by type and/or category
#[utoipa::path(
    get,
    path = "/resources",
    tag = "Resources",
    params(
        ("type" = Option<String>, Query, description = "Only resources of this type"),
        ("category" = Option<String>, Query, description = "Only resources in this category")
    ),
    responses(
        (status = 200, description = "Matching resources", body = ResourcesResponse),
        (status = 400, description = "Unknown resource type")
    )
)]
pub async fn list_resources(
    State(resources): State<Arc<ResourceService>>,
    Query(filter): Query<ResourceFilterQuery>,
) -> Result<Json<ResourcesResponse>, ApiError> {
    let category = filter.category.unwrap_or_default();
    let resource_type = parse_type(filter.resource_type.as_deref().unwrap_or(""))?;

    let resources = match resource_type {
        Some(resource_type) => resources
            .get_resources_by_type(resource_type)?
            .into_iter()
            .filter(|r| category.is_empty() || r.category == category)
            .collect(),
        None => resources.get_resources_by_category(&category)?,
    };

    Ok(Json(ResourcesResponse { resources }))
}

/// POST /resources - Collect a new resource
#[utoipa::path(
    post,
    path = "/resources",
    tag = "Resources",
    request_body = CreateResourceRequest,
    responses(
        (status = 201, description = "Resource created", body = ResourceResponse),
        (status = 400, description = "URL or title missing, or unknown type")
    )
)]
pub async fn create_resource(
    State(resources): State<Arc<ResourceService>>,
    Json(request): Json<CreateResourceRequest>,
) -> Result<(StatusCode, Json<ResourceResponse>), ApiError> {
    let resource_type = parse_type(&request.resource_type)?;
    let resource = resources.create_resource(
        request.url,
        request.title,
        request.description,
        resource_type,
        request.category,
        request.tags.unwrap_or_default(),
    )?;
    Ok((StatusCode::CREATED, Json(ResourceResponse { resource })))
}

/// GET /resources/{id} - Get a resource
#[utoipa::path(
    get,
    path = "/resources/{id}",
    tag = "Resources",
    params(("id" = String, Path, description = "Resource ID")),
    responses(
        (status = 200, description = "Resource found", body = ResourceResponse),
        (status = 404, description = "Resource not found")
    )
)]
pub async fn get_resource(
    State(resources): State<Arc<ResourceService>>,
    Path(id): Path<String>,
) -> Result<Json<ResourceResponse>, ApiError> {
    let resource = resources.get_resource(&id)?;
    Ok(Json(ResourceResponse { resource }))
}

/// PUT /resources/{id} - Replace the mutable fields of a resource
#[utoipa::path(
    put,
    path = "/resources/{id}",
    tag = "Resources",
    params(("id" = String, Path, description = "Resource ID")),
    request_body = UpdateResourceRequest,
    responses(
        (status = 200, description = "Resource updated", body = ResourceResponse),
        (status = 400, description = "Title missing or unknown type"),
        (status = 404, description = "Resource not found")
    )
)]
pub async fn update_resource(
    State(resources): State<Arc<ResourceService>>,
    Path(id): Path<String>,
    Json(request): Json<UpdateResourceRequest>,
) -> Result<Json<ResourceResponse>, ApiError> {
    let resource_type = parse_type(&request.resource_type)?;
    let resource = resources.update_resource(
        &id,
        request.title,
        request.description,
        resource_type,
        request.category,
        request.tags.unwrap_or_default(),
    )?;
    Ok(Json(ResourceResponse { resource }))
}

/// DELETE /resources/{id} - Delete a resource and detach it from all drafts
#[utoipa::path(
    delete,
    path = "/resources/{id}",
    tag = "Resources",
    params(("id" = String, Path, description = "Resource ID")),
    responses(
        (status = 204, description = "Resource deleted"),
        (status = 404, description = "Resource not found")
    )
)]
pub async fn delete_resource(
    State(resources): State<Arc<ResourceService>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    resources.delete_resource(&id)?;
    Ok(StatusCode::NO_CONTENT)
}
