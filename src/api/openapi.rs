//! OpenAPI specification definition.
//!
//! Aggregates all route handlers and schemas for OpenAPI documentation generation.

use utoipa::{Modify, OpenApi};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Drafts
        crate::routes::drafts::list_drafts,
        crate::routes::drafts::create_draft,
        crate::routes::drafts::get_draft,
        crate::routes::drafts::update_draft,
        crate::routes::drafts::delete_draft,
        crate::routes::drafts::add_resource_to_draft,
        crate::routes::drafts::remove_resource_from_draft,
        // Resources
        crate::routes::resources::list_resources,
        crate::routes::resources::create_resource,
        crate::routes::resources::get_resource,
        crate::routes::resources::update_resource,
        crate::routes::resources::delete_resource,
        // Ideas
        crate::routes::ideas::list_ideas,
        crate::routes::ideas::create_idea,
        crate::routes::ideas::get_idea,
        // Chat
        crate::routes::chat::create_session,
        crate::routes::chat::get_session,
        crate::routes::chat::add_message,
        crate::routes::chat::close_session,
        // OpenAPI
        crate::routes::openapi::serve_openapi_json,
    ),
    components(schemas(
        crate::models::Draft,
        crate::models::Resource,
        crate::models::ResourceType,
        crate::models::Idea,
        crate::models::ChatSession,
        crate::models::ChatMessage,
        crate::models::MessageType,
        crate::routes::drafts::DraftRequest,
        crate::routes::drafts::AddResourceRequest,
        crate::routes::drafts::DraftResponse,
        crate::routes::drafts::DraftsResponse,
        crate::routes::drafts::MessageResponse,
        crate::routes::resources::CreateResourceRequest,
        crate::routes::resources::UpdateResourceRequest,
        crate::routes::resources::ResourceResponse,
        crate::routes::resources::ResourcesResponse,
        crate::routes::ideas::CreateIdeaRequest,
        crate::routes::ideas::IdeaResponse,
        crate::routes::ideas::IdeasResponse,
        crate::routes::chat::CreateSessionRequest,
        crate::routes::chat::AddMessageRequest,
        crate::routes::chat::SessionResponse,
    )),
    modifiers(&VersionAddon),
    tags(
        (name = "Drafts", description = "Draft CRUD and resource references"),
        (name = "Resources", description = "Collected resource CRUD and filtering"),
        (name = "Ideas", description = "Stored idea suggestions"),
        (name = "Chat", description = "Chat sessions attached to drafts"),
        (name = "OpenAPI", description = "OpenAPI specification"),
    ),
    info(
        title = "Blog Writer API",
        description = "REST API for drafting documents from curated web resources",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    ),
    servers(
        (url = "/api", description = "Current server")
    )
)]
pub struct ApiDoc;

struct VersionAddon;

impl Modify for VersionAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        // Keep the documented version in step with Cargo.toml
        openapi.info.version = env!("CARGO_PKG_VERSION").to_string();
    }
}
