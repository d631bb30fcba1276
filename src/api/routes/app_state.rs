//! Application state management.
//!
//! Defines the AppState struct that holds the services shared across all route handlers.

use crate::services::{ChatService, DraftService, IdeaService, ResourceService, Services};
use axum::extract::FromRef;
use std::sync::Arc;

/// Application state shared across all route handlers.
#[derive(Clone)]
pub struct AppState {
    /// Draft management and draft↔resource linking
    pub drafts: Arc<DraftService>,
    /// Collected resources
    pub resources: Arc<ResourceService>,
    pub ideas: Arc<IdeaService>,
    pub chat: Arc<ChatService>,
}

impl AppState {
    /// Create application state backed by a fresh in-memory store.
    pub fn new() -> Self {
        Self::from_services(Services::in_memory())
    }

    /// Create application state from already wired services.
    pub fn from_services(services: Services) -> Self {
        Self {
            drafts: services.drafts,
            resources: services.resources,
            ideas: services.ideas,
            chat: services.chat,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

// Allow individual services to be extracted from the state (for Axum)
impl FromRef<AppState> for Arc<DraftService> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.drafts.clone()
    }
}

impl FromRef<AppState> for Arc<ResourceService> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.resources.clone()
    }
}

impl FromRef<AppState> for Arc<IdeaService> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.ideas.clone()
    }
}

impl FromRef<AppState> for Arc<ChatService> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.chat.clone()
    }
}
