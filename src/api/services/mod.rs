//! Services module - contains the domain services behind the API routes.

pub mod chat_service;
pub mod draft_service;
pub mod error;
pub mod id_generator;
pub mod idea_service;
pub mod reference_lock;
pub mod resource_service;

// Re-export for convenience
pub use chat_service::ChatService;
pub use draft_service::DraftService;
pub use error::{ErrorKind, ServiceError, ServiceResult};
pub use id_generator::{IdGenerator, SequentialIdGenerator, UuidGenerator};
pub use idea_service::IdeaService;
pub use reference_lock::ReferenceLock;
pub use resource_service::ResourceService;

use crate::storage::{MemoryStorageBackend, StorageBackend};
use std::sync::Arc;

/// All services wired to one store, one id generator and one reference lock.
#[derive(Clone)]
pub struct Services {
    pub drafts: Arc<DraftService>,
    pub resources: Arc<ResourceService>,
    pub ideas: Arc<IdeaService>,
    pub chat: Arc<ChatService>,
}

impl Services {
    pub fn new(storage: Arc<dyn StorageBackend>, ids: Arc<dyn IdGenerator>) -> Self {
        let references = ReferenceLock::new();
        Self {
            drafts: Arc::new(DraftService::new(
                storage.clone(),
                ids.clone(),
                references.clone(),
            )),
            resources: Arc::new(ResourceService::new(
                storage.clone(),
                ids.clone(),
                references.clone(),
            )),
            ideas: Arc::new(IdeaService::new(storage.clone(), ids.clone())),
            chat: Arc::new(ChatService::new(storage, ids, references)),
        }
    }

    /// Services over a fresh in-memory store with UUID identifiers.
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(MemoryStorageBackend::new()),
            Arc::new(UuidGenerator),
        )
    }
}
