//! Draft service for managing drafts and the resources they reference.

use super::error::{ServiceResult, require};
use super::id_generator::IdGenerator;
use super::reference_lock::ReferenceLock;
use crate::models::Draft;
use crate::storage::StorageBackend;
use std::sync::Arc;
use tracing::{debug, info};

/// Service enforcing draft validation and owning the link/unlink protocol.
pub struct DraftService {
    storage: Arc<dyn StorageBackend>,
    ids: Arc<dyn IdGenerator>,
    references: ReferenceLock,
}

impl DraftService {
    /// Create a new draft service instance.
    ///
    /// `references` must be the same lock handed to the [`ResourceService`](super::ResourceService)
    /// sharing this store.
    pub fn new(
        storage: Arc<dyn StorageBackend>,
        ids: Arc<dyn IdGenerator>,
        references: ReferenceLock,
    ) -> Self {
        Self {
            storage,
            ids,
            references,
        }
    }

    /// Create a new draft with an empty resource list.
    pub fn create_draft(
        &self,
        title: String,
        content: String,
        tags: Vec<String>,
    ) -> ServiceResult<Draft> {
        require(&title, "title")?;

        let draft = Draft::new(self.ids.generate(), title, content, tags);
        let draft = self.storage.create_draft(draft)?;
        info!("Created draft: {} ({})", draft.id, draft.title);
        Ok(draft)
    }

    /// Get a draft by ID.
    pub fn get_draft(&self, id: &str) -> ServiceResult<Draft> {
        require(id, "draft ID")?;
        Ok(self.storage.get_draft(id)?)
    }

    /// Get all drafts. Order is unspecified.
    pub fn list_drafts(&self) -> ServiceResult<Vec<Draft>> {
        Ok(self.storage.list_drafts()?)
    }

    /// Replace title, content and tags. The resource list is untouched.
    pub fn update_draft(
        &self,
        id: &str,
        title: String,
        content: String,
        tags: Vec<String>,
    ) -> ServiceResult<Draft> {
        require(id, "draft ID")?;
        require(&title, "title")?;

        let _guard = self.references.acquire();
        let mut draft = self.storage.get_draft(id)?;
        draft.apply_update(title, content, tags);
        let draft = self.storage.update_draft(draft)?;
        info!("Updated draft: {}", id);
        Ok(draft)
    }

    /// Delete a draft. Resources it referenced are left alone.
    pub fn delete_draft(&self, id: &str) -> ServiceResult<()> {
        require(id, "draft ID")?;
        self.storage.delete_draft(id)?;
        info!("Deleted draft: {}", id);
        Ok(())
    }

    /// Add a resource reference to a draft. Adding one already present is a no-op.
    pub fn add_resource_to_draft(&self, draft_id: &str, resource_id: &str) -> ServiceResult<Draft> {
        require(draft_id, "draft ID")?;
        require(resource_id, "resource ID")?;

        let _guard = self.references.acquire();
        let mut draft = self.storage.get_draft(draft_id)?;
        self.storage.get_resource(resource_id)?;

        if !draft.link_resource(resource_id) {
            debug!(
                "Resource {} already referenced by draft {}",
                resource_id, draft_id
            );
            return Ok(draft);
        }

        let draft = self.storage.update_draft(draft)?;
        info!("Added resource {} to draft {}", resource_id, draft_id);
        Ok(draft)
    }

    /// Remove a resource reference from a draft. Removing one that is absent is a no-op.
    ///
    /// The resource itself need not exist any more.
    pub fn remove_resource_from_draft(
        &self,
        draft_id: &str,
        resource_id: &str,
    ) -> ServiceResult<Draft> {
        require(draft_id, "draft ID")?;
        require(resource_id, "resource ID")?;

        let _guard = self.references.acquire();
        let mut draft = self.storage.get_draft(draft_id)?;

        if !draft.unlink_resource(resource_id) {
            debug!(
                "Resource {} not referenced by draft {}, nothing to remove",
                resource_id, draft_id
            );
            return Ok(draft);
        }

        let draft = self.storage.update_draft(draft)?;
        info!("Removed resource {} from draft {}", resource_id, draft_id);
        Ok(draft)
    }
}
