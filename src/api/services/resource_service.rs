//! Resource service for managing collected resources.

use super::error::{ServiceResult, require};
use super::id_generator::IdGenerator;
use super::reference_lock::ReferenceLock;
use crate::models::{Resource, ResourceType};
use crate::storage::StorageBackend;
use std::sync::Arc;
use tracing::{info, warn};

/// Service enforcing resource validation and the default type policy.
pub struct ResourceService {
    storage: Arc<dyn StorageBackend>,
    ids: Arc<dyn IdGenerator>,
    references: ReferenceLock,
}

impl ResourceService {
    /// Create a new resource service instance.
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

    /// Create a new resource. A missing type defaults to [`ResourceType::Other`].
    pub fn create_resource(
        &self,
        url: String,
        title: String,
        description: String,
        resource_type: Option<ResourceType>,
        category: String,
        tags: Vec<String>,
    ) -> ServiceResult<Resource> {
        require(&url, "URL")?;
        require(&title, "title")?;

        let resource = Resource::new(
            self.ids.generate(),
            url,
            title,
            description,
            resource_type.unwrap_or_default(),
            category,
            tags,
        );
        let resource = self.storage.create_resource(resource)?;
        info!(
            "Created resource: {} ({}, {})",
            resource.id, resource.resource_type, resource.url
        );
        Ok(resource)
    }

    /// Get a resource by ID.
    pub fn get_resource(&self, id: &str) -> ServiceResult<Resource> {
        require(id, "resource ID")?;
        Ok(self.storage.get_resource(id)?)
    }

    /// Get all resources. Order is unspecified.
    pub fn list_resources(&self) -> ServiceResult<Vec<Resource>> {
        Ok(self.storage.list_resources()?)
    }

    /// Replace the mutable fields of a resource. A missing type defaults to
    /// [`ResourceType::Other`].
    pub fn update_resource(
        &self,
        id: &str,
        title: String,
        description: String,
        resource_type: Option<ResourceType>,
        category: String,
        tags: Vec<String>,
    ) -> ServiceResult<Resource> {
        require(id, "resource ID")?;
        require(&title, "title")?;

        let mut resource = self.storage.get_resource(id)?;
        resource.apply_update(
            title,
            description,
            resource_type.unwrap_or_default(),
            category,
            tags,
        );
        let resource = self.storage.update_resource(resource)?;
        info!("Updated resource: {}", id);
        Ok(resource)
    }

    /// Delete a resource and strip its identifier from every draft referencing it.
    ///
    /// The reference lock is held while every draft is scanned, so the call
    /// blocks its worker thread for time linear in the draft count. Move the
    /// call behind `tokio::task::spawn_blocking` if drafts number in the
    /// thousands.
    pub fn delete_resource(&self, id: &str) -> ServiceResult<()> {
        require(id, "resource ID")?;

        let _guard = self.references.acquire();
        self.storage.delete_resource(id)?;

        let mut detached = 0usize;
        for mut draft in self.storage.list_drafts()? {
            if !draft.unlink_resource(id) {
                continue;
            }
            let draft_id = draft.id.clone();
            match self.storage.update_draft(draft) {
                Ok(_) => detached += 1,
                // deleted by a concurrent caller, nothing left to clean
                Err(e) if e.is_not_found() => {
                    warn!("Draft {} vanished while detaching resource {}", draft_id, id)
                }
                Err(e) => return Err(e.into()),
            }
        }

        info!("Deleted resource: {} (detached from {} drafts)", id, detached);
        Ok(())
    }

    /// Get resources of the given type.
    pub fn get_resources_by_type(&self, resource_type: ResourceType) -> ServiceResult<Vec<Resource>> {
        Ok(self
            .storage
            .list_resources()?
            .into_iter()
            .filter(|r| r.resource_type == resource_type)
            .collect())
    }

    /// Get resources in the given category. An empty category means no filter.
    pub fn get_resources_by_category(&self, category: &str) -> ServiceResult<Vec<Resource>> {
        let resources = self.storage.list_resources()?;
        if category.is_empty() {
            return Ok(resources);
        }
        Ok(resources
            .into_iter()
            .filter(|r| r.category == category)
            .collect())
    }
}
