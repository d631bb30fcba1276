//! Idea service. Stores ideas; nothing here generates them.

use super::error::{ServiceError, ServiceResult, require};
use super::id_generator::IdGenerator;
use crate::models::Idea;
use crate::storage::StorageBackend;
use std::sync::Arc;
use tracing::info;

pub struct IdeaService {
    storage: Arc<dyn StorageBackend>,
    ids: Arc<dyn IdGenerator>,
}

impl IdeaService {
    pub fn new(storage: Arc<dyn StorageBackend>, ids: Arc<dyn IdGenerator>) -> Self {
        Self { storage, ids }
    }

    /// Record a new idea. Confidence must lie within [0.0, 1.0].
    pub fn create_idea(
        &self,
        title: String,
        description: String,
        content: String,
        confidence: f64,
        sources: Vec<String>,
        tags: Vec<String>,
    ) -> ServiceResult<Idea> {
        require(&title, "title")?;

        let idea = Idea::new(
            self.ids.generate(),
            title,
            description,
            content,
            confidence,
            sources,
            tags,
        );
        if !idea.is_valid() {
            return Err(ServiceError::validation(format!(
                "confidence must be between 0.0 and 1.0, got {}",
                confidence
            )));
        }

        let idea = self.storage.create_idea(idea)?;
        info!("Created idea: {} ({})", idea.id, idea.title);
        Ok(idea)
    }

    pub fn get_idea(&self, id: &str) -> ServiceResult<Idea> {
        require(id, "idea ID")?;
        Ok(self.storage.get_idea(id)?)
    }

    pub fn list_ideas(&self) -> ServiceResult<Vec<Idea>> {
        Ok(self.storage.list_ideas()?)
    }
}
