use super::enums::ResourceType;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// An externally sourced piece of material collected for reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    pub id: String,
    pub url: String,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub resource_type: ResourceType,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Resource {
    pub fn new(
        id: String,
        url: String,
        title: String,
        description: String,
        resource_type: ResourceType,
        category: String,
        tags: Vec<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            url,
            title,
            description,
            resource_type,
            category,
            tags,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace the mutable metadata. The URL is fixed at creation.
    pub fn apply_update(
        &mut self,
        title: String,
        description: String,
        resource_type: ResourceType,
        category: String,
        tags: Vec<String>,
    ) {
        self.title = title;
        self.description = description;
        self.resource_type = resource_type;
        self.category = category;
        self.tags = tags;
        self.updated_at = Utc::now().max(self.updated_at);
    }
}
