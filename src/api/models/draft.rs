use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A user-authored document under construction.
///
/// `resources` holds identifiers of referenced resources only, never the
/// records themselves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Draft {
    pub id: String,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub resources: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Draft {
    pub fn new(id: String, title: String, content: String, tags: Vec<String>) -> Self {
        let now = Utc::now();
        Self {
            id,
            title,
            content,
            tags,
            resources: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace the editable fields. The resource list is left alone.
    pub fn apply_update(&mut self, title: String, content: String, tags: Vec<String>) {
        self.title = title;
        self.content = content;
        self.tags = tags;
        self.touch();
    }

    pub fn references(&self, resource_id: &str) -> bool {
        self.resources.iter().any(|id| id == resource_id)
    }

    /// Append a resource reference. Returns `false` if it was already present.
    pub fn link_resource(&mut self, resource_id: &str) -> bool {
        if self.references(resource_id) {
            return false;
        }
        self.resources.push(resource_id.to_string());
        self.touch();
        true
    }

    /// Drop a resource reference. Returns `false` if it was not present.
    pub fn unlink_resource(&mut self, resource_id: &str) -> bool {
        match self.resources.iter().position(|id| id == resource_id) {
            Some(index) => {
                self.resources.remove(index);
                self.touch();
                true
            }
            None => false,
        }
    }

    // updated_at never moves backwards, even if the wall clock does
    fn touch(&mut self) {
        self.updated_at = Utc::now().max(self.updated_at);
    }
}
