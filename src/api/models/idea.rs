use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A generated suggestion, linked to the resources that inspired it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Idea {
    pub id: String,
    pub title: String,
    pub description: String,
    pub content: String,
    /// Always within [0.0, 1.0] for ideas accepted by the idea service
    pub confidence: f64,
    #[serde(default)]
    pub sources: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl Idea {
    pub fn new(
        id: String,
        title: String,
        description: String,
        content: String,
        confidence: f64,
        sources: Vec<String>,
        tags: Vec<String>,
    ) -> Self {
        Self {
            id,
            title,
            description,
            content,
            confidence,
            sources,
            tags,
            created_at: Utc::now(),
        }
    }

    pub fn is_valid(&self) -> bool {
        (0.0..=1.0).contains(&self.confidence)
    }
}
