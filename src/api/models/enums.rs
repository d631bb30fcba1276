use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

/// Kind of material a collected resource points at.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum ResourceType {
    Link,
    Blog,
    Document,
    Video,
    #[default]
    Other,
}

impl ResourceType {
    pub const ALL: [ResourceType; 5] = [
        ResourceType::Link,
        ResourceType::Blog,
        ResourceType::Document,
        ResourceType::Video,
        ResourceType::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceType::Link => "link",
            ResourceType::Blog => "blog",
            ResourceType::Document => "document",
            ResourceType::Video => "video",
            ResourceType::Other => "other",
        }
    }

    /// Parse a type coming from an external caller.
    ///
    /// An empty (or whitespace-only) value means "unspecified" and yields `Ok(None)`,
    /// leaving the default policy to the resource service.
    pub fn parse_optional(value: &str) -> Result<Option<Self>, String> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }
        trimmed.parse().map(Some)
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ResourceType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| {
                format!(
                    "unknown resource type '{}' (expected one of: link, blog, document, video, other)",
                    s
                )
            })
    }
}

/// Author of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum MessageType {
    User,
    Assistant,
    Error,
}
