use super::enums::MessageType;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    #[serde(rename = "type")]
    pub message_type: MessageType,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// A conversation thread attached to a draft.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChatSession {
    pub id: String,
    pub draft_id: String,
    #[serde(default)]
    pub messages: Vec<ChatMessage>,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ChatSession {
    pub fn new(id: String, draft_id: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            draft_id,
            messages: Vec::new(),
            active: true,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn add_message(&mut self, message_type: MessageType, content: String) {
        let now = Utc::now().max(self.updated_at);
        self.messages.push(ChatMessage {
            message_type,
            content,
            created_at: now,
        });
        self.updated_at = now;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn deactivate(&mut self) {
        self.active = false;
        self.updated_at = Utc::now().max(self.updated_at);
    }
}
