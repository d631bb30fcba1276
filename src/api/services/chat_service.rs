//! Chat service: conversation threads attached to drafts.
//!
//! Only the bookkeeping lives here. No assistant replies are produced.

use super::error::{ServiceError, ServiceResult, require};
use super::id_generator::IdGenerator;
use super::reference_lock::ReferenceLock;
use crate::models::{ChatSession, MessageType};
use crate::storage::StorageBackend;
use std::sync::Arc;
use tracing::info;

pub struct ChatService {
    storage: Arc<dyn StorageBackend>,
    ids: Arc<dyn IdGenerator>,
    references: ReferenceLock,
}

impl ChatService {
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

    /// Open a new, active session for an existing draft.
    pub fn create_session(&self, draft_id: &str) -> ServiceResult<ChatSession> {
        require(draft_id, "draft ID")?;
        self.storage.get_draft(draft_id)?;

        let session = ChatSession::new(self.ids.generate(), draft_id.to_string());
        let session = self.storage.create_session(session)?;
        info!("Created chat session {} for draft {}", session.id, draft_id);
        Ok(session)
    }

    pub fn get_session(&self, id: &str) -> ServiceResult<ChatSession> {
        require(id, "session ID")?;
        Ok(self.storage.get_session(id)?)
    }

    /// Append a message to an active session.
    pub fn add_message(
        &self,
        session_id: &str,
        message_type: MessageType,
        content: String,
    ) -> ServiceResult<ChatSession> {
        require(session_id, "session ID")?;
        require(&content, "message content")?;

        let _guard = self.references.acquire();
        let mut session = self.storage.get_session(session_id)?;
        if !session.is_active() {
            return Err(ServiceError::validation(format!(
                "chat session {} is closed",
                session_id
            )));
        }
        session.add_message(message_type, content);
        Ok(self.storage.update_session(session)?)
    }

    /// Mark a session inactive. Closing a closed session is a no-op.
    pub fn close_session(&self, id: &str) -> ServiceResult<ChatSession> {
        require(id, "session ID")?;

        let _guard = self.references.acquire();
        let mut session = self.storage.get_session(id)?;
        if !session.is_active() {
            return Ok(session);
        }
        session.deactivate();
        let session = self.storage.update_session(session)?;
        info!("Closed chat session {}", id);
        Ok(session)
    }
}
