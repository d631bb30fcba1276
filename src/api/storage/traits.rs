//! Storage trait definitions for the API storage backends.

use super::StorageError;
use crate::models::{ChatSession, Draft, Idea, Resource};

/// Storage backend trait: atomic CRUD over drafts, resources, ideas and chat sessions.
///
/// Every call completes synchronously. Records go in and come out by value, so a
/// returned record is a snapshot and changes to it are invisible to other callers
/// until written back with the matching `update_*`.
///
/// Contract shared by all four collections:
/// - `create_*` fails with [`StorageError::AlreadyExists`] if the id is taken
/// - `get_*`, `update_*` and `delete_*` fail with [`StorageError::NotFound`] if it is absent
/// - `update_*` replaces the whole record
/// - `list_*` returns every record, in no particular order (empty vec when there are none)
pub trait StorageBackend: Send + Sync {
    /// Insert a new draft
    fn create_draft(&self, draft: Draft) -> Result<Draft, StorageError>;

    /// Get draft by ID
    fn get_draft(&self, id: &str) -> Result<Draft, StorageError>;

    /// List all drafts
    fn list_drafts(&self) -> Result<Vec<Draft>, StorageError>;

    /// Replace an existing draft
    fn update_draft(&self, draft: Draft) -> Result<Draft, StorageError>;

    /// Delete a draft
    fn delete_draft(&self, id: &str) -> Result<(), StorageError>;

    /// Insert a new resource
    fn create_resource(&self, resource: Resource) -> Result<Resource, StorageError>;

    /// Get resource by ID
    fn get_resource(&self, id: &str) -> Result<Resource, StorageError>;

    /// List all resources
    fn list_resources(&self) -> Result<Vec<Resource>, StorageError>;

    /// Replace an existing resource
    fn update_resource(&self, resource: Resource) -> Result<Resource, StorageError>;

    /// Delete a resource
    fn delete_resource(&self, id: &str) -> Result<(), StorageError>;

    /// Insert a new idea
    fn create_idea(&self, idea: Idea) -> Result<Idea, StorageError>;

    /// Get idea by ID
    fn get_idea(&self, id: &str) -> Result<Idea, StorageError>;

    /// List all ideas
    fn list_ideas(&self) -> Result<Vec<Idea>, StorageError>;

    /// Replace an existing idea
    fn update_idea(&self, idea: Idea) -> Result<Idea, StorageError>;

    /// Delete an idea
    fn delete_idea(&self, id: &str) -> Result<(), StorageError>;

    /// Insert a new chat session
    fn create_session(&self, session: ChatSession) -> Result<ChatSession, StorageError>;

    /// Get chat session by ID
    fn get_session(&self, id: &str) -> Result<ChatSession, StorageError>;

    /// List all chat sessions
    fn list_sessions(&self) -> Result<Vec<ChatSession>, StorageError>;

    /// Replace an existing chat session
    fn update_session(&self, session: ChatSession) -> Result<ChatSession, StorageError>;

    /// Delete a chat session
    fn delete_session(&self, id: &str) -> Result<(), StorageError>;
}
