//! In-memory storage backend.
//!
//! Four id-keyed maps behind one reader/writer lock for the whole store. A write
//! to any collection excludes every reader, including readers of the other
//! collections. The dataset is small, so one coarse lock is preferred over
//! per-entity locking.

use super::{StorageError, traits::StorageBackend};
use crate::models::{ChatSession, Draft, Idea, Resource};
use parking_lot::RwLock;
use std::collections::HashMap;

const DRAFT: &str = "draft";
const RESOURCE: &str = "resource";
const IDEA: &str = "idea";
const SESSION: &str = "session";

#[derive(Default)]
struct Collections {
    drafts: HashMap<String, Draft>,
    resources: HashMap<String, Resource>,
    ideas: HashMap<String, Idea>,
    sessions: HashMap<String, ChatSession>,
}

/// Process-local storage backend. Nothing survives a restart.
#[derive(Default)]
pub struct MemoryStorageBackend {
    collections: RwLock<Collections>,
}

impl MemoryStorageBackend {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

fn insert_new<T: Clone>(
    map: &mut HashMap<String, T>,
    entity_type: &str,
    id: &str,
    value: T,
) -> Result<T, StorageError> {
    if map.contains_key(id) {
        return Err(StorageError::already_exists(entity_type, id));
    }
    map.insert(id.to_string(), value.clone());
    Ok(value)
}

fn fetch<T: Clone>(map: &HashMap<String, T>, entity_type: &str, id: &str) -> Result<T, StorageError> {
    map.get(id)
        .cloned()
        .ok_or_else(|| StorageError::not_found(entity_type, id))
}

fn replace<T: Clone>(
    map: &mut HashMap<String, T>,
    entity_type: &str,
    id: &str,
    value: T,
) -> Result<T, StorageError> {
    match map.get_mut(id) {
        Some(slot) => {
            *slot = value.clone();
            Ok(value)
        }
        None => Err(StorageError::not_found(entity_type, id)),
    }
}

fn remove<T>(map: &mut HashMap<String, T>, entity_type: &str, id: &str) -> Result<(), StorageError> {
    map.remove(id)
        .map(|_| ())
        .ok_or_else(|| StorageError::not_found(entity_type, id))
}

fn snapshot<T: Clone>(map: &HashMap<String, T>) -> Vec<T> {
    map.values().cloned().collect()
}

impl StorageBackend for MemoryStorageBackend {
    fn create_draft(&self, draft: Draft) -> Result<Draft, StorageError> {
        let mut c = self.collections.write();
        let id = draft.id.clone();
        insert_new(&mut c.drafts, DRAFT, &id, draft)
    }

    fn get_draft(&self, id: &str) -> Result<Draft, StorageError> {
        fetch(&self.collections.read().drafts, DRAFT, id)
    }

    fn list_drafts(&self) -> Result<Vec<Draft>, StorageError> {
        Ok(snapshot(&self.collections.read().drafts))
    }

    fn update_draft(&self, draft: Draft) -> Result<Draft, StorageError> {
        let mut c = self.collections.write();
        let id = draft.id.clone();
        replace(&mut c.drafts, DRAFT, &id, draft)
    }

    fn delete_draft(&self, id: &str) -> Result<(), StorageError> {
        remove(&mut self.collections.write().drafts, DRAFT, id)
    }

    fn create_resource(&self, resource: Resource) -> Result<Resource, StorageError> {
        let mut c = self.collections.write();
        let id = resource.id.clone();
        insert_new(&mut c.resources, RESOURCE, &id, resource)
    }

    fn get_resource(&self, id: &str) -> Result<Resource, StorageError> {
        fetch(&self.collections.read().resources, RESOURCE, id)
    }

    fn list_resources(&self) -> Result<Vec<Resource>, StorageError> {
        Ok(snapshot(&self.collections.read().resources))
    }

    fn update_resource(&self, resource: Resource) -> Result<Resource, StorageError> {
        let mut c = self.collections.write();
        let id = resource.id.clone();
        replace(&mut c.resources, RESOURCE, &id, resource)
    }

    fn delete_resource(&self, id: &str) -> Result<(), StorageError> {
        remove(&mut self.collections.write().resources, RESOURCE, id)
    }

    fn create_idea(&self, idea: Idea) -> Result<Idea, StorageError> {
        let mut c = self.collections.write();
        let id = idea.id.clone();
        insert_new(&mut c.ideas, IDEA, &id, idea)
    }

    fn get_idea(&self, id: &str) -> Result<Idea, StorageError> {
        fetch(&self.collections.read().ideas, IDEA, id)
    }

    fn list_ideas(&self) -> Result<Vec<Idea>, StorageError> {
        Ok(snapshot(&self.collections.read().ideas))
    }

    fn update_idea(&self, idea: Idea) -> Result<Idea, StorageError> {
        let mut c = self.collections.write();
        let id = idea.id.clone();
        replace(&mut c.ideas, IDEA, &id, idea)
    }

    fn delete_idea(&self, id: &str) -> Result<(), StorageError> {
        remove(&mut self.collections.write().ideas, IDEA, id)
    }

    fn create_session(&self, session: ChatSession) -> Result<ChatSession, StorageError> {
        let mut c = self.collections.write();
        let id = session.id.clone();
        insert_new(&mut c.sessions, SESSION, &id, session)
    }

    fn get_session(&self, id: &str) -> Result<ChatSession, StorageError> {
        fetch(&self.collections.read().sessions, SESSION, id)
    }

    fn list_sessions(&self) -> Result<Vec<ChatSession>, StorageError> {
        Ok(snapshot(&self.collections.read().sessions))
    }

    fn update_session(&self, session: ChatSession) -> Result<ChatSession, StorageError> {
        let mut c = self.collections.write();
        let id = session.id.clone();
        replace(&mut c.sessions, SESSION, &id, session)
    }

    fn delete_session(&self, id: &str) -> Result<(), StorageError> {
        remove(&mut self.collections.write().sessions, SESSION, id)
    }
}
