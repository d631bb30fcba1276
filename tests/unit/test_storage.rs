//! Unit tests for the in-memory storage backend

use blog_writer_api::models::{ChatSession, Draft, Idea, Resource, ResourceType};
use blog_writer_api::storage::{MemoryStorageBackend, StorageBackend, StorageError};

fn draft(id: &str, title: &str) -> Draft {
    Draft::new(id.to_string(), title.to_string(), String::new(), vec![])
}

fn resource(id: &str) -> Resource {
    Resource::new(
        id.to_string(),
        "https://x.test".to_string(),
        "T".to_string(),
        "D".to_string(),
        ResourceType::Link,
        "cat".to_string(),
        vec![],
    )
}

#[test]
fn test_create_and_get_draft() {
    let store = MemoryStorageBackend::new();
    let created = store.create_draft(draft("d1", "A")).unwrap();
    let fetched = store.get_draft("d1").unwrap();
    assert_eq!(created, fetched);
}

#[test]
fn test_create_duplicate_id_is_already_exists() {
    let store = MemoryStorageBackend::new();
    store.create_draft(draft("d1", "A")).unwrap();

    let err = store.create_draft(draft("d1", "B")).unwrap_err();
    assert_eq!(err, StorageError::already_exists("draft", "d1"));
    // original record untouched
    assert_eq!(store.get_draft("d1").unwrap().title, "A");
}

#[test]
fn test_get_missing_is_not_found() {
    let store = MemoryStorageBackend::new();
    let err = store.get_resource("nope").unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.to_string(), "resource not found: nope");
}

#[test]
fn test_list_empty_collections() {
    let store = MemoryStorageBackend::new();
    assert!(store.list_drafts().unwrap().is_empty());
    assert!(store.list_resources().unwrap().is_empty());
    assert!(store.list_ideas().unwrap().is_empty());
    assert!(store.list_sessions().unwrap().is_empty());
}

#[test]
fn test_update_replaces_whole_record() {
    let store = MemoryStorageBackend::new();
    let mut d = draft("d1", "A");
    d.tags = vec!["x".to_string()];
    store.create_draft(d).unwrap();

    let replacement = draft("d1", "B");
    store.update_draft(replacement.clone()).unwrap();

    let stored = store.get_draft("d1").unwrap();
    assert_eq!(stored, replacement);
    assert!(stored.tags.is_empty());
}

#[test]
fn test_update_missing_is_not_found() {
    let store = MemoryStorageBackend::new();
    let err = store.update_resource(resource("r1")).unwrap_err();
    assert!(err.is_not_found());
    assert!(store.list_resources().unwrap().is_empty());
}

#[test]
fn test_delete_then_get_is_not_found() {
    let store = MemoryStorageBackend::new();
    store.create_resource(resource("r1")).unwrap();
    store.delete_resource("r1").unwrap();

    assert!(store.get_resource("r1").unwrap_err().is_not_found());
    assert!(store.delete_resource("r1").unwrap_err().is_not_found());
}

#[test]
fn test_returned_records_are_snapshots() {
    let store = MemoryStorageBackend::new();
    store.create_draft(draft("d1", "A")).unwrap();

    let mut copy = store.get_draft("d1").unwrap();
    copy.title = "changed locally".to_string();

    assert_eq!(store.get_draft("d1").unwrap().title, "A");
}

#[test]
fn test_collections_are_independent() {
    let store = MemoryStorageBackend::new();
    store.create_draft(draft("same", "A")).unwrap();
    store.create_resource(resource("same")).unwrap();

    store.delete_draft("same").unwrap();
    assert!(store.get_resource("same").is_ok());
}

#[test]
fn test_idea_and_session_full_crud() {
    let store = MemoryStorageBackend::new();

    let idea = Idea::new(
        "i1".to_string(),
        "Idea".to_string(),
        String::new(),
        String::new(),
        0.5,
        vec!["r1".to_string()],
        vec![],
    );
    store.create_idea(idea.clone()).unwrap();
    assert_eq!(store.list_ideas().unwrap(), vec![idea.clone()]);

    let mut updated = idea;
    updated.confidence = 0.9;
    store.update_idea(updated).unwrap();
    assert_eq!(store.get_idea("i1").unwrap().confidence, 0.9);
    store.delete_idea("i1").unwrap();
    assert!(store.get_idea("i1").unwrap_err().is_not_found());

    let session = ChatSession::new("s1".to_string(), "d1".to_string());
    store.create_session(session.clone()).unwrap();
    assert!(store.create_session(session).is_err());
    assert_eq!(store.list_sessions().unwrap().len(), 1);
    store.delete_session("s1").unwrap();
    assert!(store.get_session("s1").unwrap_err().is_not_found());
}

#[test]
fn test_storage_error_serializes_with_type_tag() {
    let err = StorageError::not_found("draft", "d1");
    let json = serde_json::to_value(&err).unwrap();
    assert_eq!(json["type"], "NOT_FOUND");
    assert_eq!(json["entity_id"], "d1");
}
