//! Unit tests for the domain models

use blog_writer_api::models::{ChatSession, Draft, Idea, MessageType, Resource, ResourceType};
use serde_json::Value;

#[test]
fn test_new_draft_has_equal_timestamps_and_no_resources() {
    let draft = Draft::new(
        "d1".to_string(),
        "Title".to_string(),
        "Body".to_string(),
        vec!["rust".to_string()],
    );
    assert_eq!(draft.created_at, draft.updated_at);
    assert!(draft.resources.is_empty());
}

#[test]
fn test_draft_link_and_unlink() {
    let mut draft = Draft::new("d1".to_string(), "T".to_string(), String::new(), vec![]);

    assert!(draft.link_resource("r1"));
    assert!(!draft.link_resource("r1"));
    assert_eq!(draft.resources, vec!["r1".to_string()]);
    assert!(draft.references("r1"));

    assert!(draft.unlink_resource("r1"));
    assert!(!draft.unlink_resource("r1"));
    assert!(draft.resources.is_empty());
}

#[test]
fn test_draft_apply_update_keeps_resources() {
    let mut draft = Draft::new("d1".to_string(), "T".to_string(), String::new(), vec![]);
    draft.link_resource("r1");
    let before = draft.updated_at;

    draft.apply_update("New".to_string(), "c".to_string(), vec!["t".to_string()]);

    assert_eq!(draft.title, "New");
    assert_eq!(draft.resources, vec!["r1".to_string()]);
    assert!(draft.updated_at >= before);
    assert!(draft.updated_at >= draft.created_at);
}

#[test]
fn test_draft_json_field_names() {
    let draft = Draft::new("d1".to_string(), "T".to_string(), String::new(), vec![]);
    let json = serde_json::to_value(&draft).unwrap();
    let obj = json.as_object().unwrap();

    let mut keys: Vec<&str> = obj.keys().map(String::as_str).collect();
    keys.sort();
    assert_eq!(
        keys,
        vec!["content", "createdAt", "id", "resources", "tags", "title", "updatedAt"]
    );
}

#[test]
fn test_resource_json_field_names() {
    let resource = Resource::new(
        "r1".to_string(),
        "https://x.test".to_string(),
        "T".to_string(),
        "D".to_string(),
        ResourceType::Video,
        "cat".to_string(),
        vec![],
    );
    let json = serde_json::to_value(&resource).unwrap();
    let obj = json.as_object().unwrap();

    let mut keys: Vec<&str> = obj.keys().map(String::as_str).collect();
    keys.sort();
    assert_eq!(
        keys,
        vec![
            "category",
            "createdAt",
            "description",
            "id",
            "tags",
            "title",
            "type",
            "updatedAt",
            "url"
        ]
    );
    assert_eq!(json["type"], Value::from("video"));
}

#[test]
fn test_resource_type_parsing() {
    assert_eq!("blog".parse::<ResourceType>().unwrap(), ResourceType::Blog);
    assert!("Blog".parse::<ResourceType>().is_err());
    assert_eq!(ResourceType::parse_optional("").unwrap(), None);
    assert_eq!(ResourceType::parse_optional("  ").unwrap(), None);
    assert_eq!(
        ResourceType::parse_optional("document").unwrap(),
        Some(ResourceType::Document)
    );
    assert!(ResourceType::parse_optional("podcast").is_err());
    assert_eq!(ResourceType::default(), ResourceType::Other);
    assert_eq!(ResourceType::Link.to_string(), "link");
}

#[test]
fn test_idea_confidence_bounds() {
    let idea = |confidence: f64| {
        Idea::new(
            "i".to_string(),
            "T".to_string(),
            String::new(),
            String::new(),
            confidence,
            vec![],
            vec![],
        )
    };
    assert!(idea(0.0).is_valid());
    assert!(idea(1.0).is_valid());
    assert!(!idea(-0.1).is_valid());
    assert!(!idea(1.5).is_valid());
    assert!(!idea(f64::NAN).is_valid());
}

#[test]
fn test_chat_session_lifecycle() {
    let mut session = ChatSession::new("s1".to_string(), "d1".to_string());
    assert!(session.is_active());

    session.add_message(MessageType::User, "hello".to_string());
    assert_eq!(session.messages.len(), 1);
    assert_eq!(session.messages[0].message_type, MessageType::User);
    assert!(session.updated_at >= session.created_at);

    session.deactivate();
    assert!(!session.is_active());

    let json = serde_json::to_value(&session).unwrap();
    assert_eq!(json["draftId"], "d1");
    assert_eq!(json["messages"][0]["type"], "user");
}
