//! Unit tests for the resource service

use blog_writer_api::models::{Resource, ResourceType};
use blog_writer_api::services::{ErrorKind, SequentialIdGenerator, Services};
use blog_writer_api::storage::MemoryStorageBackend;
use std::sync::Arc;

fn services() -> Services {
    Services::new(
        Arc::new(MemoryStorageBackend::new()),
        Arc::new(SequentialIdGenerator::new("r")),
    )
}

fn collect(s: &Services, title: &str, resource_type: Option<ResourceType>, category: &str) -> Resource {
    s.resources
        .create_resource(
            format!("https://{}.test", title.to_lowercase()),
            title.to_string(),
            String::new(),
            resource_type,
            category.to_string(),
            vec![],
        )
        .unwrap()
}

#[test]
fn test_create_with_explicit_type() {
    let s = services();
    let resource = s
        .resources
        .create_resource(
            "https://x.test".to_string(),
            "T".to_string(),
            "D".to_string(),
            Some(ResourceType::Link),
            "cat".to_string(),
            vec!["a".to_string()],
        )
        .unwrap();

    assert_eq!(resource.resource_type, ResourceType::Link);
    assert_eq!(resource.url, "https://x.test");
    assert_eq!(resource.category, "cat");
    assert_eq!(resource.tags, vec!["a".to_string()]);
    assert_eq!(resource.created_at, resource.updated_at);
    assert_eq!(s.resources.get_resource(&resource.id).unwrap(), resource);
}

#[test]
fn test_create_without_type_defaults_to_other() {
    let s = services();
    let resource = collect(&s, "T", None, "");
    assert_eq!(resource.resource_type, ResourceType::Other);
}

#[test]
fn test_create_requires_url_and_title() {
    let s = services();

    let err = s
        .resources
        .create_resource(String::new(), "T".to_string(), String::new(), None, String::new(), vec![])
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);

    let err = s
        .resources
        .create_resource(
            "https://x.test".to_string(),
            String::new(),
            String::new(),
            None,
            String::new(),
            vec![],
        )
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);

    assert!(s.resources.list_resources().unwrap().is_empty());
}

#[test]
fn test_whitespace_url_and_title_are_accepted() {
    let s = services();
    let resource = s
        .resources
        .create_resource(
            " ".to_string(),
            "\t".to_string(),
            String::new(),
            None,
            String::new(),
            vec![],
        )
        .unwrap();

    let stored = s.resources.get_resource(&resource.id).unwrap();
    assert_eq!(stored.url, " ");
    assert_eq!(stored.title, "\t");
}

#[test]
fn test_update_replaces_mutable_fields() {
    let s = services();
    let original = collect(&s, "T", Some(ResourceType::Blog), "old");

    let updated = s
        .resources
        .update_resource(
            &original.id,
            "New".to_string(),
            "desc".to_string(),
            None,
            "new".to_string(),
            vec!["z".to_string()],
        )
        .unwrap();

    assert_eq!(updated.title, "New");
    assert_eq!(updated.description, "desc");
    assert_eq!(updated.resource_type, ResourceType::Other);
    assert_eq!(updated.category, "new");
    assert_eq!(updated.url, original.url);
    assert_eq!(updated.created_at, original.created_at);
    assert!(updated.updated_at >= original.updated_at);
}

#[test]
fn test_update_errors() {
    let s = services();
    let err = s
        .resources
        .update_resource("", "T".to_string(), String::new(), None, String::new(), vec![])
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);

    let err = s
        .resources
        .update_resource("missing", "T".to_string(), String::new(), None, String::new(), vec![])
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[test]
fn test_filters_by_type_and_category() {
    let s = services();
    collect(&s, "A", Some(ResourceType::Video), "rust");
    collect(&s, "B", Some(ResourceType::Video), "go");
    collect(&s, "C", Some(ResourceType::Blog), "rust");

    let videos = s.resources.get_resources_by_type(ResourceType::Video).unwrap();
    assert_eq!(videos.len(), 2);
    assert!(videos.iter().all(|r| r.resource_type == ResourceType::Video));

    let rust = s.resources.get_resources_by_category("rust").unwrap();
    let mut titles: Vec<String> = rust.into_iter().map(|r| r.title).collect();
    titles.sort();
    assert_eq!(titles, vec!["A".to_string(), "C".to_string()]);

    assert_eq!(s.resources.get_resources_by_category("").unwrap().len(), 3);
    assert!(s.resources.get_resources_by_type(ResourceType::Document).unwrap().is_empty());
}

#[test]
fn test_delete_cascades_into_drafts() {
    let s = services();
    let kept = collect(&s, "Kept", None, "");
    let doomed = collect(&s, "Doomed", None, "");

    let d1 = s.drafts.create_draft("One".to_string(), String::new(), vec![]).unwrap();
    let d2 = s.drafts.create_draft("Two".to_string(), String::new(), vec![]).unwrap();
    s.drafts.add_resource_to_draft(&d1.id, &kept.id).unwrap();
    s.drafts.add_resource_to_draft(&d1.id, &doomed.id).unwrap();
    s.drafts.add_resource_to_draft(&d2.id, &doomed.id).unwrap();

    s.resources.delete_resource(&doomed.id).unwrap();

    assert_eq!(
        s.resources.get_resource(&doomed.id).unwrap_err().kind(),
        ErrorKind::NotFound
    );
    assert_eq!(s.drafts.get_draft(&d1.id).unwrap().resources, vec![kept.id]);
    assert!(s.drafts.get_draft(&d2.id).unwrap().resources.is_empty());
}

#[test]
fn test_delete_missing_is_not_found() {
    let s = services();
    assert_eq!(
        s.resources.delete_resource("missing").unwrap_err().kind(),
        ErrorKind::NotFound
    );
    assert_eq!(
        s.resources.delete_resource("").unwrap_err().kind(),
        ErrorKind::Validation
    );
}
