use super::*;

#[tokio::test]
async fn missing_project_argument_is_reported() {
    let tmp = TempDir::new().unwrap();
    let service = service_in(&tmp);

    let result = service
        .fetch(Parameters(FetchRequest::default()))
        .await
        .unwrap();
    assert_eq!(result.is_error, Some(true));
    assert!(text_of(&result).contains("Missing required argument 'project'"));
}

#[tokio::test]
async fn unknown_project_on_empty_store() {
    let tmp = TempDir::new().unwrap();
    let service = service_in(&tmp);

    let result = fetch_doc(&service, "missing-project").await;
    assert_eq!(result.is_error, Some(true));
    assert!(text_of(&result).contains("No projects are registered yet"));
    let structured = result.structured_content.unwrap();
    assert_eq!(structured["error"]["code"], "not_found");
    assert_eq!(structured["error"]["next_actions"][0]["tool"], "upsert");
}

#[tokio::test]
async fn unknown_project_lists_current_slugs() {
    let tmp = TempDir::new().unwrap();
    let service = service_in(&tmp);
    upsert_doc(&service, "beta", "B", "b", "b").await;
    upsert_doc(&service, "alpha", "A", "a", "a").await;

    let result = fetch_doc(&service, "gamma").await;
    assert_eq!(result.is_error, Some(true));
    assert!(
        text_of(&result).contains("Available projects: alpha, beta"),
        "{}",
        text_of(&result)
    );
}

#[tokio::test]
async fn malformed_slugs_are_rejected_at_the_boundary() {
    let tmp = TempDir::new().unwrap();
    let service = service_in(&tmp);

    for slug in ["Foo_Bar", "-leading", "double--hyphen", "../etc"] {
        let result = fetch_doc(&service, slug).await;
        assert_eq!(result.is_error, Some(true), "{slug}");
        let structured = result.structured_content.unwrap();
        assert_eq!(structured["error"]["code"], "invalid_slug", "{slug}");
    }
    assert!(!service.store().root().exists());
}

#[tokio::test]
async fn body_without_metadata_is_not_served() {
    let tmp = TempDir::new().unwrap();
    let service = service_in(&tmp);
    std::fs::create_dir_all(service.store().root()).unwrap();
    std::fs::write(service.store().root().join("orphan.md"), "orphan").unwrap();

    let result = fetch_doc(&service, "orphan").await;
    assert_eq!(result.is_error, Some(true));
}
