use super::*;
use tempfile::TempDir;

mod fetch;

fn service_in(tmp: &TempDir) -> ProjectContextService {
    ProjectContextService::new(Store::new(tmp.path().join("contexts")))
}

fn text_of(result: &CallToolResult) -> String {
    result
        .content
        .first()
        .and_then(|c| c.as_text())
        .map(|t| t.text.clone())
        .expect("tool result has text content")
}

async fn upsert_doc(
    service: &ProjectContextService,
    project: &str,
    title: &str,
    description: &str,
    content: &str,
) -> CallToolResult {
    service
        .upsert(Parameters(UpsertRequest {
            project: Some(project.to_string()),
            title: Some(title.to_string()),
            description: Some(description.to_string()),
            content: Some(content.to_string()),
        }))
        .await
        .expect("upsert never raises a protocol error")
}

async fn fetch_doc(service: &ProjectContextService, project: &str) -> CallToolResult {
    service
        .fetch(Parameters(FetchRequest {
            project: Some(project.to_string()),
        }))
        .await
        .expect("fetch never raises a protocol error")
}

#[tokio::test]
async fn demo_project_scenario() {
    let tmp = TempDir::new().unwrap();
    let service = service_in(&tmp);

    let created = upsert_doc(&service, "demo-project", "Demo", "A demo", "# Demo\nHello").await;
    assert_ne!(created.is_error, Some(true), "{}", text_of(&created));

    let fetched = fetch_doc(&service, "demo-project").await;
    assert_ne!(fetched.is_error, Some(true));
    assert_eq!(text_of(&fetched), "# Demo\nHello");

    let listing = service.enumerate().await.unwrap();
    let text = text_of(&listing);
    assert!(text.contains("demo-project"), "{text}");
    assert!(text.contains("A demo"), "{text}");
    let structured = listing.structured_content.expect("structured listing");
    assert_eq!(structured["projects"][0]["slug"], "demo-project");
}

#[tokio::test]
async fn enumerate_on_empty_store_is_explicit() {
    let tmp = TempDir::new().unwrap();
    let service = service_in(&tmp);

    let listing = service.enumerate().await.unwrap();
    assert_ne!(listing.is_error, Some(true));
    assert!(text_of(&listing).contains("No projects registered yet"));
}

#[test]
fn server_info_advertises_tools_and_resources() {
    let tmp = TempDir::new().unwrap();
    let info = service_in(&tmp).get_info();
    assert!(info.capabilities.tools.is_some());
    assert!(info.capabilities.resources.is_some());
    assert!(info.instructions.unwrap_or_default().contains("enumerate"));
}

#[test]
fn tool_router_exposes_exactly_three_tools() {
    let tmp = TempDir::new().unwrap();
    let service = service_in(&tmp);
    let mut names: Vec<String> = service
        .tool_router
        .list_all()
        .into_iter()
        .map(|tool| tool.name.to_string())
        .collect();
    names.sort();
    assert_eq!(names, vec!["enumerate", "fetch", "upsert"]);
}
