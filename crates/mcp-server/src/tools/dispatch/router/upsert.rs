use super::super::{tool_success, CallToolResult, McpError, ProjectContextService, UpsertRequest};
use super::error::{tool_error, ToolError};
use crate::tools::schemas::upsert::UpsertResult;
use context_store::{validate_slug, Store};

/// Create or replace a project's document and metadata.
pub(in crate::tools::dispatch) async fn upsert(
    service: &ProjectContextService,
    request: UpsertRequest,
) -> Result<CallToolResult, McpError> {
    match upsert_document(service.store(), &request).await {
        Ok(result) => Ok(tool_success(
            render_confirmation(&result),
            serde_json::to_value(&result).ok(),
        )),
        Err(err) => Ok(tool_error(err)),
    }
}

fn required<'a>(value: &'a Option<String>, name: &'static str) -> Result<&'a str, ToolError> {
    value.as_deref().ok_or(ToolError::MissingArgument(name))
}

async fn upsert_document(store: &Store, request: &UpsertRequest) -> Result<UpsertResult, ToolError> {
    let project = required(&request.project, "project")?;
    let title = required(&request.title, "title")?;
    let description = required(&request.description, "description")?;
    let content = required(&request.content, "content")?;
    // Boundary check on the raw argument; the store validates again before building paths.
    validate_slug(project)?;

    let existed = store.project_exists(project).await?;
    let meta = store
        .write_context(project, content, title, description)
        .await?;
    log::debug!(
        "upsert {project}: {}",
        if existed { "updated" } else { "created" }
    );

    Ok(UpsertResult {
        project: meta.slug.clone(),
        created: !existed,
        title: meta.title.clone(),
        updated_at: meta.updated_at_display(),
        content_chars: content.chars().count(),
    })
}

fn render_confirmation(result: &UpsertResult) -> String {
    let verb = if result.created { "Created" } else { "Updated" };
    format!(
        "{verb} project '{}'.\nTitle: {}\nUpdated: {}\nContent length: {} characters",
        result.project, result.title, result.updated_at, result.content_chars
    )
}
