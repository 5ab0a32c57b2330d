use super::super::{tool_success, CallToolResult, FetchRequest, McpError, ProjectContextService};
use super::error::{tool_error, ToolError};
use context_store::{validate_slug, Store};

/// Read one project's document, verbatim.
pub(in crate::tools::dispatch) async fn fetch(
    service: &ProjectContextService,
    request: FetchRequest,
) -> Result<CallToolResult, McpError> {
    match fetch_document(service.store(), &request).await {
        Ok(body) => Ok(tool_success(body, None)),
        Err(err) => Ok(tool_error(err)),
    }
}

async fn fetch_document(store: &Store, request: &FetchRequest) -> Result<String, ToolError> {
    let slug = request
        .project
        .as_deref()
        .ok_or(ToolError::MissingArgument("project"))?;
    // Boundary check on the raw argument; the store validates again before building paths.
    validate_slug(slug)?;

    if !store.project_exists(slug).await? {
        let available = store
            .list_projects()
            .await?
            .into_iter()
            .map(|meta| meta.slug)
            .collect();
        return Err(ToolError::UnknownProject {
            slug: slug.to_string(),
            available,
        });
    }

    log::debug!("fetch {slug}");
    Ok(store.read_context(slug).await?)
}
