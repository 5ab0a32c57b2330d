use super::super::{tool_success, CallToolResult, McpError, ProjectContextService};
use super::error::{tool_error, ToolError};
use crate::tools::schemas::enumerate::{EnumerateResult, ProjectSummary};
use context_protocol::TOOL_UPSERT;
use context_store::ProjectMeta;

const EMPTY_STORE_MESSAGE: &str = "No projects registered yet.";

/// List every registered project.
pub(in crate::tools::dispatch) async fn enumerate(
    service: &ProjectContextService,
) -> Result<CallToolResult, McpError> {
    let projects = match service.store().list_projects().await {
        Ok(projects) => projects,
        Err(err) => return Ok(tool_error(ToolError::from(err))),
    };

    let structured = EnumerateResult {
        projects: projects.iter().map(summary).collect(),
    };
    Ok(tool_success(
        render_listing(&projects),
        serde_json::to_value(&structured).ok(),
    ))
}

fn summary(meta: &ProjectMeta) -> ProjectSummary {
    ProjectSummary {
        slug: meta.slug.clone(),
        title: meta.title.clone(),
        description: meta.description.clone(),
        updated_at: meta.updated_at_display(),
    }
}

fn render_listing(projects: &[ProjectMeta]) -> String {
    if projects.is_empty() {
        return format!("{EMPTY_STORE_MESSAGE} Use the {TOOL_UPSERT} tool to create one.");
    }

    let mut lines = vec![format!("Registered projects ({}):", projects.len())];
    for meta in projects {
        lines.push(format!("- {}: {}", meta.slug, meta.description));
        lines.push(format!(
            "  title: {} | updated: {}",
            meta.title,
            meta.updated_at_display()
        ));
    }
    lines.join("\n")
}
