use super::super::{CallToolResult, Content};
use context_protocol::{codes, ErrorEnvelope, ToolNextAction, TOOL_ENUMERATE, TOOL_UPSERT};
use context_store::StoreError;
use serde_json::json;
use thiserror::Error;

/// Everything a tool call can fail with. Never escapes as a protocol fault: each variant is
/// rendered into an error-flagged tool result.
#[derive(Debug, Error)]
pub(in crate::tools::dispatch) enum ToolError {
    #[error("Missing required argument '{0}'")]
    MissingArgument(&'static str),

    #[error("{}", unknown_project_message(.slug, .available))]
    UnknownProject {
        slug: String,
        available: Vec<String>,
    },

    #[error(transparent)]
    Store(#[from] StoreError),
}

fn unknown_project_message(slug: &str, available: &[String]) -> String {
    if available.is_empty() {
        format!(
            "Project '{slug}' not found. No projects are registered yet; use the {TOOL_UPSERT} tool to create one."
        )
    } else {
        format!(
            "Project '{slug}' not found. Available projects: {}",
            available.join(", ")
        )
    }
}

impl ToolError {
    pub(in crate::tools::dispatch) fn envelope(&self) -> ErrorEnvelope {
        let message = self.to_string();
        match self {
            Self::MissingArgument(name) => ErrorEnvelope::new(codes::MISSING_ARGUMENT, message)
                .with_hint(format!("Pass '{name}' in the tool arguments.")),
            Self::UnknownProject { slug, available } => {
                let mut envelope = ErrorEnvelope::new(codes::NOT_FOUND, message)
                    .with_next_action(create_action(slug));
                if !available.is_empty() {
                    envelope = envelope.with_next_action(ToolNextAction {
                        tool: TOOL_ENUMERATE.to_string(),
                        args: json!({}),
                        reason: "List registered projects with descriptions.".to_string(),
                    });
                }
                envelope
            }
            Self::Store(err) => store_envelope(err, message),
        }
    }
}

/// Store failures keep the store's own code so callers see `io` vs `serialization` vs
/// rejections without a second mapping table.
fn store_envelope(err: &StoreError, message: String) -> ErrorEnvelope {
    let envelope = ErrorEnvelope::new(err.code(), message);
    match err {
        StoreError::InvalidSlug(_) => envelope.with_hint("Slugs match ^[a-z0-9]+(-[a-z0-9]+)*$."),
        StoreError::NotFound { slug, .. } => envelope.with_next_action(create_action(slug)),
        StoreError::PathTraversal(_) | StoreError::Io(_) | StoreError::Serialization(_) => {
            envelope
        }
    }
}

fn create_action(slug: &str) -> ToolNextAction {
    ToolNextAction {
        tool: TOOL_UPSERT.to_string(),
        args: json!({ "project": slug }),
        reason: "Create the project with title, description and content.".to_string(),
    }
}

pub(in crate::tools::dispatch) fn tool_error(err: ToolError) -> CallToolResult {
    if let ToolError::Store(StoreError::Io(io)) = &err {
        log::error!("tool failed on store I/O: {io}");
    }
    tool_error_envelope(err.envelope())
}

pub(in crate::tools::dispatch) fn tool_error_envelope(error: ErrorEnvelope) -> CallToolResult {
    let mut text = error.message.clone();
    if let Some(hint) = error.hint.as_deref().filter(|h| !h.trim().is_empty()) {
        text.push_str(&format!("\nhint: {hint}"));
    }
    for action in &error.next_actions {
        text.push_str(&format!("\nnext: {} ({})", action.tool, action.reason));
    }

    let mut result = CallToolResult::error(vec![Content::text(text)]);
    result.structured_content = Some(json!({ "error": error }));
    result
}
