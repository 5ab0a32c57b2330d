//! Wire-level types shared by the context MCP server and its clients.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub const RESOURCE_SCHEME: &str = "context";
pub const RESOURCE_NAMESPACE: &str = "projects";
pub const RESOURCE_MIME_TYPE: &str = "text/markdown";

pub const TOOL_FETCH: &str = "fetch";
pub const TOOL_UPSERT: &str = "upsert";
pub const TOOL_ENUMERATE: &str = "enumerate";

/// Error codes carried in [`ErrorEnvelope::code`].
pub mod codes {
    pub const NOT_FOUND: &str = "not_found";
    pub const MISSING_ARGUMENT: &str = "missing_argument";
}

/// `context://projects/`
#[must_use]
pub fn resource_uri_prefix() -> String {
    format!("{RESOURCE_SCHEME}://{RESOURCE_NAMESPACE}/")
}

#[must_use]
pub fn resource_uri(slug: &str) -> String {
    format!("{}{slug}", resource_uri_prefix())
}

/// Slug part of a resource URI, if `uri` carries the fixed scheme and namespace.
#[must_use]
pub fn slug_from_resource_uri(uri: &str) -> Option<&str> {
    uri.strip_prefix(RESOURCE_SCHEME)?
        .strip_prefix("://")?
        .strip_prefix(RESOURCE_NAMESPACE)?
        .strip_prefix('/')
        .filter(|slug| !slug.is_empty())
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, JsonSchema)]
pub struct ToolNextAction {
    pub tool: String,
    pub args: serde_json::Value,
    pub reason: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, JsonSchema)]
pub struct ErrorEnvelope {
    pub code: String,
    pub message: String,
    pub hint: Option<String>,
    #[serde(default)]
    pub next_actions: Vec<ToolNextAction>,
}

impl ErrorEnvelope {
    pub fn new(code: &str, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
            hint: None,
            next_actions: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    #[must_use]
    pub fn with_next_action(mut self, action: ToolNextAction) -> Self {
        self.next_actions.push(action);
        self
    }
}
