use rmcp::schemars;
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Deserialize, schemars::JsonSchema)]
pub struct UpsertRequest {
    /// Project slug
    #[schemars(description = "Project slug: lowercase kebab-case, e.g. 'my-project'")]
    pub project: Option<String>,

    /// Human-readable title
    #[schemars(description = "Human-readable project title")]
    pub title: Option<String>,

    /// One-line summary shown in listings
    #[schemars(description = "Short description shown by enumerate")]
    pub description: Option<String>,

    /// Full document body; replaces any previous body
    #[schemars(description = "Full context document (markdown). Replaces the previous body entirely.")]
    pub content: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct UpsertResult {
    pub project: String,
    pub created: bool,
    pub title: String,
    pub updated_at: String,
    pub content_chars: usize,
}
