use rmcp::schemars;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize, schemars::JsonSchema)]
pub struct FetchRequest {
    /// Project slug
    #[schemars(description = "Project slug: lowercase kebab-case, e.g. 'my-project'")]
    pub project: Option<String>,
}
