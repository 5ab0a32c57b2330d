use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ProjectSummary {
    pub slug: String,
    pub title: String,
    pub description: String,
    pub updated_at: String,
}

#[derive(Debug, Serialize)]
pub struct EnumerateResult {
    pub projects: Vec<ProjectSummary>,
}
