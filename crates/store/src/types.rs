use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Metadata persisted next to every document body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectMeta {
    pub slug: String,
    pub title: String,
    pub description: String,
    pub updated_at: DateTime<Utc>,
}

impl ProjectMeta {
    /// `updatedAt` as RFC 3339 with millisecond precision.
    #[must_use]
    pub fn updated_at_display(&self) -> String {
        self.updated_at
            .to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
    }
}
