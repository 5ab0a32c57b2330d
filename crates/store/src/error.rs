use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, StoreError>;

/// Which half of a document pair was missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotFoundKind {
    Content,
    Meta,
}

impl fmt::Display for NotFoundKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Content => f.write_str("context"),
            Self::Meta => f.write_str("metadata"),
        }
    }
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error(
        "Invalid project slug '{0}': use lowercase letters, digits and single hyphens (e.g. 'my-project')"
    )]
    InvalidSlug(String),

    #[error("Path '{}' escapes the store root", .0.display())]
    PathTraversal(PathBuf),

    #[error("No {kind} found for project '{slug}'. Use the upsert tool to create it.")]
    NotFound { slug: String, kind: NotFoundKind },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl StoreError {
    /// Stable machine-readable code, used in tool error envelopes.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidSlug(_) => "invalid_slug",
            Self::PathTraversal(_) => "path_traversal",
            Self::NotFound { .. } => "not_found",
            Self::Io(_) => "io",
            Self::Serialization(_) => "serialization",
        }
    }
}
