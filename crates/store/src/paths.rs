use crate::error::{Result, StoreError};
use std::path::{Component, Path, PathBuf};

pub const CONTENT_EXT: &str = ".md";
pub const META_EXT: &str = ".meta.json";

#[must_use]
pub fn content_file_name(slug: &str) -> String {
    format!("{slug}{CONTENT_EXT}")
}

#[must_use]
pub fn meta_file_name(slug: &str) -> String {
    format!("{slug}{META_EXT}")
}

/// Joins `filename` onto `root` and proves the result stays inside `root`.
///
/// The check is lexical: `.`/`..` are folded without touching the filesystem, and the
/// comparison is per path component, so a sibling such as `root-evil` never matches `root`.
/// An absolute `filename` replaces `root` on join and is rejected the same way.
pub fn resolve_safe_path(root: &Path, filename: &str) -> Result<PathBuf> {
    let root = normalize(root);
    let candidate = normalize(&root.join(filename));
    if candidate == root || candidate.starts_with(&root) {
        return Ok(candidate);
    }
    log::warn!(
        "rejected path traversal: {filename:?} resolves to {} outside {}",
        candidate.display(),
        root.display()
    );
    Err(StoreError::PathTraversal(candidate))
}

fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !out.pop() {
                    out.push(component.as_os_str());
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}
