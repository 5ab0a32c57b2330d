use crate::error::{NotFoundKind, Result, StoreError};
use crate::paths::{content_file_name, meta_file_name, resolve_safe_path, META_EXT};
use crate::slug::{is_valid_slug, validate_slug};
use crate::types::ProjectMeta;
use chrono::{DateTime, Utc};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

/// File-backed document store rooted at a single directory.
///
/// The store owns all file I/O. It keeps no in-memory state besides the root, so every
/// read reflects the latest write.
#[derive(Debug, Clone)]
pub struct Store {
    root: PathBuf,
}

impl Store {
    /// Creates a store for `root`. Relative roots are anchored to the current directory
    /// once, here, so later path checks always compare absolute paths.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let root = if root.is_absolute() {
            root
        } else {
            std::env::current_dir()
                .map(|cwd| cwd.join(&root))
                .unwrap_or(root)
        };
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn content_path(&self, slug: &str) -> Result<PathBuf> {
        validate_slug(slug)?;
        resolve_safe_path(&self.root, &content_file_name(slug))
    }

    fn meta_path(&self, slug: &str) -> Result<PathBuf> {
        validate_slug(slug)?;
        resolve_safe_path(&self.root, &meta_file_name(slug))
    }

    async fn ensure_root(&self) -> Result<()> {
        tokio::fs::create_dir_all(&self.root).await?;
        Ok(())
    }

    /// All projects, sorted by slug.
    ///
    /// Metadata files that fail to parse, or whose recorded slug disagrees with the file
    /// name, are skipped with a warning instead of failing the whole listing.
    pub async fn list_projects(&self) -> Result<Vec<ProjectMeta>> {
        self.ensure_root().await?;

        let mut projects = Vec::new();
        let mut entries = tokio::fs::read_dir(&self.root).await?;
        while let Some(entry) = entries.next_entry().await? {
            let file_name = entry.file_name();
            let Some(slug) = file_name.to_str().and_then(|n| n.strip_suffix(META_EXT)) else {
                continue;
            };
            if !is_valid_slug(slug) || !entry.file_type().await?.is_file() {
                continue;
            }
            match self.read_meta(slug).await {
                Ok(meta) if meta.slug == slug => projects.push(meta),
                Ok(meta) => log::warn!(
                    "skipping {}: records slug '{}' but file name says '{slug}'",
                    entry.path().display(),
                    meta.slug
                ),
                Err(StoreError::Serialization(err)) => {
                    log::warn!("skipping malformed {}: {err}", entry.path().display());
                }
                // Removed between read_dir and read.
                Err(StoreError::NotFound { .. }) => {}
                Err(err) => return Err(err),
            }
        }

        projects.sort_by(|a, b| a.slug.cmp(&b.slug));
        Ok(projects)
    }

    /// True iff both the body and the metadata file are present.
    pub async fn project_exists(&self, slug: &str) -> Result<bool> {
        let content = self.content_path(slug)?;
        let meta = self.meta_path(slug)?;
        Ok(is_file(&content).await? && is_file(&meta).await?)
    }

    pub async fn read_context(&self, slug: &str) -> Result<String> {
        let path = self.content_path(slug)?;
        match tokio::fs::read_to_string(&path).await {
            Ok(content) => Ok(content),
            Err(err) if err.kind() == ErrorKind::NotFound => Err(StoreError::NotFound {
                slug: slug.to_string(),
                kind: NotFoundKind::Content,
            }),
            Err(err) => Err(err.into()),
        }
    }

    pub async fn read_meta(&self, slug: &str) -> Result<ProjectMeta> {
        let path = self.meta_path(slug)?;
        let raw = match tokio::fs::read_to_string(&path).await {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                return Err(StoreError::NotFound {
                    slug: slug.to_string(),
                    kind: NotFoundKind::Meta,
                })
            }
            Err(err) => return Err(err.into()),
        };
        Ok(serde_json::from_str(&raw)?)
    }

    /// Replaces the body and metadata of `slug`, creating the root on first use.
    ///
    /// `updatedAt` always moves forward, even when the clock has not advanced since the
    /// previous write.
    pub async fn write_context(
        &self,
        slug: &str,
        content: &str,
        title: &str,
        description: &str,
    ) -> Result<ProjectMeta> {
        let content_path = self.content_path(slug)?;
        let meta_path = self.meta_path(slug)?;
        self.ensure_root().await?;

        let previous = self
            .read_meta(slug)
            .await
            .ok()
            .map(|meta| meta.updated_at);

        write_atomic(&content_path, content.as_bytes()).await?;

        let meta = ProjectMeta {
            slug: slug.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            updated_at: next_updated_at(previous, Utc::now()),
        };
        let bytes = serde_json::to_vec_pretty(&meta)?;
        write_atomic(&meta_path, &bytes).await?;

        log::debug!(
            "wrote project '{slug}' ({} bytes) to {}",
            content.len(),
            content_path.display()
        );
        Ok(meta)
    }
}

fn next_updated_at(previous: Option<DateTime<Utc>>, now: DateTime<Utc>) -> DateTime<Utc> {
    match previous {
        Some(prev) if prev >= now => prev + chrono::Duration::milliseconds(1),
        _ => now,
    }
}

async fn is_file(path: &Path) -> Result<bool> {
    match tokio::fs::metadata(path).await {
        Ok(meta) => Ok(meta.is_file()),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(false),
        Err(err) => Err(err.into()),
    }
}

async fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let path = path.to_path_buf();
    let bytes = bytes.to_vec();
    tokio::task::spawn_blocking(move || write_atomic_blocking(&path, &bytes))
        .await
        .map_err(|err| StoreError::Io(std::io::Error::other(err)))?
}

/// Each call gets its own uniquely named temp sibling, so concurrent writers to one slug
/// never share a temp file; the last rename wins.
fn write_atomic_blocking(path: &Path, bytes: &[u8]) -> Result<()> {
    let parent = path.parent().unwrap_or(Path::new("."));
    let name = path
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("document");

    let mut tmp = tempfile::Builder::new()
        .prefix(&format!(".{name}."))
        .suffix(".tmp")
        .tempfile_in(parent)?;
    tmp.write_all(bytes)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|err| err.error)?;
    Ok(())
}
