//! Resource catalog: every stored project, exposed as `context://projects/<slug>`.
//!
//! The catalog has no registry of its own. Each call re-derives the list from the store, so
//! enumeration always reflects the latest upsert.

use context_protocol::{resource_uri, slug_from_resource_uri, RESOURCE_MIME_TYPE};
use context_store::{is_valid_slug, ProjectMeta, Store};
use rmcp::model::{AnnotateAble, RawResource, Resource};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextResource {
    pub uri: String,
    pub name: String,
    pub description: String,
    pub mime_type: String,
    pub slug: String,
}

impl ContextResource {
    fn from_meta(meta: ProjectMeta) -> Self {
        Self {
            uri: resource_uri(&meta.slug),
            name: meta.title,
            description: meta.description,
            mime_type: RESOURCE_MIME_TYPE.to_string(),
            slug: meta.slug,
        }
    }

    pub fn to_mcp(&self) -> Resource {
        let mut raw = RawResource::new(self.uri.clone(), self.name.clone());
        raw.description = Some(self.description.clone());
        raw.mime_type = Some(self.mime_type.clone());
        raw.no_annotation()
    }
}

pub struct ResourceCatalog<'a> {
    store: &'a Store,
}

impl<'a> ResourceCatalog<'a> {
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    pub async fn list_resources(&self) -> context_store::Result<Vec<ContextResource>> {
        let projects = self.store.list_projects().await?;
        Ok(projects.into_iter().map(ContextResource::from_meta).collect())
    }

    /// Looks up the resource behind `uri`. Absence is a normal answer, not an error: a foreign
    /// prefix, a malformed slug, and an unknown project all yield `None`.
    pub async fn resolve_by_uri(&self, uri: &str) -> Option<ContextResource> {
        let slug = slug_from_resource_uri(uri)?;
        if !is_valid_slug(slug) {
            return None;
        }
        match self.store.project_exists(slug).await {
            Ok(true) => {}
            Ok(false) => return None,
            Err(err) => {
                log::debug!("resource lookup for {uri} failed: {err}");
                return None;
            }
        }
        match self.store.read_meta(slug).await {
            Ok(meta) => Some(ContextResource::from_meta(meta)),
            Err(err) => {
                log::debug!("resource metadata for {uri} unreadable: {err}");
                None
            }
        }
    }

    pub async fn read_resource_content(&self, slug: &str) -> context_store::Result<String> {
        self.store.read_context(slug).await
    }
}
