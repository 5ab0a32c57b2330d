//! MCP tool and resource dispatch for the project context store.

use super::catalog::tool_instructions;
use super::schemas::fetch::FetchRequest;
use super::schemas::upsert::UpsertRequest;
use crate::resources::{ContextResource, ResourceCatalog};
use context_protocol::RESOURCE_MIME_TYPE;
use context_store::Store;
use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ListResourcesResult, PaginatedRequestParam,
    ReadResourceRequestParam, ReadResourceResult, ResourceContents, ServerCapabilities,
    ServerInfo,
};
use rmcp::service::RequestContext;
use rmcp::{tool, tool_handler, tool_router, ErrorData as McpError, RoleServer, ServerHandler};
use serde_json::json;

mod router;

#[cfg(test)]
mod tests;

/// Project context MCP service.
///
/// Holds only the store handle; tools and resources re-read the store on every call.
#[derive(Clone)]
pub struct ProjectContextService {
    store: Store,
    /// Tool router
    tool_router: ToolRouter<Self>,
}

impl ProjectContextService {
    pub fn new(store: Store) -> Self {
        Self {
            store,
            tool_router: Self::tool_router(),
        }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    fn catalog(&self) -> ResourceCatalog<'_> {
        ResourceCatalog::new(&self.store)
    }
}

#[tool_router]
impl ProjectContextService {
    /// Read a project's context document
    #[tool(
        description = "Fetch the full context document of one project by slug. Unknown slugs return an error listing the registered projects."
    )]
    pub async fn fetch(
        &self,
        Parameters(request): Parameters<FetchRequest>,
    ) -> Result<CallToolResult, McpError> {
        router::fetch::fetch(self, request).await
    }

    /// Create or replace a project's context document
    #[tool(
        description = "Create or fully replace a project's context document. Requires project (slug), title, description and content; the previous body is overwritten, never merged."
    )]
    pub async fn upsert(
        &self,
        Parameters(request): Parameters<UpsertRequest>,
    ) -> Result<CallToolResult, McpError> {
        router::upsert::upsert(self, request).await
    }

    /// List registered projects
    #[tool(
        description = "List every registered project with its slug, title, description and last update time."
    )]
    pub async fn enumerate(&self) -> Result<CallToolResult, McpError> {
        router::enumerate::enumerate(self).await
    }
}

#[tool_handler]
impl ServerHandler for ProjectContextService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(tool_instructions()),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .build(),
            server_info: Implementation::from_build_env(),
            ..Default::default()
        }
    }

    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, McpError> {
        let resources = self.catalog().list_resources().await.map_err(|err| {
            log::error!("listing resources failed: {err}");
            McpError::internal_error(err.to_string(), None)
        })?;
        Ok(ListResourcesResult::with_all_items(
            resources.iter().map(ContextResource::to_mcp).collect(),
        ))
    }

    async fn read_resource(
        &self,
        request: ReadResourceRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, McpError> {
        let catalog = self.catalog();
        let Some(resource) = catalog.resolve_by_uri(&request.uri).await else {
            return Err(McpError::resource_not_found(
                format!("Unknown resource '{}'", request.uri),
                Some(json!({ "uri": request.uri })),
            ));
        };

        let text = catalog
            .read_resource_content(&resource.slug)
            .await
            .map_err(|err| McpError::internal_error(err.to_string(), None))?;

        let mut contents = ResourceContents::text(text, resource.uri);
        if let ResourceContents::TextResourceContents { mime_type, .. } = &mut contents {
            *mime_type = Some(RESOURCE_MIME_TYPE.to_string());
        }
        Ok(ReadResourceResult {
            contents: vec![contents],
        })
    }
}

/// Text payload plus optional structured mirror, the shape every successful tool returns.
fn tool_success(text: String, structured: Option<serde_json::Value>) -> CallToolResult {
    let mut result = CallToolResult::success(vec![Content::text(text)]);
    result.structured_content = structured;
    result
}
