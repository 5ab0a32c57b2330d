//! Context MCP Server
//!
//! Serves a slug-addressed store of project context documents to AI agents over MCP (stdio).
//!
//! ## Tools
//!
//! - `fetch` - Read one project's context document
//! - `upsert` - Create or replace a project's document and metadata
//! - `enumerate` - List registered projects
//!
//! ## Resources
//!
//! Every stored project is also readable as `context://projects/<slug>`.
//!
//! ## Usage
//!
//! Add to your MCP client configuration:
//! ```json
//! {
//!   "mcpServers": {
//!     "context": {
//!       "command": "context-mcp",
//!       "env": { "CONTEXT_STORE_DIR": "/path/to/contexts" }
//!     }
//!   }
//! }
//! ```

use anyhow::{Context as AnyhowContext, Result};
use context_store::Store;
use rmcp::transport::stdio;
use rmcp::ServiceExt;

pub mod resources;
pub mod runtime_env;
#[cfg(test)]
mod test_support;
mod tools;

pub use resources::{ContextResource, ResourceCatalog};
pub use runtime_env::StoreConfig;
pub use tools::ProjectContextService;

pub async fn main_entry() -> Result<()> {
    if std::env::args_os().skip(1).any(|arg| arg == "--print-tools") {
        let inventory = tools::catalog::tool_inventory_json(env!("CARGO_PKG_VERSION"));
        println!("{}", serde_json::to_string_pretty(&inventory)?);
        return Ok(());
    }

    // Logging goes to stderr only (stdout is for MCP protocol)
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("warn,context_mcp=info"),
    )
    .target(env_logger::Target::Stderr)
    .init();

    let config = StoreConfig::from_env().context("failed to resolve the context store directory")?;
    log::info!(
        "Starting context MCP server (store: {}, from {})",
        config.root.display(),
        config.source
    );

    let service = ProjectContextService::new(Store::new(config.root));
    let server = service.serve(stdio()).await?;

    server.waiting().await?;

    log::debug!("Context MCP server stopped");
    Ok(())
}
