//! Context MCP tool surface.
//!
//! Schemas, dispatch, and the tool catalog live in separate submodules; per-tool handlers sit
//! under `dispatch::router`.

pub(crate) mod catalog;
mod dispatch;
pub(crate) mod schemas;

pub use dispatch::ProjectContextService;
