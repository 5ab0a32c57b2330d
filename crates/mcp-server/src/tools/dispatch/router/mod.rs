// Per-tool dispatch functions used by the MCP tool router.

pub(super) mod enumerate;
pub(super) mod error;
pub(super) mod fetch;
pub(super) mod upsert;
