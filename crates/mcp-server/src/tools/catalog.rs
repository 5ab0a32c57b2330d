use context_protocol::{resource_uri_prefix, TOOL_ENUMERATE, TOOL_FETCH, TOOL_UPSERT};
use serde_json::json;

#[derive(Clone, Copy, Debug)]
pub(crate) struct ToolDescriptor {
    pub(crate) name: &'static str,
    pub(crate) summary: &'static str,
}

pub(crate) const TOOL_CATALOG: &[ToolDescriptor] = &[
    ToolDescriptor {
        name: TOOL_FETCH,
        summary: "Read one project's context document by slug.",
    },
    ToolDescriptor {
        name: TOOL_UPSERT,
        summary: "Create or fully replace a project's context document and metadata.",
    },
    ToolDescriptor {
        name: TOOL_ENUMERATE,
        summary: "List every registered project with description and last update.",
    },
];

pub(crate) fn tool_inventory_json(version: &str) -> serde_json::Value {
    let tools: Vec<serde_json::Value> = TOOL_CATALOG
        .iter()
        .map(|tool| json!({ "name": tool.name, "summary": tool.summary }))
        .collect();

    json!({
        "binary": "context-mcp",
        "version": version,
        "count": tools.len(),
        "tools": tools,
    })
}

pub(crate) fn tool_instructions() -> String {
    let mut lines = vec![
        "Context MCP is the single source of truth for project context documents.".to_string(),
        format!(
            "Each project is addressed by a kebab-case slug and exposed as the resource {}<slug>.",
            resource_uri_prefix()
        ),
        "Tools:".to_string(),
    ];
    for tool in TOOL_CATALOG {
        lines.push(format!("- {}: {}", tool.name, tool.summary));
    }
    lines.join("\n")
}
