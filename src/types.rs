//! Core types shared by loaders, the aggregator and repositories.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Resource kinds that can be loaded from a configured source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    Instructions,
    Skills,
    McpServers,
    Workflows,
    Standards,
    Rulebooks,
}

impl ResourceKind {
    /// All kinds in the order the CLI reports them.
    pub const ALL: [ResourceKind; 6] = [
        ResourceKind::Instructions,
        ResourceKind::Skills,
        ResourceKind::McpServers,
        ResourceKind::Workflows,
        ResourceKind::Standards,
        ResourceKind::Rulebooks,
    ];

    /// Stable slug used in config keys and machine-readable output.
    pub fn slug(self) -> &'static str {
        match self {
            ResourceKind::Instructions => "instructions",
            ResourceKind::Skills => "skills",
            ResourceKind::McpServers => "mcp_servers",
            ResourceKind::Workflows => "workflows",
            ResourceKind::Standards => "standards",
            ResourceKind::Rulebooks => "rulebooks",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ResourceKind::Instructions => "instructions",
            ResourceKind::Skills => "skills",
            ResourceKind::McpServers => "MCP servers",
            ResourceKind::Workflows => "workflows",
            ResourceKind::Standards => "documentation standards",
            ResourceKind::Rulebooks => "rulebooks",
        };
        f.write_str(label)
    }
}
