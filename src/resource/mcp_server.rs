use super::validation::{Validator, Violations};
use super::Resource;
use crate::types::ResourceKind;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

const TRANSPORT_FIELDS: &[&str] = &["command", "url"];

/// MCP server definition.
///
/// A stdio server sets `command` (with optional `args`/`env`); an HTTP server sets `url`
/// (with optional `headers`). Exactly one of the two must be present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct McpServer {
    #[serde(default)]
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<String>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub env: BTreeMap<String, String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub headers: BTreeMap<String, String>,
}

impl McpServer {
    pub fn is_stdio(&self) -> bool {
        self.command.is_some()
    }
}

impl Resource for McpServer {
    const KIND: ResourceKind = ResourceKind::McpServers;

    fn identity(&self) -> &str {
        &self.name
    }

    fn validate(&self) -> Result<(), Violations> {
        let mut v = Validator::new();
        v.required("name", &self.name)
            .exactly_one(TRANSPORT_FIELDS, &[self.command.is_some(), self.url.is_some()])
            .not_blank("command", self.command.as_deref())
            .not_blank("url", self.url.as_deref());
        v.finish()
    }
}
