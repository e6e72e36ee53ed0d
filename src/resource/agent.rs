//! Agent target declared in the project configuration.

use super::validation::{Validator, Violations};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

fn default_true() -> bool {
    true
}

/// An agent the project renders configuration for (rendering itself lives outside this crate).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentConfig {
    #[serde(default)]
    pub name: String,

    /// Where rendered output goes, relative to the project root.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_path: Option<PathBuf>,

    #[serde(default = "default_true")]
    pub include_skills: bool,

    #[serde(default = "default_true")]
    pub include_mcp_servers: bool,
}

impl AgentConfig {
    pub fn validate(&self) -> Result<(), Violations> {
        let mut v = Validator::new();
        v.required("name", &self.name);
        if let Some(path) = &self.output_path {
            v.required("output_path", &path.to_string_lossy());
        }
        v.finish()
    }
}
