//! Configuration
//!
//! Project configuration is layered with the `config` crate: built-in defaults, then
//! `projectkit.yaml` in the project root, then `PROJECTKIT__*` environment variables.
//! See [`ConfigLoader`].

pub mod facade;
pub mod merge;
pub mod sources;
pub mod storage_paths;

use crate::error::ApiError;
use crate::logging::LoggingConfig;
use crate::resource::AgentConfig;
use crate::types::ResourceKind;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

pub use facade::{ConfigLoader, PROJECT_CONFIG_FILE};
pub use storage_paths::RepositoryConfig;

/// Ordered source URIs per resource kind.
///
/// Order matters: it is the aggregation order and the encounter order for duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourcesConfig {
    #[serde(default)]
    pub instructions: Vec<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub mcp_servers: Vec<String>,
    #[serde(default)]
    pub workflows: Vec<String>,
    #[serde(default)]
    pub standards: Vec<String>,
    #[serde(default)]
    pub rulebooks: Vec<String>,
}

impl SourcesConfig {
    pub fn uris(&self, kind: ResourceKind) -> &[String] {
        match kind {
            ResourceKind::Instructions => &self.instructions,
            ResourceKind::Skills => &self.skills,
            ResourceKind::McpServers => &self.mcp_servers,
            ResourceKind::Workflows => &self.workflows,
            ResourceKind::Standards => &self.standards,
            ResourceKind::Rulebooks => &self.rulebooks,
        }
    }

    pub fn is_empty(&self) -> bool {
        ResourceKind::ALL.iter().all(|&kind| self.uris(kind).is_empty())
    }
}

/// Root configuration for a project.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectConfig {
    #[serde(default)]
    pub sources: SourcesConfig,

    /// Agents declared by the project.
    #[serde(default)]
    pub agents: Vec<AgentConfig>,

    #[serde(default)]
    pub repository: RepositoryConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ProjectConfig {
    /// Semantic checks that deserialization cannot express.
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.repository.root.as_os_str().is_empty() {
            return Err(ApiError::ConfigError(
                "repository.root must not be empty".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for (index, agent) in self.agents.iter().enumerate() {
            agent.validate().map_err(|violations| {
                ApiError::ConfigError(format!("agents[{}]: {}", index, violations))
            })?;
            if !seen.insert(agent.name.as_str()) {
                return Err(ApiError::ConfigError(format!(
                    "agents[{}]: duplicate agent name '{}'",
                    index, agent.name
                )));
            }
        }
        Ok(())
    }
}
