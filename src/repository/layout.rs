use super::local::{LocalMcpServerRepository, LocalSkillRepository};
use crate::error::RepositoryError;
use std::path::{Path, PathBuf};

pub const SKILLS_DIR: &str = "skills";
pub const MCP_SERVERS_DIR: &str = "mcp-servers";

/// Directory layout of a repository root:
///
/// ```text
/// <root>/
/// ├── skills/<uuid>.json
/// └── mcp-servers/<uuid>.json
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryLayout {
    root: PathBuf,
}

impl RepositoryLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn skills_dir(&self) -> PathBuf {
        self.root.join(SKILLS_DIR)
    }

    pub fn mcp_servers_dir(&self) -> PathBuf {
        self.root.join(MCP_SERVERS_DIR)
    }

    /// Skill repository on disk; the directory is created if missing.
    pub fn open_skills(&self) -> Result<LocalSkillRepository, RepositoryError> {
        LocalSkillRepository::open(&self.skills_dir())
    }

    /// MCP server repository on disk; the directory is created if missing.
    pub fn open_mcp_servers(&self) -> Result<LocalMcpServerRepository, RepositoryError> {
        LocalMcpServerRepository::open(&self.mcp_servers_dir())
    }
}
