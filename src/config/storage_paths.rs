//! RepositoryConfig and path resolution for the local repository.

use crate::repository::RepositoryLayout;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_REPOSITORY_ROOT: &str = ".projectkit/repository";

fn default_root() -> PathBuf {
    PathBuf::from(DEFAULT_REPOSITORY_ROOT)
}

/// Where persisted skills and MCP servers live.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryConfig {
    /// Repository root; relative paths are resolved against the project root.
    #[serde(default = "default_root")]
    pub root: PathBuf,
}

impl RepositoryConfig {
    pub fn resolve_root(&self, project_root: &Path) -> PathBuf {
        if self.root.is_absolute() {
            self.root.clone()
        } else {
            project_root.join(&self.root)
        }
    }

    pub fn layout(&self, project_root: &Path) -> RepositoryLayout {
        RepositoryLayout::new(self.resolve_root(project_root))
    }
}

impl Default for RepositoryConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
        }
    }
}
