//! ConfigLoader facade delegating to the merge service.

use super::merge::MergeService;
use super::ProjectConfig;
use crate::error::ApiError;
use std::path::Path;

/// Name of the project configuration file, looked up in the project root.
pub const PROJECT_CONFIG_FILE: &str = "projectkit.yaml";

/// Configuration loader facade.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration for a project root: defaults, `projectkit.yaml`, environment.
    pub fn load(project_root: &Path) -> Result<ProjectConfig, ApiError> {
        let config = MergeService::load(project_root)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a specific file with environment overlay.
    pub fn load_from_file(path: &Path) -> Result<ProjectConfig, ApiError> {
        let config = MergeService::load_from_file(path)?;
        config.validate()?;
        Ok(config)
    }
}
