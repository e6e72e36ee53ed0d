//! MergeService: stacks sources over the defaults and deserializes to ProjectConfig.

use super::sources::{environment, project_file};
use super::ProjectConfig;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File};
use std::path::Path;

/// Builder seeded with `ProjectConfig::default()`, the lowest-precedence layer.
pub fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let defaults = Config::try_from(&ProjectConfig::default())?;
    Ok(Config::builder().add_source(defaults))
}

/// Merge service for config composition.
pub struct MergeService;

impl MergeService {
    /// Precedence: defaults (lowest) -> project file -> environment (highest).
    pub fn load(project_root: &Path) -> Result<ProjectConfig, ConfigError> {
        let builder = builder_with_defaults()?;
        let builder = project_file::add_to_builder(builder, project_root)?;
        let builder = environment::add_to_builder(builder)?;
        builder.build()?.try_deserialize()
    }

    /// Load from an explicit file, which must exist, with environment overlay.
    pub fn load_from_file(path: &Path) -> Result<ProjectConfig, ConfigError> {
        let builder = builder_with_defaults()?.add_source(File::from(path).required(true));
        let builder = environment::add_to_builder(builder)?;
        builder.build()?.try_deserialize()
    }
}
