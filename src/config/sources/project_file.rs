//! Project file source: `<project-root>/projectkit.yaml`, optional.

use crate::config::PROJECT_CONFIG_FILE;
use config::builder::DefaultState;
use config::{ConfigBuilder, ConfigError, File, FileFormat};
use std::path::Path;

pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
    project_root: &Path,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let path = project_root.join(PROJECT_CONFIG_FILE);
    if path.exists() {
        tracing::debug!(path = %path.display(), "Using project config file");
    }
    Ok(builder.add_source(
        File::from(path)
            .format(FileFormat::Yaml)
            .required(false),
    ))
}
