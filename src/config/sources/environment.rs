//! Environment variable source: PROJECTKIT prefix with __ separator.
//!
//! `PROJECTKIT__REPOSITORY__ROOT=/srv/kit` sets `repository.root`. Source lists take a
//! comma-separated value: `PROJECTKIT__SOURCES__SKILLS=local://a,local://b`.

use crate::types::ResourceKind;
use config::builder::DefaultState;
use config::{ConfigBuilder, ConfigError, Environment};

pub const ENV_PREFIX: &str = "PROJECTKIT";

pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let mut environment = Environment::with_prefix(ENV_PREFIX)
        .separator("__")
        .list_separator(",")
        .try_parsing(true);
    for kind in ResourceKind::ALL {
        environment = environment.with_list_parse_key(&format!("sources.{}", kind.slug()));
    }
    Ok(builder.add_source(environment))
}

