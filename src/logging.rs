//! Logging
//!
//! Structured logging through `tracing`. The library only emits events; the binary installs a
//! subscriber with [`init_logging`]. Level, format and destination come from the project config
//! and can be overridden with `PROJECTKIT_LOG*` environment variables.

use crate::error::ApiError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing_subscriber::fmt::time::ChronoUtc;
use tracing_subscriber::fmt::writer::{BoxMakeWriter, MakeWriterExt};
use tracing_subscriber::{fmt as layer_fmt, layer::SubscriberExt, util::SubscriberInitExt};
use tracing_subscriber::{EnvFilter, Layer, Registry};

pub const LOG_ENV: &str = "PROJECTKIT_LOG";
pub const LOG_FORMAT_ENV: &str = "PROJECTKIT_LOG_FORMAT";
pub const LOG_OUTPUT_ENV: &str = "PROJECTKIT_LOG_OUTPUT";
pub const LOG_FILE_ENV: &str = "PROJECTKIT_LOG_FILE";
pub const LOG_MODULES_ENV: &str = "PROJECTKIT_LOG_MODULES";

const LOG_FILE_NAME: &str = "projectkit.log";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            other => Err(ApiError::ConfigError(format!(
                "Invalid log format: {} (must be 'json' or 'text')",
                other
            ))),
        }
    }
}

/// Where log lines go.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LogOutput {
    #[serde(rename = "stdout")]
    Stdout,
    #[default]
    #[serde(rename = "stderr")]
    Stderr,
    #[serde(rename = "file")]
    File,
    #[serde(rename = "file+stderr")]
    FileAndStderr,
    #[serde(rename = "both")]
    Both,
}

impl LogOutput {
    pub fn writes_file(self) -> bool {
        matches!(self, LogOutput::File | LogOutput::FileAndStderr)
    }

    /// Color only makes sense on a terminal stream.
    fn allows_color(self) -> bool {
        !self.writes_file()
    }
}

impl FromStr for LogOutput {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "stdout" => Ok(LogOutput::Stdout),
            "stderr" => Ok(LogOutput::Stderr),
            "file" => Ok(LogOutput::File),
            "file+stderr" => Ok(LogOutput::FileAndStderr),
            "both" => Ok(LogOutput::Both),
            other => Err(ApiError::ConfigError(format!(
                "Invalid log output: {} (must be 'stdout', 'stderr', 'file', 'file+stderr', or 'both')",
                other
            ))),
        }
    }
}

impl fmt::Display for LogOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LogOutput::Stdout => "stdout",
            LogOutput::Stderr => "stderr",
            LogOutput::File => "file",
            LogOutput::FileAndStderr => "file+stderr",
            LogOutput::Both => "both",
        })
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// trace, debug, info, warn, error, off
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default)]
    pub format: LogFormat,

    #[serde(default)]
    pub output: LogOutput,

    /// Log file when output includes a file; None means the platform state directory.
    #[serde(default)]
    pub file: Option<PathBuf>,

    /// Colored output (text format, terminal streams only)
    #[serde(default = "default_true")]
    pub color: bool,

    /// Per-module levels, e.g. `projectkit::source: debug`
    #[serde(default)]
    pub modules: HashMap<String, String>,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            level: default_log_level(),
            format: LogFormat::default(),
            output: LogOutput::default(),
            file: None,
            color: true,
            modules: HashMap::new(),
        }
    }
}

/// Log file path with precedence: CLI, `PROJECTKIT_LOG_FILE`, config, default.
pub fn resolve_log_file_path(
    cli_file: Option<PathBuf>,
    config_file: Option<PathBuf>,
) -> Result<PathBuf, ApiError> {
    let env_file = std::env::var_os(LOG_FILE_ENV).map(PathBuf::from);
    [cli_file, env_file, config_file]
        .into_iter()
        .flatten()
        .find(|path| !path.as_os_str().is_empty())
        .map(Ok)
        .unwrap_or_else(default_log_file_path)
}

fn default_log_file_path() -> Result<PathBuf, ApiError> {
    let project_dirs = directories::ProjectDirs::from("", "projectkit", "projectkit")
        .ok_or_else(|| {
            ApiError::ConfigError(
                "Could not determine platform state directory for log file".to_string(),
            )
        })?;
    // No state dir on macOS/Windows; fall back to the data dir there.
    let dir = project_dirs
        .state_dir()
        .unwrap_or_else(|| project_dirs.data_local_dir());
    Ok(dir.join(LOG_FILE_NAME))
}

fn open_log_file(path: &Path) -> Result<std::fs::File, ApiError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            ApiError::ConfigError(format!("Failed to create log directory: {}", e))
        })?;
    }
    std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| {
            ApiError::ConfigError(format!("Failed to open log file {}: {}", path.display(), e))
        })
}

fn make_writer(
    output: LogOutput,
    cli_file: Option<PathBuf>,
    config_file: Option<PathBuf>,
) -> Result<BoxMakeWriter, ApiError> {
    let open = || -> Result<std::fs::File, ApiError> {
        let path = resolve_log_file_path(cli_file.clone(), config_file.clone())?;
        open_log_file(&path)
    };
    Ok(match output {
        LogOutput::Stdout => BoxMakeWriter::new(std::io::stdout),
        LogOutput::Stderr => BoxMakeWriter::new(std::io::stderr),
        LogOutput::Both => BoxMakeWriter::new(std::io::stdout.and(std::io::stderr)),
        LogOutput::File => BoxMakeWriter::new(open()?),
        LogOutput::FileAndStderr => BoxMakeWriter::new(open()?.and(std::io::stderr)),
    })
}

/// Install the global subscriber.
///
/// Priority (highest first): environment variables, configuration, defaults. The log file
/// alone is resolved CLI first, see [`resolve_log_file_path`].
pub fn init_logging(config: &LoggingConfig, cli_file: Option<PathBuf>) -> Result<(), ApiError> {
    if !config.enabled {
        return Registry::default()
            .with(EnvFilter::new("off"))
            .try_init()
            .map_err(|e| ApiError::ConfigError(format!("Failed to install logger: {}", e)));
    }

    let filter = build_env_filter(config)?;
    let format = match std::env::var(LOG_FORMAT_ENV) {
        Ok(value) => value.parse()?,
        Err(_) => config.format,
    };
    let output = match std::env::var(LOG_OUTPUT_ENV) {
        Ok(value) => value.parse()?,
        Err(_) => config.output,
    };
    let writer = make_writer(output, cli_file, config.file.clone())?;

    let layer = match format {
        LogFormat::Json => layer_fmt::layer()
            .json()
            .with_target(true)
            .with_timer(ChronoUtc::rfc_3339())
            .with_writer(writer)
            .boxed(),
        LogFormat::Text => layer_fmt::layer()
            .with_target(true)
            .with_timer(ChronoUtc::rfc_3339())
            .with_ansi(config.color && output.allows_color())
            .with_writer(writer)
            .boxed(),
    };

    Registry::default()
        .with(filter)
        .with(layer)
        .try_init()
        .map_err(|e| ApiError::ConfigError(format!("Failed to install logger: {}", e)))
}

/// `PROJECTKIT_LOG` wins outright; otherwise config level plus module directives.
fn build_env_filter(config: &LoggingConfig) -> Result<EnvFilter, ApiError> {
    if let Ok(filter) = EnvFilter::try_from_env(LOG_ENV) {
        return Ok(filter);
    }
    if config.level == "off" {
        return Ok(EnvFilter::new("off"));
    }

    let env_modules = std::env::var(LOG_MODULES_ENV).unwrap_or_default();
    let directives = config
        .modules
        .iter()
        .map(|(module, level)| format!("{}={}", module, level))
        .chain(module_directives(&env_modules));

    let mut filter = EnvFilter::new(&config.level);
    for directive in directives {
        filter = filter.add_directive(
            directive
                .parse()
                .map_err(|e| ApiError::ConfigError(format!("Invalid log directive: {}", e)))?,
        );
    }
    Ok(filter)
}

/// `a=debug, b=trace` into directives; malformed pairs are skipped.
fn module_directives(pairs: &str) -> impl Iterator<Item = String> + '_ {
    pairs.split(',').filter_map(|pair| {
        let (module, level) = pair.split_once('=')?;
        let (module, level) = (module.trim(), level.trim());
        (!module.is_empty() && !level.is_empty()).then(|| format!("{}={}", module, level))
    })
}
