//! CLI Tooling
//!
//! Command-line interface over the configured sources and the project's local repository.

use crate::aggregate::SourceAggregator;
use crate::config::{ConfigLoader, ProjectConfig};
use crate::error::{ApiError, RepositoryError};
use crate::logging::LoggingConfig;
use crate::repository::{McpServerRepository, RepositoryLayout, SkillRepository};
use crate::resource::Skill;
use crate::source::{DriverRegistry, LocalDriver, Resolver};
use crate::tooling::format::{
    format_check_text, format_mcp_server_text, format_mcp_servers_text, format_skill_text,
    format_skills_text, format_sources_text, to_json, CheckEntry,
};
use clap::{Parser, Subcommand, ValueEnum};
use serde_json::json;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// ProjectKit CLI - aggregate agent tooling configuration from pluggable sources
#[derive(Parser, Debug)]
#[command(name = "projectkit")]
#[command(about = "Resolve, validate and store AI-agent project configuration")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Project root directory
    #[arg(long, default_value = ".")]
    pub project: PathBuf,

    /// Configuration file path (overrides <project>/projectkit.yaml)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file, file+stderr, both)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output includes "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Apply `--log-*` flags on top of the configured logging section. `--log-file` is passed to
    /// `init_logging` on its own so it outranks `PROJECTKIT_LOG_FILE`.
    pub fn apply_log_overrides(&self, logging: &mut LoggingConfig) -> Result<(), ApiError> {
        if let Some(level) = &self.log_level {
            logging.level = level.clone();
        }
        if let Some(format) = &self.log_format {
            logging.format = format.parse()?;
        }
        if let Some(output) = &self.log_output {
            logging.output = output.parse()?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Repository selection for `sync` and `clean`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RepositoryKind {
    Skills,
    McpServers,
    All,
}

impl RepositoryKind {
    fn skills(self) -> bool {
        matches!(self, RepositoryKind::Skills | RepositoryKind::All)
    }

    fn mcp_servers(self) -> bool {
        matches!(self, RepositoryKind::McpServers | RepositoryKind::All)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StoredKind {
    Skills,
    McpServers,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show configured source URIs and registered schemes
    Sources {
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Load every resource kind from its sources and report the outcome
    Check {
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Replace repository contents with resources loaded from sources
    Sync {
        #[arg(long, value_enum, default_value_t = RepositoryKind::All)]
        kind: RepositoryKind,
    },
    /// List stored resources
    List {
        #[arg(value_enum)]
        kind: StoredKind,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Show one stored resource
    Show {
        #[command(subcommand)]
        target: ShowTarget,
    },
    /// Remove stored resources
    Clean {
        #[arg(long, value_enum, default_value_t = RepositoryKind::All)]
        kind: RepositoryKind,
    },
}

#[derive(Subcommand, Debug)]
pub enum ShowTarget {
    Skill {
        name: String,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    McpServer {
        name: String,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

/// Result of a command: text for stdout and whether the command succeeded.
///
/// `check` reports per-kind failures in its output and still fails overall.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub text: String,
    pub success: bool,
}

impl From<String> for CommandOutput {
    fn from(text: String) -> Self {
        Self {
            text,
            success: true,
        }
    }
}

/// Registry with the built-in drivers.
pub fn default_registry() -> Result<Arc<DriverRegistry>, ApiError> {
    let registry = Arc::new(DriverRegistry::new());
    registry.register_driver(Arc::new(LocalDriver::new()))?;
    Ok(registry)
}

/// CLI context for one project
pub struct CliContext {
    project_root: PathBuf,
    config: ProjectConfig,
    aggregator: SourceAggregator,
    layout: RepositoryLayout,
}

impl CliContext {
    /// Load the project config and wire the built-in drivers.
    pub fn new(project_root: PathBuf, config_path: Option<PathBuf>) -> Result<Self, ApiError> {
        let config = match &config_path {
            Some(path) => ConfigLoader::load_from_file(path)?,
            None => ConfigLoader::load(&project_root)?,
        };
        Ok(Self::with_config(project_root, config, default_registry()?))
    }

    pub fn with_config(
        project_root: PathBuf,
        config: ProjectConfig,
        registry: Arc<DriverRegistry>,
    ) -> Self {
        let layout = config.repository.layout(&project_root);
        Self {
            project_root,
            config,
            aggregator: SourceAggregator::new(Resolver::new(registry)),
            layout,
        }
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    pub fn config(&self) -> &ProjectConfig {
        &self.config
    }

    pub fn layout(&self) -> &RepositoryLayout {
        &self.layout
    }

    /// Execute a CLI command
    pub fn execute(&self, command: &Commands) -> Result<CommandOutput, ApiError> {
        tracing::debug!(?command, project = %self.project_root.display(), "Executing command");
        match command {
            Commands::Sources { format } => self.handle_sources(*format).map(Into::into),
            Commands::Check { format } => self.handle_check(*format),
            Commands::Sync { kind } => self.handle_sync(*kind).map(Into::into),
            Commands::List { kind, format } => self.handle_list(*kind, *format).map(Into::into),
            Commands::Show { target } => self.handle_show(target).map(Into::into),
            Commands::Clean { kind } => self.handle_clean(*kind).map(Into::into),
        }
    }

    fn handle_sources(&self, format: OutputFormat) -> Result<String, ApiError> {
        let schemes = self.aggregator.resolver().registry().schemes();
        match format {
            OutputFormat::Json => to_json(&json!({
                "sources": self.config.sources,
                "schemes": schemes,
            })),
            OutputFormat::Text => Ok(format_sources_text(&self.config.sources, &schemes)),
        }
    }

    fn handle_check(&self, format: OutputFormat) -> Result<CommandOutput, ApiError> {
        let entries: Vec<_> = self
            .aggregator
            .count_all(&self.config.sources)
            .into_iter()
            .map(|(kind, result)| {
                let (loaded, error) = match result {
                    Ok(count) => (Some(count), None),
                    Err(e) => {
                        tracing::warn!(%kind, error = %e, "Source check failed");
                        (None, Some(e.to_string()))
                    }
                };
                let entry = CheckEntry {
                    kind: kind.slug(),
                    sources: self.config.sources.uris(kind).len(),
                    loaded,
                    error,
                };
                (kind, entry)
            })
            .collect();

        let success = entries.iter().all(|(_, entry)| entry.error.is_none());
        let text = match format {
            OutputFormat::Json => {
                let rows: Vec<&CheckEntry> = entries.iter().map(|(_, entry)| entry).collect();
                to_json(&rows)?
            }
            OutputFormat::Text => format_check_text(&entries),
        };
        Ok(CommandOutput { text, success })
    }

    fn handle_sync(&self, kind: RepositoryKind) -> Result<String, ApiError> {
        let mut lines = Vec::new();

        if kind.skills() {
            // Everything is loaded and checked before the repository is touched.
            let skills = self.aggregator.skills(&self.config.sources)?;
            ensure_unique_skills(&skills)?;
            let repo = self.layout.open_skills()?;
            repo.remove_all()?;
            for skill in &skills {
                repo.add_skill(skill)?;
            }
            lines.push(format!(
                "Synced {} skill(s) into {}",
                skills.len(),
                self.layout.skills_dir().display()
            ));
        }

        if kind.mcp_servers() {
            let servers = self.aggregator.mcp_servers(&self.config.sources)?;
            let repo = self.layout.open_mcp_servers()?;
            repo.remove_all()?;
            for server in &servers {
                repo.add_mcp_server(server)?;
            }
            lines.push(format!(
                "Synced {} MCP server(s) into {}",
                servers.len(),
                self.layout.mcp_servers_dir().display()
            ));
        }

        Ok(lines.join("\n"))
    }

    fn handle_list(&self, kind: StoredKind, format: OutputFormat) -> Result<String, ApiError> {
        match kind {
            StoredKind::Skills => {
                let skills = self.layout.open_skills()?.get_all()?;
                match format {
                    OutputFormat::Json => to_json(&skills),
                    OutputFormat::Text => Ok(format_skills_text(&skills)),
                }
            }
            StoredKind::McpServers => {
                let servers = self.layout.open_mcp_servers()?.get_all()?;
                match format {
                    OutputFormat::Json => to_json(&servers),
                    OutputFormat::Text => Ok(format_mcp_servers_text(&servers)),
                }
            }
        }
    }

    fn handle_show(&self, target: &ShowTarget) -> Result<String, ApiError> {
        match target {
            ShowTarget::Skill { name, format } => {
                let skill = self.layout.open_skills()?.get_skill_by_name(name)?;
                match format {
                    OutputFormat::Json => to_json(&skill),
                    OutputFormat::Text => Ok(format_skill_text(&skill)),
                }
            }
            ShowTarget::McpServer { name, format } => {
                let server = self.layout.open_mcp_servers()?.get_mcp_server_by_name(name)?;
                match format {
                    OutputFormat::Json => to_json(&server),
                    OutputFormat::Text => Ok(format_mcp_server_text(&server)),
                }
            }
        }
    }

    fn handle_clean(&self, kind: RepositoryKind) -> Result<String, ApiError> {
        let mut lines = Vec::new();
        if kind.skills() {
            self.layout.open_skills()?.remove_all()?;
            lines.push(format!(
                "Cleared skills in {}",
                self.layout.skills_dir().display()
            ));
        }
        if kind.mcp_servers() {
            self.layout.open_mcp_servers()?.remove_all()?;
            lines.push(format!(
                "Cleared MCP servers in {}",
                self.layout.mcp_servers_dir().display()
            ));
        }
        Ok(lines.join("\n"))
    }
}

/// First repeated skill name, in source order, is reported.
fn ensure_unique_skills(skills: &[Skill]) -> Result<(), RepositoryError> {
    let mut seen = HashSet::new();
    for skill in skills {
        if !seen.insert(skill.name.as_str()) {
            return Err(RepositoryError::SkillAlreadyExists(skill.name.clone()));
        }
    }
    Ok(())
}
