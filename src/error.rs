//! Error types
//!
//! Every failure surfaced by the crate is a typed variant so callers match on identity rather
//! than on message text. Wrapping variants only add context (URI, path, kind) and keep the
//! original error reachable through `std::error::Error::source`.

use crate::resource::validation::Violations;
use crate::types::ResourceKind;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures turning a source URI into a filesystem.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("URI scheme not found in '{0}'")]
    UriSchemeNotFound(String),

    #[error("scheme driver not registered: {0}")]
    SchemeDriverNotRegistered(String),

    #[error("scheme driver already registered: {0}")]
    SchemeDriverAlreadyRegistered(String),

    #[error("unsupported scheme '{scheme}' in URI '{uri}'")]
    UnsupportedScheme { scheme: String, uri: String },

    #[error("empty path in URI '{0}'")]
    EmptyPath(String),

    #[error("directory does not exist: {}", .0.display())]
    DirectoryNotFound(PathBuf),

    #[error("failed to check directory {}: {source}", path.display())]
    DirectoryCheckFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to resolve '{uri}': {source}")]
    Resolve {
        uri: String,
        #[source]
        source: Box<SourceError>,
    },
}

impl SourceError {
    /// The innermost error, with every `Resolve` context layer removed.
    pub fn root_cause(&self) -> &SourceError {
        match self {
            SourceError::Resolve { source, .. } => source.root_cause(),
            other => other,
        }
    }
}

/// Failures loading resources from a resolved filesystem.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {kind} at {}: {source}", path.display())]
    ReadFailed {
        kind: ResourceKind,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse {kind} file {}: {source}", path.display())]
    ParseFailed {
        kind: ResourceKind,
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("invalid {kind} in {}: {violations}", path.display())]
    ValidationFailed {
        kind: ResourceKind,
        path: PathBuf,
        violations: Violations,
    },

    #[error("no {0} found")]
    NoneFound(ResourceKind),
}

impl LoadError {
    pub fn kind(&self) -> ResourceKind {
        match self {
            LoadError::ReadFailed { kind, .. }
            | LoadError::ParseFailed { kind, .. }
            | LoadError::ValidationFailed { kind, .. } => *kind,
            LoadError::NoneFound(kind) => *kind,
        }
    }
}

/// Failures of the filesystem-backed repositories.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("skill already exists: {0}")]
    SkillAlreadyExists(String),

    #[error("skill not found: {0}")]
    SkillNotFound(String),

    #[error("{kind} resource not found: {name}")]
    ResourceNotFound { kind: ResourceKind, name: String },

    #[error("failed to list repository directory: {source}")]
    ListFailed {
        #[source]
        source: io::Error,
    },

    #[error("failed to read repository file {}: {source}", path.display())]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write repository file {}: {source}", path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to remove repository file {}: {source}", path.display())]
    RemoveFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to decode repository file {}: {source}", path.display())]
    DecodeFailed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode {kind} resource: {source}")]
    EncodeFailed {
        kind: ResourceKind,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to create repository directory {}: {source}", path.display())]
    CreateDirFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Top-level error returned by aggregation, configuration and the CLI.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error("failed to load {kind} from source '{uri}': {source}")]
    SourceFailed {
        kind: ResourceKind,
        uri: String,
        #[source]
        source: Box<ApiError>,
    },

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl ApiError {
    /// Kind of the innermost `std::io::Error` in the source chain, if any.
    pub fn io_kind(&self) -> Option<io::ErrorKind> {
        let mut current: Option<&(dyn std::error::Error + 'static)> = Some(self);
        while let Some(err) = current {
            if let Some(io_err) = err.downcast_ref::<io::Error>() {
                return Some(io_err.kind());
            }
            current = err.source();
        }
        None
    }

    /// Error with every `SourceFailed` context layer removed.
    pub fn innermost(&self) -> &ApiError {
        match self {
            ApiError::SourceFailed { source, .. } => source.innermost(),
            other => other,
        }
    }
}
