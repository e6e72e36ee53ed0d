//! Resource loading
//!
//! One algorithm serves every resource kind: list the top-level entries of a source, keep the
//! ones the discovery strategy accepts, read each into a record, validate it. Any failure
//! aborts the whole load. A source with no candidates is an error (`NoneFound`), never an
//! empty success.
//!
//! Two strategies exist: `FlatFiles<R>` (one YAML file per resource) and `SkillDirectories`
//! (one directory per skill).

pub mod flat_file;
pub mod mime;
pub mod skill_dir;

use crate::error::LoadError;
use crate::fs::{self, DirEntry, FileSystem};
use crate::resource::{
    DocumentationStandard, InstructionSet, McpServer, Resource, Rulebook, Workflow,
};
use std::path::{Path, PathBuf};

pub use flat_file::FlatFiles;
pub use mime::{content_type_for, DEFAULT_CONTENT_TYPE};
pub use skill_dir::{SkillDirectories, INSTRUCTIONS_FILE, METADATA_FILE, SCRIPTS_DIR};

/// How candidates are found and read for one resource kind.
pub trait Discovery: Send + Sync {
    type Resource: Resource;

    /// Whether a top-level entry of the source is a candidate.
    fn accepts(&self, entry: &DirEntry) -> bool;

    /// Read the candidate at `path` (relative to the source root) into a record.
    fn read(&self, fs: &dyn FileSystem, path: &Path) -> Result<Self::Resource, LoadError>;
}

/// Loads every resource of one kind from a resolved source.
pub trait ResourceLoader: Send + Sync {
    type Resource: Resource;

    fn load(&self, fs: &dyn FileSystem) -> Result<Vec<Self::Resource>, LoadError>;
}

/// The generic loader, parameterised by its discovery strategy.
#[derive(Debug, Default, Clone)]
pub struct Loader<D> {
    discovery: D,
}

impl<D: Discovery + Default> Loader<D> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<D: Discovery> Loader<D> {
    pub fn with_discovery(discovery: D) -> Self {
        Self { discovery }
    }
}

impl<D: Discovery> ResourceLoader for Loader<D> {
    type Resource = D::Resource;

    fn load(&self, fs: &dyn FileSystem) -> Result<Vec<Self::Resource>, LoadError> {
        let kind = <D::Resource as Resource>::KIND;
        let entries = fs
            .read_dir(fs::root())
            .map_err(|source| LoadError::ReadFailed {
                kind,
                path: fs::root().to_path_buf(),
                source,
            })?;

        let mut resources = Vec::new();
        for entry in entries.iter().filter(|entry| self.discovery.accepts(entry)) {
            let path = PathBuf::from(&entry.name);
            let resource = self.discovery.read(fs, &path)?;
            resource
                .validate()
                .map_err(|violations| LoadError::ValidationFailed {
                    kind,
                    path: path.clone(),
                    violations,
                })?;
            resources.push(resource);
        }

        if resources.is_empty() {
            return Err(LoadError::NoneFound(kind));
        }
        tracing::debug!(%kind, count = resources.len(), "Loaded resources");
        Ok(resources)
    }
}

pub type InstructionLoader = Loader<FlatFiles<InstructionSet>>;
pub type McpServerLoader = Loader<FlatFiles<McpServer>>;
pub type WorkflowLoader = Loader<FlatFiles<Workflow>>;
pub type StandardLoader = Loader<FlatFiles<DocumentationStandard>>;
pub type RulebookLoader = Loader<FlatFiles<Rulebook>>;
pub type SkillLoader = Loader<SkillDirectories>;
