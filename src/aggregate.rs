//! Config-driven aggregation
//!
//! Runs one kind's loader over every configured source URI, in order, and concatenates the
//! results. The first failing source aborts the call: no items are returned and sources after
//! it are never resolved. Zero configured sources is an empty success.

use crate::config::SourcesConfig;
use crate::error::ApiError;
use crate::loader::{
    InstructionLoader, McpServerLoader, ResourceLoader, RulebookLoader, SkillLoader,
    StandardLoader, WorkflowLoader,
};
use crate::resource::{
    DocumentationStandard, InstructionSet, McpServer, Resource, Rulebook, Skill, Workflow,
};
use crate::source::Resolver;
use crate::types::ResourceKind;

/// Aggregates resources across the ordered source list of a kind.
#[derive(Clone)]
pub struct SourceAggregator {
    resolver: Resolver,
}

impl SourceAggregator {
    pub fn new(resolver: Resolver) -> Self {
        Self { resolver }
    }

    pub fn resolver(&self) -> &Resolver {
        &self.resolver
    }

    pub fn aggregate<L: ResourceLoader>(
        &self,
        loader: &L,
        uris: &[String],
    ) -> Result<Vec<L::Resource>, ApiError> {
        let kind = <L::Resource as Resource>::KIND;
        let failed = |uri: &str, source: ApiError| ApiError::SourceFailed {
            kind,
            uri: uri.to_string(),
            source: Box::new(source),
        };

        let mut resources = Vec::new();
        for uri in uris {
            tracing::debug!(%kind, uri = uri.as_str(), "Loading source");
            let fs = self
                .resolver
                .resolve(uri)
                .map_err(|e| failed(uri, e.into()))?;
            let loaded = loader
                .load(fs.as_ref())
                .map_err(|e| failed(uri, e.into()))?;
            resources.extend(loaded);
        }
        Ok(resources)
    }

    pub fn instructions(&self, sources: &SourcesConfig) -> Result<Vec<InstructionSet>, ApiError> {
        self.aggregate(&InstructionLoader::new(), &sources.instructions)
    }

    pub fn skills(&self, sources: &SourcesConfig) -> Result<Vec<Skill>, ApiError> {
        self.aggregate(&SkillLoader::new(), &sources.skills)
    }

    pub fn mcp_servers(&self, sources: &SourcesConfig) -> Result<Vec<McpServer>, ApiError> {
        self.aggregate(&McpServerLoader::new(), &sources.mcp_servers)
    }

    pub fn workflows(&self, sources: &SourcesConfig) -> Result<Vec<Workflow>, ApiError> {
        self.aggregate(&WorkflowLoader::new(), &sources.workflows)
    }

    pub fn standards(
        &self,
        sources: &SourcesConfig,
    ) -> Result<Vec<DocumentationStandard>, ApiError> {
        self.aggregate(&StandardLoader::new(), &sources.standards)
    }

    pub fn rulebooks(&self, sources: &SourcesConfig) -> Result<Vec<Rulebook>, ApiError> {
        self.aggregate(&RulebookLoader::new(), &sources.rulebooks)
    }

    /// Load every kind independently; a failing kind does not stop the others.
    pub fn count_all(&self, sources: &SourcesConfig) -> Vec<(ResourceKind, Result<usize, ApiError>)> {
        ResourceKind::ALL
            .iter()
            .map(|&kind| {
                let count = match kind {
                    ResourceKind::Instructions => self.instructions(sources).map(|r| r.len()),
                    ResourceKind::Skills => self.skills(sources).map(|r| r.len()),
                    ResourceKind::McpServers => self.mcp_servers(sources).map(|r| r.len()),
                    ResourceKind::Workflows => self.workflows(sources).map(|r| r.len()),
                    ResourceKind::Standards => self.standards(sources).map(|r| r.len()),
                    ResourceKind::Rulebooks => self.rulebooks(sources).map(|r| r.len()),
                };
                (kind, count)
            })
            .collect()
    }
}
