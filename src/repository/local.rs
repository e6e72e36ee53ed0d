//! Repositories backed by a `FileRepository` per kind.

use super::contract::{McpServerRepository, SkillRepository};
use super::file::FileRepository;
use crate::error::RepositoryError;
use crate::fs::FileSystem;
use crate::resource::{McpServer, Skill};
use std::path::Path;
use std::sync::Arc;

pub struct LocalSkillRepository {
    files: FileRepository<Skill>,
}

impl LocalSkillRepository {
    pub fn new(fs: Arc<dyn FileSystem>) -> Self {
        Self {
            files: FileRepository::new(fs),
        }
    }

    pub fn open(dir: &Path) -> Result<Self, RepositoryError> {
        Ok(Self {
            files: FileRepository::open(dir)?,
        })
    }
}

impl SkillRepository for LocalSkillRepository {
    fn get_all(&self) -> Result<Vec<Skill>, RepositoryError> {
        self.files.get_all()
    }

    fn add_skill(&self, skill: &Skill) -> Result<(), RepositoryError> {
        self.files.add_unique(skill, |name| {
            RepositoryError::SkillAlreadyExists(name.to_string())
        })
    }

    fn get_skill_by_name(&self, name: &str) -> Result<Skill, RepositoryError> {
        self.files
            .find(name)?
            .ok_or_else(|| RepositoryError::SkillNotFound(name.to_string()))
    }

    fn remove_all(&self) -> Result<(), RepositoryError> {
        self.files.remove_all()
    }
}

pub struct LocalMcpServerRepository {
    files: FileRepository<McpServer>,
}

impl LocalMcpServerRepository {
    pub fn new(fs: Arc<dyn FileSystem>) -> Self {
        Self {
            files: FileRepository::new(fs),
        }
    }

    pub fn open(dir: &Path) -> Result<Self, RepositoryError> {
        Ok(Self {
            files: FileRepository::open(dir)?,
        })
    }
}

impl McpServerRepository for LocalMcpServerRepository {
    fn get_all(&self) -> Result<Vec<McpServer>, RepositoryError> {
        self.files.get_all()
    }

    fn add_mcp_server(&self, server: &McpServer) -> Result<(), RepositoryError> {
        self.files.add(server)
    }

    fn get_mcp_server_by_name(&self, name: &str) -> Result<McpServer, RepositoryError> {
        self.files.get_by_identity(name)
    }

    fn remove_all(&self) -> Result<(), RepositoryError> {
        self.files.remove_all()
    }
}
