use crate::error::RepositoryError;
use crate::resource::{McpServer, Skill};

pub trait SkillRepository: Send + Sync {
    /// Every stored skill, sorted by name.
    fn get_all(&self) -> Result<Vec<Skill>, RepositoryError>;

    /// Fails with `SkillAlreadyExists` if a skill with the same name is stored.
    fn add_skill(&self, skill: &Skill) -> Result<(), RepositoryError>;

    fn get_skill_by_name(&self, name: &str) -> Result<Skill, RepositoryError>;

    fn remove_all(&self) -> Result<(), RepositoryError>;
}

pub trait McpServerRepository: Send + Sync {
    /// Every stored server, sorted by name.
    fn get_all(&self) -> Result<Vec<McpServer>, RepositoryError>;

    /// Stores the server; names are not checked for uniqueness.
    fn add_mcp_server(&self, server: &McpServer) -> Result<(), RepositoryError>;

    fn get_mcp_server_by_name(&self, name: &str) -> Result<McpServer, RepositoryError>;

    fn remove_all(&self) -> Result<(), RepositoryError>;
}
