//! Local repository
//!
//! Persists skills and MCP server definitions as one JSON file per resource under the project's
//! repository directory. File names are random (`<uuid>.json`); a resource is found by scanning
//! and decoding, never by its file name. Each repository is guarded by one reader/writer lock.

pub mod contract;
pub mod file;
pub mod layout;
pub mod local;

pub use contract::{McpServerRepository, SkillRepository};
pub use file::{FileRepository, RECORD_EXTENSION};
pub use layout::{RepositoryLayout, MCP_SERVERS_DIR, SKILLS_DIR};
pub use local::{LocalMcpServerRepository, LocalSkillRepository};
