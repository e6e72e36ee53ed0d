//! ProjectKit: AI-Agent Project Configuration
//!
//! Resolves resource definitions (instructions, skills, MCP servers, workflows, documentation
//! standards, rulebooks) from URI-addressed sources, validates them and persists skills and
//! MCP servers into a local filesystem-backed repository.

pub mod aggregate;
pub mod config;
pub mod error;
pub mod fs;
pub mod loader;
pub mod logging;
pub mod repository;
pub mod resource;
pub mod source;
pub mod tooling;
pub mod types;
