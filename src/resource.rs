//! Resource records
//!
//! Typed, validated records produced by the loaders. Records are plain values: once loaded
//! they are never mutated. Each kind has one identity field used for repository keys and
//! listing order.

pub mod agent;
pub mod instruction;
pub mod mcp_server;
pub mod rulebook;
pub mod skill;
pub mod standard;
pub mod validation;
pub mod workflow;

use crate::types::ResourceKind;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::Debug;

pub use agent::AgentConfig;
pub use instruction::{Instruction, InstructionSet};
pub use mcp_server::McpServer;
pub use rulebook::{Rulebook, RulebookRule, Severity};
pub use skill::{Script, Skill, SkillMetadata};
pub use standard::{DocumentationStandard, StandardSection};
pub use validation::{Validator, Violation, Violations};
pub use workflow::{Workflow, WorkflowStep};

/// A loadable, validated resource kind.
pub trait Resource: Debug + Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    const KIND: ResourceKind;

    /// Identity field (name or id).
    fn identity(&self) -> &str;

    /// Structural validation; no cross-resource checks.
    fn validate(&self) -> Result<(), Violations>;
}
