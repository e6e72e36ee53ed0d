//! Tooling
//!
//! The `projectkit` command line: source inspection, loading checks and repository
//! management for one project.

pub mod cli;
pub mod format;

pub use cli::{default_registry, Cli, CliContext, CommandOutput, Commands};
