//! Integration tests for ProjectKit

mod support;

mod cli_commands;
mod local_pipeline;
mod registry_resolution;
mod repository_on_disk;
