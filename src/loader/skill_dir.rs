//! One directory per skill.
//!
//! ```text
//! <source>/
//! └── lint/
//!     ├── metadata.yaml     # name, description
//!     ├── instructions.md   # free text, may be empty
//!     └── scripts/          # optional
//!         └── check.sh
//! ```

use super::mime::content_type_for;
use super::Discovery;
use crate::error::LoadError;
use crate::fs::{DirEntry, FileSystem};
use crate::resource::{Resource, Script, Skill, SkillMetadata};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

pub const METADATA_FILE: &str = "metadata.yaml";
pub const INSTRUCTIONS_FILE: &str = "instructions.md";
pub const SCRIPTS_DIR: &str = "scripts";

/// Strategy treating every top-level directory of a source as one skill.
#[derive(Debug, Default, Clone, Copy)]
pub struct SkillDirectories;

fn read_failed(path: PathBuf) -> impl FnOnce(std::io::Error) -> LoadError {
    move |source| LoadError::ReadFailed {
        kind: Skill::KIND,
        path,
        source,
    }
}

impl SkillDirectories {
    fn read_metadata(&self, fs: &dyn FileSystem, dir: &Path) -> Result<SkillMetadata, LoadError> {
        let path = dir.join(METADATA_FILE);
        let raw = fs.read(&path).map_err(read_failed(path.clone()))?;
        let metadata: SkillMetadata =
            serde_yaml::from_slice(&raw).map_err(|source| LoadError::ParseFailed {
                kind: Skill::KIND,
                path: path.clone(),
                source,
            })?;
        metadata
            .validate()
            .map_err(|violations| LoadError::ValidationFailed {
                kind: Skill::KIND,
                path,
                violations,
            })?;
        Ok(metadata)
    }

    fn read_scripts(
        &self,
        fs: &dyn FileSystem,
        dir: &Path,
    ) -> Result<BTreeMap<String, Script>, LoadError> {
        let scripts_dir = dir.join(SCRIPTS_DIR);
        let mut scripts = BTreeMap::new();

        if !fs
            .is_dir(&scripts_dir)
            .map_err(read_failed(scripts_dir.clone()))?
        {
            return Ok(scripts);
        }

        let entries = fs
            .read_dir(&scripts_dir)
            .map_err(read_failed(scripts_dir.clone()))?;
        for entry in entries.into_iter().filter(|entry| !entry.is_dir) {
            let path = scripts_dir.join(&entry.name);
            let content = fs.read(&path).map_err(read_failed(path))?;
            scripts.insert(
                entry.name.clone(),
                Script {
                    content_type: content_type_for(&entry.name).to_string(),
                    content,
                },
            );
        }
        Ok(scripts)
    }
}

impl Discovery for SkillDirectories {
    type Resource = Skill;

    fn accepts(&self, entry: &DirEntry) -> bool {
        entry.is_dir
    }

    fn read(&self, fs: &dyn FileSystem, dir: &Path) -> Result<Skill, LoadError> {
        let metadata = self.read_metadata(fs, dir)?;

        let instructions_path = dir.join(INSTRUCTIONS_FILE);
        let instructions = fs
            .read(&instructions_path)
            .map_err(read_failed(instructions_path))?;

        // Any content is accepted; invalid UTF-8 is replaced rather than rejected.
        let instructions = String::from_utf8_lossy(&instructions).into_owned();
        let mut skill = Skill::new(metadata, instructions);
        skill.scripts = self.read_scripts(fs, dir)?;
        Ok(skill)
    }
}
