//! Skill: metadata, free-text instructions and optional scripts.

use super::validation::{Validator, Violations};
use super::Resource;
use crate::types::ResourceKind;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const MAX_DESCRIPTION_CHARS: usize = 1024;

/// Contents of a skill's `metadata.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillMetadata {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub description: String,
}

impl SkillMetadata {
    pub fn validate(&self) -> Result<(), Violations> {
        let mut v = Validator::new();
        check_metadata(&mut v, &self.name, &self.description);
        v.finish()
    }
}

fn check_metadata(v: &mut Validator, name: &str, description: &str) {
    v.required("name", name)
        .required("description", description)
        .max_chars("description", description, MAX_DESCRIPTION_CHARS);
}

/// A fully loaded skill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub description: String,

    /// Free text; may be empty.
    #[serde(default)]
    pub instructions: String,

    /// Scripts keyed by file name.
    #[serde(default)]
    pub scripts: BTreeMap<String, Script>,
}

impl Skill {
    pub fn new(metadata: SkillMetadata, instructions: String) -> Self {
        Self {
            name: metadata.name,
            description: metadata.description,
            instructions,
            scripts: BTreeMap::new(),
        }
    }
}

/// Script bundled with a skill. Content is kept verbatim and persisted as base64.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Script {
    pub content_type: String,

    #[serde(with = "base64_bytes")]
    pub content: Vec<u8>,
}

impl Resource for Skill {
    const KIND: ResourceKind = ResourceKind::Skills;

    fn identity(&self) -> &str {
        &self.name
    }

    fn validate(&self) -> Result<(), Violations> {
        let mut v = Validator::new();
        check_metadata(&mut v, &self.name, &self.description);
        v.finish()
    }
}

mod base64_bytes {
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&STANDARD.encode(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let encoded = String::deserialize(deserializer)?;
        STANDARD.decode(encoded).map_err(serde::de::Error::custom)
    }
}
