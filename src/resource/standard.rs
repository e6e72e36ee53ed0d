use super::validation::{Validator, Violations};
use super::Resource;
use crate::types::ResourceKind;
use serde::{Deserialize, Serialize};

/// Documentation standard, identified by `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentationStandard {
    #[serde(default)]
    pub id: String,

    #[serde(default)]
    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default)]
    pub sections: Vec<StandardSection>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandardSection {
    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub content: String,
}

impl Resource for DocumentationStandard {
    const KIND: ResourceKind = ResourceKind::Standards;

    fn identity(&self) -> &str {
        &self.id
    }

    fn validate(&self) -> Result<(), Violations> {
        let mut v = Validator::new();
        v.required("id", &self.id)
            .required("title", &self.title)
            .non_empty("sections", &self.sections)
            .each("sections", &self.sections, |v, section| {
                v.required("title", &section.title)
                    .required("content", &section.content);
            });
        v.finish()
    }
}
