use super::validation::{Validator, Violations};
use super::Resource;
use crate::types::ResourceKind;
use serde::{Deserialize, Serialize};

/// Named set of instructions injected into agent configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstructionSet {
    #[serde(default)]
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default)]
    pub instructions: Vec<Instruction>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instruction {
    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub content: String,
}

impl Resource for InstructionSet {
    const KIND: ResourceKind = ResourceKind::Instructions;

    fn identity(&self) -> &str {
        &self.name
    }

    fn validate(&self) -> Result<(), Violations> {
        let mut v = Validator::new();
        v.required("name", &self.name)
            .not_blank("description", self.description.as_deref())
            .non_empty("instructions", &self.instructions)
            .each("instructions", &self.instructions, |v, instruction| {
                v.required("title", &instruction.title)
                    .required("content", &instruction.content);
            });
        v.finish()
    }
}
