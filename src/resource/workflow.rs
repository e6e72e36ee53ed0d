use super::validation::{Validator, Violations};
use super::Resource;
use crate::types::ResourceKind;
use serde::{Deserialize, Serialize};

/// Ordered sequence of prompts an agent walks through.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workflow {
    #[serde(default)]
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default)]
    pub steps: Vec<WorkflowStep>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowStep {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub prompt: String,
}

impl Resource for Workflow {
    const KIND: ResourceKind = ResourceKind::Workflows;

    fn identity(&self) -> &str {
        &self.name
    }

    fn validate(&self) -> Result<(), Violations> {
        let mut v = Validator::new();
        v.required("name", &self.name)
            .non_empty("steps", &self.steps)
            .each("steps", &self.steps, |v, step| {
                v.required("name", &step.name).required("prompt", &step.prompt);
            });
        v.finish()
    }
}
