use super::validation::{Validator, Violations};
use super::Resource;
use crate::types::ResourceKind;
use serde::{Deserialize, Serialize};

/// Collection of review rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rulebook {
    #[serde(default)]
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default)]
    pub rules: Vec<RulebookRule>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RulebookRule {
    #[serde(default)]
    pub id: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub severity: Severity,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    #[default]
    Warning,
    Error,
}

impl Resource for Rulebook {
    const KIND: ResourceKind = ResourceKind::Rulebooks;

    fn identity(&self) -> &str {
        &self.name
    }

    fn validate(&self) -> Result<(), Violations> {
        let mut v = Validator::new();
        v.required("name", &self.name)
            .non_empty("rules", &self.rules)
            .each("rules", &self.rules, |v, rule| {
                v.required("id", &rule.id)
                    .required("description", &rule.description);
            });
        v.finish()
    }
}
