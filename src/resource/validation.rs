//! Structural validation rules shared by every resource record.

use std::fmt;

/// A single constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rule {
    /// Field must be present and not blank.
    Required,
    /// Collection must contain at least one item.
    NonEmpty,
    /// Field may hold at most this many characters.
    MaxLength(usize),
    /// Exactly one of the named fields must be set.
    ExactlyOneOf(&'static [&'static str]),
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::Required => f.write_str("is required"),
            Rule::NonEmpty => f.write_str("must not be empty"),
            Rule::MaxLength(max) => write!(f, "must be at most {} characters", max),
            Rule::ExactlyOneOf(fields) => write!(f, "exactly one of {} must be set", fields.join(", ")),
        }
    }
}

/// A violated constraint on a (possibly nested) field, e.g. `steps[1].prompt`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub field: String,
    pub rule: Rule,
}

/// Non-empty list of violations returned by a failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violations(Vec<Violation>);

impl Violations {
    pub fn iter(&self) -> impl Iterator<Item = &Violation> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether `field` violated `rule`.
    pub fn contains(&self, field: &str, rule: &Rule) -> bool {
        self.0.iter().any(|v| v.field == field && &v.rule == rule)
    }
}

impl fmt::Display for Violations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, violation) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{} {}", violation.field, violation.rule)?;
        }
        Ok(())
    }
}

/// Collects violations for one record.
#[derive(Debug, Default)]
pub struct Validator {
    prefix: String,
    violations: Vec<Violation>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, field: &str, rule: Rule) {
        self.violations.push(Violation {
            field: format!("{}{}", self.prefix, field),
            rule,
        });
    }

    pub fn required(&mut self, field: &str, value: &str) -> &mut Self {
        if value.trim().is_empty() {
            self.push(field, Rule::Required);
        }
        self
    }

    /// Optional fields may be absent, but not blank when present.
    pub fn not_blank(&mut self, field: &str, value: Option<&str>) -> &mut Self {
        if let Some(value) = value {
            self.required(field, value);
        }
        self
    }

    pub fn max_chars(&mut self, field: &str, value: &str, max: usize) -> &mut Self {
        if value.chars().count() > max {
            self.push(field, Rule::MaxLength(max));
        }
        self
    }

    pub fn non_empty<T>(&mut self, field: &str, items: &[T]) -> &mut Self {
        if items.is_empty() {
            self.push(field, Rule::NonEmpty);
        }
        self
    }

    pub fn exactly_one(
        &mut self,
        fields: &'static [&'static str],
        present: &[bool],
    ) -> &mut Self {
        if present.iter().filter(|set| **set).count() != 1 {
            self.push(&fields.join("|"), Rule::ExactlyOneOf(fields));
        }
        self
    }

    /// Validate each nested item with field names prefixed by `field[index].`.
    pub fn each<T>(
        &mut self,
        field: &str,
        items: &[T],
        mut check: impl FnMut(&mut Validator, &T),
    ) -> &mut Self {
        for (index, item) in items.iter().enumerate() {
            let mut nested = Validator {
                prefix: format!("{}{}[{}].", self.prefix, field, index),
                violations: Vec::new(),
            };
            check(&mut nested, item);
            self.violations.extend(nested.violations);
        }
        self
    }

    pub fn finish(self) -> Result<(), Violations> {
        if self.violations.is_empty() {
            Ok(())
        } else {
            Err(Violations(self.violations))
        }
    }
}
