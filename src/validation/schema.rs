//! Declarative validation schema with an explicit cross-field dependency map

use std::collections::HashMap;

use thiserror::Error;

use super::field::{FieldId, FieldValues};
use super::rules::{self, Check, Rule};

/// Malformed schema configuration. This is a programming error: it is
/// surfaced once, at construction, and aborts startup.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("duplicate schema entry for field `{0}`")]
    DuplicateField(FieldId),
    #[error("no schema entry for field `{0}`")]
    MissingField(FieldId),
    #[error("rule on `{field}` reads `{reads}`, which has no schema entry")]
    UnknownDependency { field: FieldId, reads: FieldId },
    #[error("invalid rule pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Per-field rule lists plus the dependency map derived from the rules'
/// declared reads. `dependents[f]` lists the fields whose rules read `f`
/// and must be re-evaluated when `f` changes.
#[derive(Debug, Clone)]
pub struct Schema {
    fields: HashMap<FieldId, Vec<Rule>>,
    dependents: HashMap<FieldId, Vec<FieldId>>,
}

impl Schema {
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::default()
    }

    /// The registration form schema: email format, password strength, and
    /// the password/repeat-password cross-field rule.
    pub fn registration() -> Result<Self, SchemaError> {
        Self::builder()
            .field(
                FieldId::Email,
                vec![
                    Rule::required(rules::EMAIL_REQUIRED),
                    Rule::matches(rules::EMAIL_PATTERN, rules::EMAIL_FORMAT)?,
                ],
            )
            .field(
                FieldId::Password,
                vec![
                    Rule::required(rules::PASSWORD_REQUIRED),
                    Rule::new(Check::MixedCase, rules::PASSWORD_CASE),
                    Rule::new(Check::DigitAndSymbol, rules::PASSWORD_DIGIT_SYMBOL),
                    Rule::new(
                        Check::MinLength(rules::MIN_PASSWORD_LEN),
                        rules::PASSWORD_LENGTH,
                    ),
                ],
            )
            .field(
                FieldId::RepeatPassword,
                vec![
                    Rule::required(rules::REPEAT_REQUIRED),
                    Rule::new(Check::EqualsField(FieldId::Password), rules::REPEAT_MISMATCH),
                ],
            )
            .build()
    }

    /// First failing rule's message for one field, or `None` if all pass
    pub fn evaluate(&self, field: FieldId, values: &FieldValues) -> Option<&'static str> {
        let value = values.get(field);
        self.fields
            .get(&field)
            .into_iter()
            .flatten()
            .find(|rule| !rule.check.passes(value, values))
            .map(|rule| rule.message)
    }

    /// Evaluate every field; absent entries mean the field is valid
    pub fn evaluate_all(&self, values: &FieldValues) -> HashMap<FieldId, &'static str> {
        FieldId::ALL
            .into_iter()
            .filter_map(|field| self.evaluate(field, values).map(|message| (field, message)))
            .collect()
    }

    /// Fields that must be re-evaluated when `field` changes, besides
    /// `field` itself
    pub fn dependents(&self, field: FieldId) -> &[FieldId] {
        self.dependents
            .get(&field)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

#[derive(Default)]
pub struct SchemaBuilder {
    entries: Vec<(FieldId, Vec<Rule>)>,
}

impl SchemaBuilder {
    pub fn field(mut self, field: FieldId, rules: Vec<Rule>) -> Self {
        self.entries.push((field, rules));
        self
    }

    pub fn build(self) -> Result<Schema, SchemaError> {
        let mut fields: HashMap<FieldId, Vec<Rule>> = HashMap::new();
        for (field, rules) in self.entries {
            if fields.insert(field, rules).is_some() {
                return Err(SchemaError::DuplicateField(field));
            }
        }
        // Validate declared reads before completeness, so a rule pointing
        // at an absent field is reported as the dependency problem it is
        let mut dependents: HashMap<FieldId, Vec<FieldId>> = HashMap::new();
        for (&field, rules) in &fields {
            for rule in rules {
                if let Some(read) = rule.check.reads() {
                    if !fields.contains_key(&read) {
                        return Err(SchemaError::UnknownDependency { field, reads: read });
                    }
                    let deps = dependents.entry(read).or_default();
                    if !deps.contains(&field) {
                        deps.push(field);
                    }
                }
            }
        }

        for field in FieldId::ALL {
            if !fields.contains_key(&field) {
                return Err(SchemaError::MissingField(field));
            }
        }

        Ok(Schema { fields, dependents })
    }
}
