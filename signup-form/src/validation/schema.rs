//! Schema builder for fluent validation API.

use regex::Regex;

use crate::field::FieldName;
use crate::state::FormState;

use super::result::{FieldError, RuleKind, ValidationResult};

/// Type alias for single-value rule closures.
type ValueRule = Box<dyn Fn(&str) -> bool + Send + Sync>;

/// Type alias for whole-state rule closures.
type StateRule = Box<dyn Fn(&FormState) -> bool + Send + Sync>;

/// One rule on a single field's value.
struct Rule {
    kind: RuleKind,
    message: String,
    check: ValueRule,
}

/// Internal representation of a field being validated.
struct FieldEntry {
    field: FieldName,
    rules: Vec<Rule>,
}

/// A rule over the whole state whose error is attached to one field.
struct Refinement {
    target: FieldName,
    kind: RuleKind,
    message: String,
    check: StateRule,
}

/// Declarative set of validation rules for a [`FormState`].
///
/// Field rules run in declaration order and only the first violated rule of
/// a field is reported. Refinements run after every field rule, and are
/// skipped for a target field that already has an error.
///
/// # Example
///
/// ```
/// use signup_form::{FieldName, FormState};
/// use signup_form::validation::Schema;
///
/// let schema = Schema::new()
///     .field(FieldName::Name)
///         .required("Name is required")
///     .field(FieldName::Email)
///         .required("Email is required")
///         .email("Invalid email")
///     .finish();
///
/// let state = FormState::new().with(FieldName::Name, "Ann");
/// let result = schema.validate(&state);
/// assert_eq!(result.errors().len(), 1);
/// ```
#[derive(Default)]
pub struct Schema {
    fields: Vec<FieldEntry>,
    refinements: Vec<Refinement>,
}

impl Schema {
    /// Create an empty schema.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start declaring rules for a field.
    pub fn field(self, field: FieldName) -> FieldBuilder {
        FieldBuilder {
            schema: self,
            entry: FieldEntry {
                field,
                rules: Vec::new(),
            },
        }
    }

    /// Add a rule over the whole state, reported on `target` when it fails.
    pub fn refine<F>(mut self, target: FieldName, f: F, msg: impl Into<String>) -> Self
    where
        F: Fn(&FormState) -> bool + Send + Sync + 'static,
    {
        self.refinements.push(Refinement {
            target,
            kind: RuleKind::Custom("custom"),
            message: msg.into(),
            check: Box::new(f),
        });
        self
    }

    /// Validate a state against every rule.
    pub fn validate(&self, state: &FormState) -> ValidationResult {
        let mut errors: Vec<FieldError> = Vec::new();

        for entry in &self.fields {
            let value = state.get(entry.field);
            if let Some(rule) = entry.rules.iter().find(|rule| !(rule.check)(value)) {
                errors.push(FieldError::new(entry.field, rule.message.clone(), rule.kind));
            }
        }

        for refinement in &self.refinements {
            if errors.iter().any(|e| e.field == refinement.target) {
                continue;
            }
            if !(refinement.check)(state) {
                errors.push(FieldError::new(
                    refinement.target,
                    refinement.message.clone(),
                    refinement.kind,
                ));
            }
        }

        if errors.is_empty() {
            ValidationResult::Valid
        } else {
            ValidationResult::Invalid(errors)
        }
    }

    /// Fields with at least one declared rule, in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = FieldName> + '_ {
        self.fields.iter().map(|entry| entry.field)
    }

    fn push_field(&mut self, entry: FieldEntry) {
        match self.fields.iter_mut().find(|e| e.field == entry.field) {
            Some(existing) => existing.rules.extend(entry.rules),
            None => self.fields.push(entry),
        }
    }
}

/// Builder for adding validation rules to a single field.
pub struct FieldBuilder {
    schema: Schema,
    entry: FieldEntry,
}

impl FieldBuilder {
    /// Add a custom rule on the field's value.
    pub fn rule<F>(self, f: F, msg: impl Into<String>) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        self.push(RuleKind::Custom("custom"), f, msg)
    }

    /// Require the field to be non-empty.
    pub fn required(self, msg: impl Into<String>) -> Self {
        self.push(RuleKind::Required, |v| !v.is_empty(), msg)
    }

    /// Require minimum length (in characters).
    pub fn min_length(self, min: usize, msg: impl Into<String>) -> Self {
        self.push(RuleKind::MinLength(min), move |v| v.chars().count() >= min, msg)
    }

    /// Require maximum length (in characters).
    pub fn max_length(self, max: usize, msg: impl Into<String>) -> Self {
        self.push(RuleKind::MaxLength(max), move |v| v.chars().count() <= max, msg)
    }

    /// Require the value to match a regex.
    pub fn pattern(self, re: Regex, msg: impl Into<String>) -> Self {
        self.push(RuleKind::Pattern, move |v| re.is_match(v), msg)
    }

    /// Require a valid email address. An empty value is not one.
    pub fn email(self, msg: impl Into<String>) -> Self {
        self.push(
            RuleKind::Email,
            |v| !v.is_empty() && email_address::EmailAddress::is_valid(v),
            msg,
        )
    }

    /// Require the value to equal another field's value.
    ///
    /// Checked after all field rules. Passes while either value is empty.
    pub fn matches(mut self, other: FieldName, msg: impl Into<String>) -> Self {
        let field = self.entry.field;
        self.schema.refinements.push(Refinement {
            target: field,
            kind: RuleKind::Equals(other),
            message: msg.into(),
            check: Box::new(move |state| {
                let value = state.get(field);
                let expected = state.get(other);
                value.is_empty() || expected.is_empty() || value == expected
            }),
        });
        self
    }

    /// Continue to the next field.
    pub fn field(self, field: FieldName) -> FieldBuilder {
        self.finish().field(field)
    }

    /// Add a rule over the whole state.
    pub fn refine<F>(self, target: FieldName, f: F, msg: impl Into<String>) -> Schema
    where
        F: Fn(&FormState) -> bool + Send + Sync + 'static,
    {
        self.finish().refine(target, f, msg)
    }

    /// Finalize and validate a state.
    pub fn validate(self, state: &FormState) -> ValidationResult {
        self.finish().validate(state)
    }

    /// Finalize this field and return the schema.
    pub fn finish(self) -> Schema {
        let mut schema = self.schema;
        schema.push_field(self.entry);
        schema
    }

    fn push<F>(mut self, kind: RuleKind, f: F, msg: impl Into<String>) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        self.entry.rules.push(Rule {
            kind,
            message: msg.into(),
            check: Box::new(f),
        });
        self
    }
}
