use std::fmt;

use crate::field::FieldName;

/// Which kind of rule produced a [`FieldError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleKind {
    /// Value must be non-empty.
    Required,
    /// Value must be a valid email address.
    Email,
    /// Value must have at least this many characters.
    MinLength(usize),
    /// Value must have at most this many characters.
    MaxLength(usize),
    /// Value must match a regex.
    Pattern,
    /// Value must equal the value of another field.
    Equals(FieldName),
    /// Custom rule, identified by a short code.
    Custom(&'static str),
}

impl RuleKind {
    /// Stable short code for the rule.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::Email => "invalid_email",
            Self::MinLength(_) => "too_small",
            Self::MaxLength(_) => "too_big",
            Self::Pattern => "invalid_pattern",
            Self::Equals(_) => "not_equal",
            Self::Custom(code) => code,
        }
    }
}

/// A single field validation violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Field the error is attached to.
    pub field: FieldName,
    /// Error message.
    pub message: String,
    /// Rule that was violated.
    pub rule: RuleKind,
}

impl FieldError {
    pub fn new(field: FieldName, message: impl Into<String>, rule: RuleKind) -> Self {
        Self {
            field,
            message: message.into(),
            rule,
        }
    }

    /// Path of the value the error is attached to.
    pub fn path(&self) -> [&'static str; 1] {
        [self.field.as_str()]
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} ({})", self.field, self.message, self.rule.code())
    }
}

/// Result of validating a form state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ValidationResult {
    /// All fields passed validation.
    #[default]
    Valid,
    /// One or more fields failed validation.
    Invalid(Vec<FieldError>),
}

impl ValidationResult {
    /// Check if all fields passed validation.
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Check if any field failed validation.
    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    /// Get all validation errors.
    pub fn errors(&self) -> &[FieldError] {
        match self {
            Self::Valid => &[],
            Self::Invalid(errors) => errors,
        }
    }

    /// Get the error attached to a field (if any).
    pub fn error(&self, field: FieldName) -> Option<&FieldError> {
        self.errors().iter().find(|e| e.field == field)
    }

    /// Get the first validation error (if any).
    pub fn first_error(&self) -> Option<&FieldError> {
        self.errors().first()
    }
}
