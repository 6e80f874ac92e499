use crate::field::FieldName;

use super::result::{FieldError, ValidationResult};

/// Per-field validation outcome.
///
/// Holds at most one error per field. A field with no entry is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorMap {
    entries: [Option<FieldError>; 4],
}

impl ErrorMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the error for a field.
    pub fn get(&self, field: FieldName) -> Option<&FieldError> {
        self.entries[field.index()].as_ref()
    }

    /// Get the error message for a field.
    pub fn message(&self, field: FieldName) -> Option<&str> {
        self.get(field).map(|e| e.message.as_str())
    }

    /// Check if a field has an error.
    pub fn contains(&self, field: FieldName) -> bool {
        self.get(field).is_some()
    }

    /// Record an error, keeping an existing one for the same field.
    ///
    /// Returns false if the field already had an error.
    pub fn insert(&mut self, error: FieldError) -> bool {
        let slot = &mut self.entries[error.field.index()];
        if slot.is_some() {
            return false;
        }
        *slot = Some(error);
        true
    }

    /// Replace the entry for a field.
    pub fn set(&mut self, field: FieldName, error: Option<FieldError>) {
        self.entries[field.index()] = error;
    }

    /// Remove and return the entry for a field.
    pub fn take(&mut self, field: FieldName) -> Option<FieldError> {
        self.entries[field.index()].take()
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.entries = Default::default();
    }

    /// Whether no field has an error.
    pub fn is_empty(&self) -> bool {
        self.entries.iter().all(Option::is_none)
    }

    /// Number of fields with an error.
    pub fn len(&self) -> usize {
        self.entries.iter().flatten().count()
    }

    /// Iterate over errors in rendering order.
    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.entries.iter().flatten()
    }

    /// First field with an error, in rendering order.
    pub fn first_invalid(&self) -> Option<FieldName> {
        self.iter().next().map(|e| e.field)
    }
}

impl From<ValidationResult> for ErrorMap {
    fn from(result: ValidationResult) -> Self {
        let mut map = ErrorMap::new();
        if let ValidationResult::Invalid(errors) = result {
            for error in errors {
                map.insert(error);
            }
        }
        map
    }
}
