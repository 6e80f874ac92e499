//! Error types

/// Errors raised by the form API itself.
///
/// User input never produces one of these; validation violations are reported
/// through [`ErrorMap`](crate::validation::ErrorMap) instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    /// The given name is not one of the form's fields.
    #[error("Unknown field '{name}'")]
    UnknownField { name: String },
}

impl FormError {
    /// Creates a new unknown field error.
    pub fn unknown_field(name: impl Into<String>) -> Self {
        Self::UnknownField { name: name.into() }
    }
}
