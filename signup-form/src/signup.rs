//! The sign-up form's rule set.

use std::sync::LazyLock;

use crate::field::FieldName;
use crate::state::FormState;
use crate::validation::{ErrorMap, Schema};

pub const REQUIRED: &str = "This field is required";
pub const INVALID_EMAIL: &str = "Invalid email";
pub const PASSWORD_TOO_SHORT: &str = "The password must have at least 6 characters";
pub const PASSWORDS_DO_NOT_MATCH: &str = "The passwords do not match";

/// Minimum number of characters in a password.
pub const MIN_PASSWORD_LENGTH: usize = 6;

static SCHEMA: LazyLock<Schema> = LazyLock::new(|| {
    Schema::new()
        .field(FieldName::Name)
        .required(REQUIRED)
        .field(FieldName::Email)
        // An empty address fails the format check first.
        .email(INVALID_EMAIL)
        .required(REQUIRED)
        .field(FieldName::Password)
        .min_length(MIN_PASSWORD_LENGTH, PASSWORD_TOO_SHORT)
        .field(FieldName::ConfirmPassword)
        .min_length(MIN_PASSWORD_LENGTH, PASSWORD_TOO_SHORT)
        // Mismatch is always reported on the confirmation field.
        .matches(FieldName::Password, PASSWORDS_DO_NOT_MATCH)
        .finish()
});

/// The process-wide sign-up schema.
pub fn signup_schema() -> &'static Schema {
    &SCHEMA
}

/// Validate a full state against the sign-up rules.
pub fn validate(state: &FormState) -> ErrorMap {
    signup_schema().validate(state).into()
}
