//! Form validation.
//!
//! A [`Schema`] is declared once with a fluent API and validates a whole
//! [`FormState`](crate::FormState) at a time. Each field reports at most its
//! first violated rule; cross-field rules run after the field rules.
//!
//! ```ignore
//! let schema = Schema::new()
//!     .field(FieldName::Password)
//!         .min_length(6, "Too short")
//!     .field(FieldName::ConfirmPassword)
//!         .matches(FieldName::Password, "The passwords do not match")
//!     .finish();
//!
//! let errors = ErrorMap::from(schema.validate(&state));
//! ```

mod error_map;
mod result;
mod schema;

pub use error_map::ErrorMap;
pub use result::{FieldError, RuleKind, ValidationResult};
pub use schema::{FieldBuilder, Schema};
