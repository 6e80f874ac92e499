//! Sign-up form: field state, validation rules, submission and field
//! rendering, independent of the host that draws it.

pub mod config;
pub mod controller;
pub mod error;
pub mod field;
pub mod render;
pub mod signup;
pub mod state;
pub mod validation;

pub use config::{FormConfig, RevalidateMode, ValidationMode};
pub use controller::{FormController, FormStatus, LogSubmit, SubmitHandler, SubmitOutcome};
pub use error::FormError;
pub use field::{FieldName, InputType};
pub use render::{FieldLine, FieldProps, FieldView, render};
pub use signup::{signup_schema, validate};
pub use state::FormState;
pub use validation::{ErrorMap, FieldError, RuleKind, ValidationResult};

pub mod prelude {
    pub use crate::config::{FormConfig, RevalidateMode, ValidationMode};
    pub use crate::controller::{FormController, SubmitHandler, SubmitOutcome};
    pub use crate::field::{FieldName, InputType};
    pub use crate::render::{FieldLine, FieldView};
    pub use crate::state::FormState;
    pub use crate::validation::{ErrorMap, FieldError};
}
