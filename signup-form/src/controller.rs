//! The form controller: owns field values and errors, runs validation and
//! handles submission.

use std::collections::BTreeSet;

use crate::config::{FormConfig, RevalidateMode, ValidationMode};
use crate::error::FormError;
use crate::field::FieldName;
use crate::render::{self, FieldProps, FieldView};
use crate::signup;
use crate::state::FormState;
use crate::validation::{ErrorMap, FieldError};

/// Receives the form's values when a submit passes validation.
pub trait SubmitHandler {
    fn on_valid_submit(&mut self, values: &FormState);
}

impl<F: FnMut(&FormState)> SubmitHandler for F {
    fn on_valid_submit(&mut self, values: &FormState) {
        self(values)
    }
}

/// Default submit handler: logs the submitted values.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSubmit;

impl SubmitHandler for LogSubmit {
    fn on_valid_submit(&mut self, values: &FormState) {
        log::info!("Form submitted: {:?}", values);
    }
}

/// Outcome of a submit attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation passed and the submit handler was called.
    Submitted,
    /// Validation failed; errors are now displayed.
    Rejected {
        /// First invalid field in rendering order, if focusing errors is enabled.
        first_invalid: Option<FieldName>,
    },
}

impl SubmitOutcome {
    pub fn is_submitted(&self) -> bool {
        matches!(self, Self::Submitted)
    }
}

/// Interaction bookkeeping for the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormStatus {
    /// Number of submit attempts, successful or not.
    pub submit_count: u32,
    /// Whether a submit has been attempted.
    pub is_submitted: bool,
    /// Whether the last submit attempt passed validation.
    pub is_submit_successful: bool,
    /// Fields that have lost focus at least once.
    pub touched: BTreeSet<FieldName>,
    /// Fields whose value differs from the initial (empty) value.
    pub dirty: BTreeSet<FieldName>,
}

impl FormStatus {
    pub fn is_touched(&self, field: FieldName) -> bool {
        self.touched.contains(&field)
    }

    pub fn is_dirty(&self, field: FieldName) -> bool {
        self.dirty.contains(&field)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Trigger {
    Change,
    Blur,
}

/// Owns the form's state and errors.
///
/// Field renderers are projections over the controller (see
/// [`FormController::field_view`]); the host reports edits with
/// [`update_field`](FormController::update_field) and focus loss with
/// [`blur_field`](FormController::blur_field).
///
/// # Example
///
/// ```
/// use signup_form::{FieldName, FormController, FormState};
///
/// let mut submitted = Vec::new();
/// let mut form = FormController::new(|values: &FormState| submitted.push(values.clone()));
/// form.update_field(FieldName::Name, "Ann");
/// form.update_field(FieldName::Email, "a@b.com");
/// form.update_field(FieldName::Password, "secret1");
/// form.update_field(FieldName::ConfirmPassword, "secret1");
/// assert!(form.submit().is_submitted());
/// drop(form);
/// assert_eq!(submitted.len(), 1);
/// ```
pub struct FormController<H: SubmitHandler = LogSubmit> {
    state: FormState,
    errors: ErrorMap,
    status: FormStatus,
    config: FormConfig,
    handler: H,
}

impl Default for FormController<LogSubmit> {
    fn default() -> Self {
        Self::new(LogSubmit)
    }
}

impl<H: SubmitHandler> FormController<H> {
    /// Create a controller with default configuration.
    pub fn new(handler: H) -> Self {
        Self::with_config(FormConfig::default(), handler)
    }

    /// Create a controller with the given configuration.
    pub fn with_config(config: FormConfig, handler: H) -> Self {
        Self {
            state: FormState::new(),
            errors: ErrorMap::new(),
            status: FormStatus::default(),
            config,
            handler,
        }
    }

    // -------------------------------------------------------------------------
    // Read methods
    // -------------------------------------------------------------------------

    /// Current values.
    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// Current value of a field.
    pub fn value(&self, field: FieldName) -> &str {
        self.state.get(field)
    }

    /// Errors currently displayed.
    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    /// Error currently displayed for a field.
    pub fn error(&self, field: FieldName) -> Option<&FieldError> {
        self.errors.get(field)
    }

    pub fn status(&self) -> &FormStatus {
        &self.status
    }

    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    /// Whether no error is currently displayed.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn handler(&self) -> &H {
        &self.handler
    }

    pub fn handler_mut(&mut self) -> &mut H {
        &mut self.handler
    }

    pub fn into_handler(self) -> H {
        self.handler
    }

    // -------------------------------------------------------------------------
    // Field binding
    // -------------------------------------------------------------------------

    /// Set a field's value.
    ///
    /// Only validates the field if the active mode validates on change.
    pub fn update_field(&mut self, field: FieldName, value: impl Into<String>) {
        self.state.set(field, value);
        if self.state.get(field).is_empty() {
            self.status.dirty.remove(&field);
        } else {
            self.status.dirty.insert(field);
        }

        if self.should_validate(field, Trigger::Change) {
            self.validate_field(field);
        }
    }

    /// Set a field's value by its name.
    pub fn update_field_by_name(
        &mut self,
        name: &str,
        value: impl Into<String>,
    ) -> Result<(), FormError> {
        let field = name.parse()?;
        self.update_field(field, value);
        Ok(())
    }

    /// Report that a field lost focus.
    pub fn blur_field(&mut self, field: FieldName) {
        self.status.touched.insert(field);

        if self.should_validate(field, Trigger::Blur) {
            self.validate_field(field);
        }
    }

    // -------------------------------------------------------------------------
    // Validation and submission
    // -------------------------------------------------------------------------

    /// Validate the current values without changing the displayed errors.
    pub fn validate(&self) -> ErrorMap {
        signup::validate(&self.state)
    }

    /// Validate every field and invoke the submit handler if none fails.
    pub fn submit(&mut self) -> SubmitOutcome {
        self.status.submit_count += 1;
        self.status.is_submitted = true;
        self.errors = self.validate();

        if self.errors.is_empty() {
            self.status.is_submit_successful = true;
            log::debug!("Submit #{} accepted", self.status.submit_count);
            self.handler.on_valid_submit(&self.state);
            SubmitOutcome::Submitted
        } else {
            self.status.is_submit_successful = false;
            log::debug!(
                "Submit #{} rejected: {} invalid field(s)",
                self.status.submit_count,
                self.errors.len()
            );
            let first_invalid = if self.config.should_focus_error {
                self.errors.first_invalid()
            } else {
                None
            };
            SubmitOutcome::Rejected { first_invalid }
        }
    }

    /// Return to the initial state: empty values, no errors, fresh status.
    pub fn reset(&mut self) {
        self.state = FormState::new();
        self.errors.clear();
        self.status = FormStatus::default();
    }

    // -------------------------------------------------------------------------
    // Rendering
    // -------------------------------------------------------------------------

    /// Props binding a field renderer to this controller.
    pub fn field_props(&self, field: FieldName) -> FieldProps<'_> {
        FieldProps::new(field, self.state.get(field))
            .input_type(field.input_type())
            .error(self.errors.get(field))
    }

    /// Render one field.
    pub fn field_view(&self, field: FieldName) -> FieldView {
        render::render(&self.field_props(field))
    }

    /// Render every field in order.
    pub fn views(&self) -> Vec<FieldView> {
        FieldName::ALL.into_iter().map(|f| self.field_view(f)).collect()
    }

    fn should_validate(&self, field: FieldName, trigger: Trigger) -> bool {
        // `All` keeps validating every blur and edit after a submit too
        if self.status.is_submitted && self.config.mode != ValidationMode::All {
            return match self.config.revalidate_mode {
                RevalidateMode::OnBlur => trigger == Trigger::Blur,
                RevalidateMode::OnChange => trigger == Trigger::Change,
                RevalidateMode::OnSubmit => false,
            };
        }

        match self.config.mode {
            ValidationMode::OnBlur => trigger == Trigger::Blur,
            ValidationMode::OnChange => trigger == Trigger::Change,
            ValidationMode::OnSubmit => false,
            ValidationMode::OnTouched => {
                trigger == Trigger::Blur || self.status.is_touched(field)
            }
            ValidationMode::All => true,
        }
    }

    /// Validate the whole state and update only `field`'s displayed error.
    fn validate_field(&mut self, field: FieldName) {
        let mut errors = self.validate();
        let error = errors.take(field);
        if let Some(error) = &error {
            log::debug!("Validation failed: {}", error);
        }
        self.errors.set(field, error);
    }
}
