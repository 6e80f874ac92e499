//! Tests for the form controller.

use std::cell::RefCell;
use std::rc::Rc;

use signup_form::signup::{PASSWORD_TOO_SHORT, PASSWORDS_DO_NOT_MATCH, REQUIRED};
use signup_form::{
    FieldName, FormConfig, FormController, FormError, FormState, FormStatus, RevalidateMode,
    SubmitHandler, SubmitOutcome, ValidationMode,
};

/// Handler that records every submission.
#[derive(Default)]
struct Recorder {
    submissions: Vec<FormState>,
}

impl SubmitHandler for Recorder {
    fn on_valid_submit(&mut self, values: &FormState) {
        self.submissions.push(values.clone());
    }
}

fn fill(form: &mut FormController<Recorder>, confirm: &str) {
    form.update_field(FieldName::Name, "Ann");
    form.update_field(FieldName::Email, "a@b.com");
    form.update_field(FieldName::Password, "secret1");
    form.update_field(FieldName::ConfirmPassword, confirm);
}

#[test]
fn test_initial_state_is_empty() {
    let form = FormController::new(Recorder::default());
    assert!(form.state().is_empty());
    assert!(form.errors().is_empty());
    assert_eq!(form.status().submit_count, 0);
    assert!(!form.status().is_submitted);
}

#[test]
fn test_submit_valid_invokes_handler_once() {
    let mut form = FormController::new(Recorder::default());
    fill(&mut form, "secret1");

    assert_eq!(form.submit(), SubmitOutcome::Submitted);

    let expected = FormState {
        name: "Ann".into(),
        email: "a@b.com".into(),
        password: "secret1".into(),
        confirm_password: "secret1".into(),
    };
    assert_eq!(form.handler().submissions, vec![expected]);
    assert!(form.status().is_submit_successful);
    assert_eq!(form.status().submit_count, 1);
}

#[test]
fn test_submit_mismatch_never_invokes_handler() {
    let mut form = FormController::new(Recorder::default());
    fill(&mut form, "secret2");

    let outcome = form.submit();

    assert_eq!(
        outcome,
        SubmitOutcome::Rejected {
            first_invalid: Some(FieldName::ConfirmPassword)
        }
    );
    assert!(form.handler().submissions.is_empty());
    assert_eq!(
        form.error(FieldName::ConfirmPassword).map(|e| e.message.as_str()),
        Some(PASSWORDS_DO_NOT_MATCH)
    );
    assert!(form.error(FieldName::Password).is_none());
    assert!(!form.status().is_submit_successful);
}

#[test]
fn test_submit_with_closure_handler() {
    let calls = Rc::new(RefCell::new(0));
    let counter = Rc::clone(&calls);
    let mut form = FormController::new(move |_: &FormState| *counter.borrow_mut() += 1);

    form.submit();
    assert_eq!(*calls.borrow(), 0);

    form.update_field(FieldName::Name, "Ann");
    form.update_field(FieldName::Email, "a@b.com");
    form.update_field(FieldName::Password, "secret1");
    form.update_field(FieldName::ConfirmPassword, "secret1");
    form.submit();
    assert_eq!(*calls.borrow(), 1);
}

#[test]
fn test_keystrokes_do_not_validate_before_blur() {
    let mut form = FormController::new(Recorder::default());
    form.update_field(FieldName::Password, "abc");
    assert!(form.errors().is_empty());

    form.blur_field(FieldName::Password);
    assert_eq!(
        form.error(FieldName::Password).map(|e| e.message.as_str()),
        Some(PASSWORD_TOO_SHORT)
    );
    assert!(form.status().is_touched(FieldName::Password));
}

#[test]
fn test_blur_only_shows_blurred_field_error() {
    let mut form = FormController::new(Recorder::default());
    form.blur_field(FieldName::Name);

    assert_eq!(form.errors().len(), 1);
    assert_eq!(
        form.error(FieldName::Name).map(|e| e.message.as_str()),
        Some(REQUIRED)
    );
}

#[test]
fn test_blur_clears_fixed_field_error() {
    let mut form = FormController::new(Recorder::default());
    form.blur_field(FieldName::Name);
    assert!(form.error(FieldName::Name).is_some());

    form.update_field(FieldName::Name, "Ann");
    // Still shown until the next blur.
    assert!(form.error(FieldName::Name).is_some());

    form.blur_field(FieldName::Name);
    assert!(form.error(FieldName::Name).is_none());
}

#[test]
fn test_edit_after_failed_submit_revalidates() {
    let mut form = FormController::new(Recorder::default());
    fill(&mut form, "secret2");
    form.submit();
    assert!(form.error(FieldName::ConfirmPassword).is_some());

    form.update_field(FieldName::ConfirmPassword, "secret1");
    assert!(form.error(FieldName::ConfirmPassword).is_none());
    assert!(form.is_valid());
}

#[test]
fn test_revalidate_on_submit_keeps_errors_until_next_submit() {
    let config = FormConfig::default().with_revalidate_mode(RevalidateMode::OnSubmit);
    let mut form = FormController::with_config(config, Recorder::default());
    form.submit();
    assert_eq!(form.errors().len(), 4);

    fill(&mut form, "secret1");
    form.blur_field(FieldName::Name);
    assert_eq!(form.errors().len(), 4);

    assert!(form.submit().is_submitted());
    assert!(form.errors().is_empty());
}

#[test]
fn test_on_change_mode_validates_keystrokes() {
    let config = FormConfig::default().with_mode(ValidationMode::OnChange);
    let mut form = FormController::with_config(config, Recorder::default());
    form.update_field(FieldName::Email, "ann");
    assert!(form.error(FieldName::Email).is_some());
    form.update_field(FieldName::Email, "ann@b.com");
    assert!(form.error(FieldName::Email).is_none());
}

#[test]
fn test_on_touched_mode_validates_changes_after_first_blur() {
    let config = FormConfig::default().with_mode(ValidationMode::OnTouched);
    let mut form = FormController::with_config(config, Recorder::default());

    form.update_field(FieldName::Email, "ann");
    assert!(form.error(FieldName::Email).is_none());

    form.blur_field(FieldName::Email);
    assert!(form.error(FieldName::Email).is_some());

    form.update_field(FieldName::Email, "ann@b.com");
    assert!(form.error(FieldName::Email).is_none());
}

#[test]
fn test_all_mode_ignores_revalidate_mode_after_submit() {
    let config = FormConfig::default()
        .with_mode(ValidationMode::All)
        .with_revalidate_mode(RevalidateMode::OnBlur);
    let mut form = FormController::with_config(config, Recorder::default());

    assert!(!form.submit().is_submitted());
    assert_eq!(form.error(FieldName::Name).map(|e| e.message.as_str()), Some(REQUIRED));

    form.update_field(FieldName::Name, "Ann");
    assert!(form.error(FieldName::Name).is_none());

    form.update_field(FieldName::Name, "");
    form.blur_field(FieldName::Name);
    assert!(form.error(FieldName::Name).is_some());
}

#[test]
fn test_on_submit_mode_ignores_blur() {
    let config = FormConfig::default().with_mode(ValidationMode::OnSubmit);
    let mut form = FormController::with_config(config, Recorder::default());
    form.blur_field(FieldName::Name);
    assert!(form.errors().is_empty());
}

#[test]
fn test_rejected_submit_without_focus_error() {
    let config = FormConfig::default().with_focus_error(false);
    let mut form = FormController::with_config(config, Recorder::default());
    assert_eq!(
        form.submit(),
        SubmitOutcome::Rejected {
            first_invalid: None
        }
    );
}

#[test]
fn test_dirty_tracking() {
    let mut form = FormController::new(Recorder::default());
    form.update_field(FieldName::Name, "A");
    assert!(form.status().is_dirty(FieldName::Name));
    form.update_field(FieldName::Name, "");
    assert!(!form.status().is_dirty(FieldName::Name));
}

#[test]
fn test_update_field_by_name() {
    let mut form = FormController::new(Recorder::default());
    form.update_field_by_name("confirmPassword", "secret1")
        .expect("known field");
    assert_eq!(form.value(FieldName::ConfirmPassword), "secret1");

    let err = form.update_field_by_name("age", "42").unwrap_err();
    assert_eq!(err, FormError::unknown_field("age"));
    assert_eq!(err.to_string(), "Unknown field 'age'");
}

#[test]
fn test_reset_restores_initial_state() {
    let mut form = FormController::new(Recorder::default());
    fill(&mut form, "secret2");
    form.blur_field(FieldName::Name);
    form.submit();

    form.reset();

    assert!(form.state().is_empty());
    assert!(form.errors().is_empty());
    assert_eq!(form.status(), &FormStatus::default());

    // Back in on-blur mode: keystrokes are not validated again.
    form.update_field(FieldName::Email, "x");
    assert!(form.errors().is_empty());
}

#[test]
fn test_validate_does_not_touch_displayed_errors() {
    let form = FormController::new(Recorder::default());
    assert_eq!(form.validate().len(), 4);
    assert!(form.errors().is_empty());
}
