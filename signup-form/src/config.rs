//! Controller configuration.

use serde::{Deserialize, Serialize};

/// When validation runs before the first submit attempt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ValidationMode {
    /// Validate a field when it loses focus.
    #[default]
    OnBlur,
    /// Validate a field on every edit.
    OnChange,
    /// Only validate on submit.
    OnSubmit,
    /// Validate on the first blur, then on every edit of that field.
    OnTouched,
    /// Validate on both blur and edit, before and after a submit.
    All,
}

/// When validation runs after the first submit attempt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RevalidateMode {
    OnBlur,
    #[default]
    OnChange,
    OnSubmit,
}

/// Configuration for a [`FormController`](crate::FormController).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FormConfig {
    pub mode: ValidationMode,
    pub revalidate_mode: RevalidateMode,
    /// Report the first invalid field of a rejected submit so the host can
    /// focus it.
    pub should_focus_error: bool,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            mode: ValidationMode::OnBlur,
            revalidate_mode: RevalidateMode::OnChange,
            should_focus_error: true,
        }
    }
}

impl FormConfig {
    pub fn with_mode(mut self, mode: ValidationMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_revalidate_mode(mut self, mode: RevalidateMode) -> Self {
        self.revalidate_mode = mode;
        self
    }

    pub fn with_focus_error(mut self, focus: bool) -> Self {
        self.should_focus_error = focus;
        self
    }
}
