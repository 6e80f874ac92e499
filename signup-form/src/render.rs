//! Field rendering.
//!
//! A field is rendered as a pure projection of the controller's state: the
//! view is rebuilt from [`FieldProps`] on every frame and holds no state of
//! its own.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::field::{FieldName, InputType};
use crate::validation::FieldError;

/// Character shown in place of each character of a masked value.
pub const MASK_CHAR: char = '•';

/// Everything needed to render one labeled input.
#[derive(Debug, Clone, Copy)]
pub struct FieldProps<'a> {
    pub field: FieldName,
    pub label: &'a str,
    pub input_type: InputType,
    pub value: &'a str,
    pub error: Option<&'a FieldError>,
}

impl<'a> FieldProps<'a> {
    /// Props for a plain text input labeled with the field's default label.
    pub fn new(field: FieldName, value: &'a str) -> Self {
        Self {
            field,
            label: field.label(),
            input_type: InputType::default(),
            value,
            error: None,
        }
    }

    pub fn label(mut self, label: &'a str) -> Self {
        self.label = label;
        self
    }

    pub fn input_type(mut self, input_type: InputType) -> Self {
        self.input_type = input_type;
        self
    }

    pub fn error(mut self, error: Option<&'a FieldError>) -> Self {
        self.error = error;
        self
    }
}

/// Rendered form of a single field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldView {
    pub field: FieldName,
    pub label: String,
    pub input_type: InputType,
    /// Bound value; always the controller's current value.
    pub value: String,
    /// Error message shown below the input.
    pub error: Option<String>,
}

/// One line of a laid out field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldLine {
    Label(String),
    Input { text: String, invalid: bool },
    Error(String),
}

/// Render a field.
pub fn render(props: &FieldProps<'_>) -> FieldView {
    FieldView {
        field: props.field,
        label: props.label.to_string(),
        input_type: props.input_type,
        value: props.value.to_string(),
        error: props.error.map(|e| e.message.clone()),
    }
}

impl FieldView {
    /// Element id, shared by the label and the input.
    pub fn id(&self) -> &'static str {
        self.field.as_str()
    }

    /// Whether the error indicator is shown.
    pub fn invalid(&self) -> bool {
        self.error.is_some()
    }

    /// Class list of the input element.
    pub fn css_class(&self) -> &'static str {
        if self.invalid() {
            "form-control is-invalid"
        } else {
            "form-control"
        }
    }

    /// Value as displayed in the input. Password values are masked.
    pub fn display_value(&self) -> String {
        if self.input_type.is_masked() {
            self.value.chars().map(|_| MASK_CHAR).collect()
        } else {
            self.value.clone()
        }
    }

    /// Lay the field out as label, input and optional error line, each fitted
    /// to `width` terminal cells.
    pub fn lines(&self, width: usize) -> Vec<FieldLine> {
        let mut lines = vec![
            FieldLine::Label(truncate_to_width(&self.label, width)),
            FieldLine::Input {
                text: tail_to_width(&self.display_value(), width),
                invalid: self.invalid(),
            },
        ];
        if let Some(error) = &self.error {
            lines.push(FieldLine::Error(truncate_to_width(error, width)));
        }
        lines
    }
}

/// Truncate to `max_width` cells, ending with an ellipsis when cut.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let target_width = max_width - 1;
    let mut result = String::new();
    let mut width = 0;
    for ch in s.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if width + ch_width > target_width {
            break;
        }
        result.push(ch);
        width += ch_width;
    }
    result.push('…');
    result
}

/// Keep the last `max_width` cells, so the end of a long input stays visible.
pub fn tail_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut kept = Vec::new();
    let mut width = 0;
    for ch in s.chars().rev() {
        let ch_width = ch.width().unwrap_or(0);
        if width + ch_width > max_width {
            break;
        }
        kept.push(ch);
        width += ch_width;
    }
    kept.into_iter().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_fits() {
        assert_eq!(truncate_to_width("Email", 10), "Email");
        assert_eq!(truncate_to_width("Email", 5), "Email");
    }

    #[test]
    fn test_truncate_overflow() {
        assert_eq!(truncate_to_width("Confirm Password", 8), "Confirm…");
        assert_eq!(truncate_to_width("Name", 1), "…");
        assert_eq!(truncate_to_width("Name", 0), "");
    }

    #[test]
    fn test_tail_keeps_end() {
        assert_eq!(tail_to_width("ann@example.com", 7), "ple.com");
        assert_eq!(tail_to_width("ann", 7), "ann");
    }

    #[test]
    fn test_tail_cjk() {
        // CJK characters take two cells
        assert_eq!(tail_to_width("日本語", 4), "本語");
        assert_eq!(tail_to_width("日本語", 5), "本語");
    }
}
