use signup_form::FieldName;

/// Something on screen that can hold focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Field(FieldName),
    Submit,
}

impl Target {
    /// Focusable targets in tab order.
    pub const ORDER: [Target; 5] = [
        Target::Field(FieldName::Name),
        Target::Field(FieldName::Email),
        Target::Field(FieldName::Password),
        Target::Field(FieldName::ConfirmPassword),
        Target::Submit,
    ];

    pub fn field(self) -> Option<FieldName> {
        match self {
            Self::Field(field) => Some(field),
            Self::Submit => None,
        }
    }
}

/// A focus move: the target that lost focus and the one that gained it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusChange {
    pub blurred: Target,
    pub focused: Target,
}

/// Tracks which target is currently focused.
#[derive(Debug)]
pub struct FocusState {
    focused: Target,
}

impl Default for FocusState {
    fn default() -> Self {
        Self {
            focused: Target::ORDER[0],
        }
    }
}

impl FocusState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the currently focused target.
    pub fn focused(&self) -> Target {
        self.focused
    }

    /// Programmatically focus a target.
    /// Returns the change if focus moved.
    pub fn focus(&mut self, target: Target) -> Option<FocusChange> {
        if self.focused == target {
            return None;
        }
        let blurred = std::mem::replace(&mut self.focused, target);
        Some(FocusChange {
            blurred,
            focused: target,
        })
    }

    /// Focus the next target (Tab navigation), wrapping around.
    pub fn focus_next(&mut self) -> Option<FocusChange> {
        let i = self.position();
        self.focus(Target::ORDER[(i + 1) % Target::ORDER.len()])
    }

    /// Focus the previous target (Shift+Tab navigation), wrapping around.
    pub fn focus_prev(&mut self) -> Option<FocusChange> {
        let i = self.position();
        let len = Target::ORDER.len();
        self.focus(Target::ORDER[(i + len - 1) % len])
    }

    fn position(&self) -> usize {
        Target::ORDER
            .iter()
            .position(|t| *t == self.focused)
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_on_first_field() {
        assert_eq!(FocusState::new().focused(), Target::Field(FieldName::Name));
    }

    #[test]
    fn test_next_wraps_around() {
        let mut focus = FocusState::new();
        for _ in 0..4 {
            focus.focus_next();
        }
        assert_eq!(focus.focused(), Target::Submit);

        let change = focus.focus_next().unwrap();
        assert_eq!(change.blurred, Target::Submit);
        assert_eq!(change.focused, Target::Field(FieldName::Name));
    }

    #[test]
    fn test_prev_wraps_around() {
        let mut focus = FocusState::new();
        let change = focus.focus_prev().unwrap();
        assert_eq!(change.blurred, Target::Field(FieldName::Name));
        assert_eq!(change.focused, Target::Submit);
    }

    #[test]
    fn test_focus_same_target_is_no_change() {
        let mut focus = FocusState::new();
        assert_eq!(focus.focus(Target::Field(FieldName::Name)), None);
    }
}
