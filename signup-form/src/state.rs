use serde::{Deserialize, Serialize};

use crate::field::FieldName;

/// Current values of every field in the form.
///
/// Each [`FieldName`] maps to its own typed slot, so every field is always
/// present. A new state has all values empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormState {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl FormState {
    /// Create a state with all values empty.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter, mostly useful for constructing fixtures.
    pub fn with(mut self, field: FieldName, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Get the value of a field.
    pub fn get(&self, field: FieldName) -> &str {
        match field {
            FieldName::Name => &self.name,
            FieldName::Email => &self.email,
            FieldName::Password => &self.password,
            FieldName::ConfirmPassword => &self.confirm_password,
        }
    }

    /// Replace the value of a field.
    pub fn set(&mut self, field: FieldName, value: impl Into<String>) {
        *self.slot_mut(field) = value.into();
    }

    /// Iterate over `(field, value)` pairs in rendering order.
    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &str)> + '_ {
        FieldName::ALL.into_iter().map(|field| (field, self.get(field)))
    }

    /// Whether every value is empty.
    pub fn is_empty(&self) -> bool {
        self.iter().all(|(_, value)| value.is_empty())
    }

    fn slot_mut(&mut self, field: FieldName) -> &mut String {
        match field {
            FieldName::Name => &mut self.name,
            FieldName::Email => &mut self.email,
            FieldName::Password => &mut self.password,
            FieldName::ConfirmPassword => &mut self.confirm_password,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slots_are_independent() {
        let mut state = FormState::new();
        state.set(FieldName::Password, "secret1");
        assert_eq!(state.get(FieldName::Password), "secret1");
        assert_eq!(state.get(FieldName::ConfirmPassword), "");
        assert_eq!(state.password, "secret1");
    }

    #[test]
    fn test_iter_follows_rendering_order() {
        let state = FormState::new().with(FieldName::Email, "a@b.com");
        let fields: Vec<_> = state.iter().map(|(field, _)| field).collect();
        assert_eq!(fields, FieldName::ALL.to_vec());
        assert!(!state.is_empty());
        assert!(FormState::new().is_empty());
    }
}
