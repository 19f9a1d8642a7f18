//! Field identity and raw value storage for the registration form

use std::fmt;

/// The fields of the registration form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    Email,
    Password,
    RepeatPassword,
}

impl FieldId {
    /// All fields, in display order
    pub const ALL: [FieldId; 3] = [FieldId::Email, FieldId::Password, FieldId::RepeatPassword];

    /// Stable name, used for logging and field labels
    pub fn name(self) -> &'static str {
        match self {
            FieldId::Email => "email",
            FieldId::Password => "password",
            FieldId::RepeatPassword => "repeatPassword",
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Current raw values of every form field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldValues {
    pub email: String,
    pub password: String,
    pub repeat_password: String,
}

impl FieldValues {
    pub fn get(&self, field: FieldId) -> &str {
        match field {
            FieldId::Email => &self.email,
            FieldId::Password => &self.password,
            FieldId::RepeatPassword => &self.repeat_password,
        }
    }

    pub fn set(&mut self, field: FieldId, value: String) {
        match field {
            FieldId::Email => self.email = value,
            FieldId::Password => self.password = value,
            FieldId::RepeatPassword => self.repeat_password = value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_names_are_stable() {
        assert_eq!(FieldId::Email.name(), "email");
        assert_eq!(FieldId::Password.name(), "password");
        assert_eq!(FieldId::RepeatPassword.name(), "repeatPassword");
    }

    #[test]
    fn test_display_matches_name() {
        for field in FieldId::ALL {
            assert_eq!(format!("{field}"), field.name());
        }
    }

    #[test]
    fn test_default_values_are_empty() {
        let values = FieldValues::default();
        for field in FieldId::ALL {
            assert_eq!(values.get(field), "");
        }
    }

    #[test]
    fn test_set_then_get_round_trips() {
        let mut values = FieldValues::default();
        values.set(FieldId::Password, "Abcdef1!".to_string());
        assert_eq!(values.get(FieldId::Password), "Abcdef1!");
        assert_eq!(values.get(FieldId::Email), "");
    }
}
