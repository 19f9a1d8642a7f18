//! Registration form state and focus order

use super::field::FormField;
use crate::validation::FieldId;

/// Index of the submit button in the focus order (after the three fields)
const SUBMIT_SLOT: usize = 3;

const SLOT_COUNT: usize = 4;

/// The three input fields plus the submit button focus slot
#[derive(Debug, Clone)]
pub struct RegistrationForm {
    pub email: FormField,
    pub password: FormField,
    pub repeat_password: FormField,
    active_slot: usize,
}

impl RegistrationForm {
    pub fn new(mask_passwords: bool) -> Self {
        let (password, repeat_password) = if mask_passwords {
            (
                FormField::masked("Password"),
                FormField::masked("Repeat password"),
            )
        } else {
            (
                FormField::text("Password"),
                FormField::text("Repeat password"),
            )
        };
        Self {
            email: FormField::text("Email"),
            password,
            repeat_password,
            active_slot: 0,
        }
    }

    pub fn field(&self, id: FieldId) -> &FormField {
        match id {
            FieldId::Email => &self.email,
            FieldId::Password => &self.password,
            FieldId::RepeatPassword => &self.repeat_password,
        }
    }

    pub fn field_mut(&mut self, id: FieldId) -> &mut FormField {
        match id {
            FieldId::Email => &mut self.email,
            FieldId::Password => &mut self.password,
            FieldId::RepeatPassword => &mut self.repeat_password,
        }
    }

    /// The field under focus, or `None` when the submit button has it
    pub fn active_field(&self) -> Option<FieldId> {
        match self.active_slot {
            0 => Some(FieldId::Email),
            1 => Some(FieldId::Password),
            2 => Some(FieldId::RepeatPassword),
            _ => None,
        }
    }

    pub fn on_submit_button(&self) -> bool {
        self.active_slot == SUBMIT_SLOT
    }

    /// Move focus forward, wrapping from the button back to the first field
    pub fn next_slot(&mut self) {
        self.active_slot = (self.active_slot + 1) % SLOT_COUNT;
    }

    /// Move focus backward, wrapping from the first field to the button
    pub fn prev_slot(&mut self) {
        if self.active_slot == 0 {
            self.active_slot = SLOT_COUNT - 1;
        } else {
            self.active_slot -= 1;
        }
    }

    pub fn focus_submit(&mut self) {
        self.active_slot = SUBMIT_SLOT;
    }

    /// Clear every field and return focus to the first one
    pub fn clear(&mut self) {
        self.email.clear();
        self.password.clear();
        self.repeat_password.clear();
        self.active_slot = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_new_focuses_first_field() {
        let form = RegistrationForm::new(true);
        assert_eq!(form.active_field(), Some(FieldId::Email));
        assert!(!form.on_submit_button());
    }

    #[test]
    fn test_mask_flag_applies_to_password_fields_only() {
        let form = RegistrationForm::new(true);
        assert!(!form.email.mask);
        assert!(form.password.mask);
        assert!(form.repeat_password.mask);

        let unmasked = RegistrationForm::new(false);
        assert!(!unmasked.password.mask);
    }

    #[test]
    fn test_next_slot_cycles_through_button() {
        let mut form = RegistrationForm::new(true);
        form.next_slot();
        assert_eq!(form.active_field(), Some(FieldId::Password));
        form.next_slot();
        assert_eq!(form.active_field(), Some(FieldId::RepeatPassword));
        form.next_slot();
        assert!(form.on_submit_button());
        form.next_slot();
        assert_eq!(form.active_field(), Some(FieldId::Email));
    }

    #[test]
    fn test_prev_slot_wraps_to_button() {
        let mut form = RegistrationForm::new(true);
        form.prev_slot();
        assert!(form.on_submit_button());
    }

    #[test]
    fn test_focus_submit() {
        let mut form = RegistrationForm::new(true);
        form.focus_submit();
        assert!(form.on_submit_button());
        assert_eq!(form.active_field(), None);
    }

    #[test]
    fn test_clear_resets_values_and_focus() {
        let mut form = RegistrationForm::new(true);
        form.field_mut(FieldId::Email).push_char('a');
        form.focus_submit();
        form.clear();
        assert_eq!(form.email.as_text(), "");
        assert_eq!(form.active_field(), Some(FieldId::Email));
    }

    #[test]
    fn test_field_lookup_matches_field_mut() {
        let mut form = RegistrationForm::new(true);
        form.field_mut(FieldId::RepeatPassword).push_char('x');
        assert_eq!(form.field(FieldId::RepeatPassword).as_text(), "x");
    }
}
