//! Form field value objects

/// A single input field's edit buffer and presentation settings
#[derive(Debug, Clone)]
pub struct FormField {
    pub label: String,
    pub value: String,
    pub mask: bool,
}

impl FormField {
    /// Create a plain text field
    pub fn text(label: &str) -> Self {
        Self {
            label: label.to_string(),
            value: String::new(),
            mask: false,
        }
    }

    /// Create a masked field (rendered as bullets)
    pub fn masked(label: &str) -> Self {
        Self {
            mask: true,
            ..Self::text(label)
        }
    }

    pub fn as_text(&self) -> &str {
        &self.value
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        self.value.push(c);
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        self.value.pop();
    }

    /// Clear the field value
    pub fn clear(&mut self) {
        self.value.clear();
    }

    /// Get the display value for rendering; masked fields render one
    /// bullet per character
    pub fn display_value(&self) -> String {
        if self.mask {
            "•".repeat(self.value.chars().count())
        } else {
            self.value.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_text_field_defaults() {
        let field = FormField::text("Email");
        assert_eq!(field.label, "Email");
        assert_eq!(field.as_text(), "");
        assert!(!field.mask);
    }

    #[test]
    fn test_push_and_pop_char() {
        let mut field = FormField::text("Email");
        field.push_char('a');
        field.push_char('b');
        assert_eq!(field.as_text(), "ab");
        field.pop_char();
        assert_eq!(field.as_text(), "a");
    }

    #[test]
    fn test_pop_on_empty_is_noop() {
        let mut field = FormField::text("Email");
        field.pop_char();
        assert_eq!(field.as_text(), "");
    }

    #[test]
    fn test_clear() {
        let mut field = FormField::text("Email");
        field.push_char('x');
        field.clear();
        assert_eq!(field.as_text(), "");
    }

    #[test]
    fn test_masked_display_hides_value() {
        let mut field = FormField::masked("Password");
        for c in "Abc1!".chars() {
            field.push_char(c);
        }
        assert_eq!(field.display_value(), "•••••");
        assert_eq!(field.as_text(), "Abc1!");
    }

    #[test]
    fn test_unmasked_display_shows_value() {
        let mut field = FormField::text("Email");
        field.push_char('a');
        assert_eq!(field.display_value(), "a");
    }
}
