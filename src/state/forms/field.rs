//! Form field value objects

/// A single named, user-editable string in a form.
///
/// Controlled-input semantics: the rendered value always equals the stored
/// value. The field layer never validates; every mutation goes through the
/// owning form so validation re-runs afterwards.
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: &'static str,
    pub label: &'static str,
    pub value: String,
    /// Masked when rendered, unless `revealed` is set.
    pub secret: bool,
    pub revealed: bool,
}

impl FormField {
    /// Create a new plain text field
    pub fn text(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            value: String::new(),
            secret: false,
            revealed: false,
        }
    }

    /// Create a new masked field (passwords)
    pub fn secret(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            value: String::new(),
            secret: true,
            revealed: false,
        }
    }

    /// Replace the stored value unconditionally
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        self.value.push(c);
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        self.value.pop();
    }

    /// Toggle plain-text rendering for a secret field. No-op for text fields;
    /// the flag lives outside the value/error lifecycles.
    pub fn toggle_reveal(&mut self) {
        if self.secret {
            self.revealed = !self.revealed;
        }
    }

    /// Get the display value for rendering. Secret fields render one bullet
    /// per character until revealed.
    pub fn display_value(&self) -> String {
        if self.secret && !self.revealed {
            "•".repeat(self.value.chars().count())
        } else {
            self.value.clone()
        }
    }
}
