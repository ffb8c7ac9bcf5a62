//! Auth form state: fields, live validation, and submission wiring

use super::errors::ValidationErrors;
use super::field::FormField;
use super::rules;
use super::submit::Submission;
use crate::api::{RegisterRequest, SignInRequest};

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_active_field_mut(&mut self) -> &mut FormField;
    fn get_field(&self, index: usize) -> Option<&FormField>;
}

// Sign-In Form
#[derive(Debug)]
pub struct SignInForm {
    pub email: FormField,
    pub password: FormField,
    /// Rendered checkbox with no behavior until a session flow exists
    pub remember_me: bool,
    pub errors: ValidationErrors,
    pub submission: Submission,
    pub active_field_index: usize,
}

impl SignInForm {
    pub fn new() -> Self {
        Self {
            email: FormField::text("email", "Email"),
            password: FormField::secret("password", "Password"),
            remember_me: false,
            errors: ValidationErrors::new(),
            submission: Submission::default(),
            active_field_index: 0,
        }
    }

    /// Type a character into the active field and re-validate
    pub fn input_char(&mut self, c: char) {
        self.get_active_field_mut().push_char(c);
        self.refresh_validation();
    }

    /// Backspace in the active field and re-validate
    pub fn backspace(&mut self) {
        self.get_active_field_mut().pop_char();
        self.refresh_validation();
    }

    /// Replace a field's value by name and re-validate. Returns false for an
    /// unknown field name.
    #[allow(dead_code)]
    pub fn set_field(&mut self, name: &str, value: impl Into<String>) -> bool {
        match name {
            "email" => self.email.set_value(value),
            "password" => self.password.set_value(value),
            _ => return false,
        }
        self.refresh_validation();
        true
    }

    /// Toggle masking on the active field (no-op unless it is a secret field)
    pub fn toggle_reveal_active(&mut self) {
        self.get_active_field_mut().toggle_reveal();
    }

    /// Live validation. Sign-in tracks no per-keystroke rules, so a change
    /// only clears messages left over from a failed submit attempt.
    pub fn refresh_validation(&mut self) {
        self.errors.clear();
    }

    /// Full-form validation, run at submit time: required fields only.
    /// Populates all violated rules at once and returns whether the form may
    /// be submitted.
    pub fn validate_for_submit(&mut self) -> bool {
        let mut errors = ValidationErrors::new();
        if let Some(message) = rules::email_rule(&self.email.value) {
            errors.insert("email", message);
        }
        if self.password.value.is_empty() {
            errors.insert("password", rules::PASSWORD_REQUIRED_MESSAGE);
        }
        self.errors = errors;
        self.errors.is_empty()
    }

    pub fn request(&self) -> SignInRequest {
        SignInRequest {
            email: self.email.value.clone(),
            password: self.password.value.clone(),
        }
    }

    /// Discard all field values, errors, and settled submission state, as
    /// when the form unmounts. Refused while a submission is in flight.
    pub fn reset(&mut self) {
        if !self.submission.is_pending() {
            *self = Self::new();
        }
    }
}

impl Default for SignInForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for SignInForm {
    fn field_count(&self) -> usize {
        2
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(1);
    }
    fn get_active_field_mut(&mut self) -> &mut FormField {
        match self.active_field_index {
            0 => &mut self.email,
            _ => &mut self.password,
        }
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            0 => Some(&self.email),
            1 => Some(&self.password),
            _ => None,
        }
    }
}

// Registration Form
#[derive(Debug)]
pub struct RegisterForm {
    pub username: FormField,
    pub email: FormField,
    pub password: FormField,
    pub confirm_password: FormField,
    pub errors: ValidationErrors,
    pub submission: Submission,
    pub active_field_index: usize,
}

impl RegisterForm {
    pub fn new() -> Self {
        Self {
            username: FormField::text("username", "Username"),
            email: FormField::text("email", "Email"),
            password: FormField::secret("password", "Password"),
            confirm_password: FormField::secret("confirm_password", "Confirm Password"),
            errors: ValidationErrors::new(),
            submission: Submission::default(),
            active_field_index: 0,
        }
    }

    /// Type a character into the active field and re-validate
    pub fn input_char(&mut self, c: char) {
        self.get_active_field_mut().push_char(c);
        self.refresh_validation();
    }

    /// Backspace in the active field and re-validate
    pub fn backspace(&mut self) {
        self.get_active_field_mut().pop_char();
        self.refresh_validation();
    }

    /// Replace a field's value by name and re-validate. Returns false for an
    /// unknown field name.
    #[allow(dead_code)]
    pub fn set_field(&mut self, name: &str, value: impl Into<String>) -> bool {
        match name {
            "username" => self.username.set_value(value),
            "email" => self.email.set_value(value),
            "password" => self.password.set_value(value),
            "confirm_password" => self.confirm_password.set_value(value),
            _ => return false,
        }
        self.refresh_validation();
        true
    }

    /// Toggle masking on the active field (no-op unless it is a secret field)
    pub fn toggle_reveal_active(&mut self) {
        self.get_active_field_mut().toggle_reveal();
    }

    /// Live validation: the full registration rule set runs after every
    /// mutation. The confirm rule always reads the current password and
    /// confirm values, so an edit to either side re-checks the pair.
    pub fn refresh_validation(&mut self) {
        self.errors = self.rule_errors();
    }

    /// Full-form validation, run at submit time. Registration applies the
    /// same rule set live and at submit; both rebuild the error map from
    /// scratch. Returns whether the form may be submitted.
    pub fn validate_for_submit(&mut self) -> bool {
        self.errors = self.rule_errors();
        self.errors.is_empty()
    }

    fn rule_errors(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        if let Some(message) = rules::username_rule(&self.username.value) {
            errors.insert("username", message);
        }
        if let Some(message) = rules::email_rule(&self.email.value) {
            errors.insert("email", message);
        }
        if let Some(message) = rules::password_rule(&self.password.value) {
            errors.insert("password", message);
        }
        if let Some(message) =
            rules::confirm_rule(&self.password.value, &self.confirm_password.value)
        {
            errors.insert("confirm_password", message);
        }
        errors
    }

    pub fn request(&self) -> RegisterRequest {
        RegisterRequest {
            username: self.username.value.clone(),
            email: self.email.value.clone(),
            password: self.password.value.clone(),
        }
    }

    /// Discard all field values, errors, and settled submission state, as
    /// when the form unmounts. Refused while a submission is in flight.
    pub fn reset(&mut self) {
        if !self.submission.is_pending() {
            *self = Self::new();
        }
    }
}

impl Default for RegisterForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for RegisterForm {
    fn field_count(&self) -> usize {
        4
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(3);
    }
    fn get_active_field_mut(&mut self) -> &mut FormField {
        match self.active_field_index {
            0 => &mut self.username,
            1 => &mut self.email,
            2 => &mut self.password,
            _ => &mut self.confirm_password,
        }
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            0 => Some(&self.username),
            1 => Some(&self.email),
            2 => Some(&self.password),
            3 => Some(&self.confirm_password),
            _ => None,
        }
    }
}
