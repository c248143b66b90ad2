use validator::validate_email;

use crate::domain::{Field, FieldError, RegistrationInput, RegistrationValidator};

// Default registration rules. Every field is checked; each field reports
// at most its first failing rule.
#[derive(Clone, Debug)]
pub struct RegisterSchema {
    pub name_min_len: usize,
    pub password_min_len: usize,
}

impl Default for RegisterSchema {
    fn default() -> Self {
        Self {
            name_min_len: 3,
            password_min_len: 5,
        }
    }
}

impl RegisterSchema {
    fn check_name(&self, name: &str) -> Option<String> {
        if name.trim().is_empty() {
            return Some("Name is required".to_string());
        }
        if name.trim().chars().count() < self.name_min_len {
            return Some(format!(
                "Name must be at least {} characters",
                self.name_min_len
            ));
        }
        None
    }

    fn check_email(&self, email: &str) -> Option<String> {
        if email.trim().is_empty() {
            return Some("Email is required".to_string());
        }
        if !validate_email(email) {
            return Some("Invalid email address".to_string());
        }
        None
    }

    fn check_password(&self, password: &str) -> Option<String> {
        if password.is_empty() {
            return Some("Password is required".to_string());
        }
        if password.chars().count() < self.password_min_len {
            return Some(format!(
                "Password must be at least {} characters",
                self.password_min_len
            ));
        }
        None
    }

    fn check_confirmation(&self, password: &str, confirmation: &str) -> Option<String> {
        if confirmation.is_empty() {
            return Some("Confirm password is required".to_string());
        }
        if password != confirmation {
            return Some("Passwords must match".to_string());
        }
        None
    }
}

impl RegistrationValidator for RegisterSchema {
    fn validate(&self, input: &RegistrationInput) -> Vec<FieldError> {
        [
            (Field::Name, self.check_name(&input.name)),
            (Field::Email, self.check_email(&input.email)),
            (Field::Password, self.check_password(&input.password)),
            (
                Field::ConfirmPassword,
                self.check_confirmation(&input.password, &input.confirm_password),
            ),
        ]
        .into_iter()
        .filter_map(|(field, message)| message.map(|message| FieldError::new(field, message)))
        .collect()
    }
}
