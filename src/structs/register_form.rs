use serde::Deserialize;
use crate::config::constants::{MAX_USERNAME_LENGTH, MIN_PASSWORD_LENGTH, MIN_USERNAME_LENGTH};
use crate::structs::validation_result::ValidationResult;

/// Body of `POST /account/register`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct RegisterForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub confirm_password: String,
}

impl RegisterForm {
    /// Checks every field and reports all problems at once.
    pub fn validate(&self) -> ValidationResult {
        let mut errors = Vec::new();

        let username = self.username.trim();
        let username_length = username.chars().count();
        if username.is_empty() {
            errors.push("Username is required".to_string());
        } else if !(MIN_USERNAME_LENGTH..=MAX_USERNAME_LENGTH).contains(&username_length) {
            errors.push(format!(
                "Username must be between {} and {} characters",
                MIN_USERNAME_LENGTH, MAX_USERNAME_LENGTH
            ));
        } else if !username.chars().all(|c| c.is_alphanumeric() || matches!(c, '_' | '-' | '.')) {
            errors.push("Username may only contain letters, digits, '_', '-' and '.'".to_string());
        }

        let email = self.email.trim();
        if email.is_empty() {
            errors.push("Email is required".to_string());
        } else if !is_plausible_email(email) {
            errors.push("Email address is not valid".to_string());
        }

        if self.password.chars().count() < MIN_PASSWORD_LENGTH {
            errors.push(format!("Password must be at least {} characters", MIN_PASSWORD_LENGTH));
        }

        if self.password != self.confirm_password {
            errors.push("Passwords do not match".to_string());
        }

        ValidationResult::from_errors(errors)
    }
}

fn is_plausible_email(email: &str) -> bool {
    let mut parts = email.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };

    !local.is_empty()
        && !email.chars().any(char::is_whitespace)
        && domain.split('.').count() >= 2
        && domain.split('.').all(|label| !label.is_empty())
}
