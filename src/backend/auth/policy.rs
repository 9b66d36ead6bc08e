//! Account rules applied at registration, after the duplicate checks and
//! before the password is hashed.

use crate::shared::validation::is_email;

const USERNAME_EXTRA_CHARS: &str = "-._@+";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserPolicy {
    pub min_password_length: usize,
}

impl Default for UserPolicy {
    fn default() -> Self {
        Self {
            min_password_length: 6,
        }
    }
}

impl UserPolicy {
    /// Returns every violated rule as a display message; empty means valid.
    pub fn check(&self, username: &str, email: &str, password: &str) -> Vec<String> {
        let mut errors = Vec::new();

        if !is_valid_username(username) {
            errors.push(format!(
                "Username '{}' is invalid, can only contain letters or digits.",
                username
            ));
        }

        if !is_email(email) {
            errors.push(format!("Email '{}' is invalid.", email));
        }

        if password.chars().count() < self.min_password_length {
            errors.push(format!(
                "Passwords must be at least {} characters.",
                self.min_password_length
            ));
        }

        errors
    }
}

/// Usernames are ASCII letters, digits and `-._@+`
fn is_valid_username(username: &str) -> bool {
    !username.is_empty()
        && username
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || USERNAME_EXTRA_CHARS.contains(c))
}
