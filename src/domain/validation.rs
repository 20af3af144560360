use std::sync::LazyLock;

use regex::Regex;

pub const USERNAME_MIN_LENGTH: usize = 3;
pub const USERNAME_MAX_LENGTH: usize = 20;
pub const PASSWORD_MIN_LENGTH: usize = 8;

pub const MSG_INVALID_USERNAME: &str =
    "Username must be 3-20 characters and contain only letters, numbers, and underscores";
pub const MSG_INVALID_EMAIL: &str = "Invalid email format";
pub const MSG_WEAK_PASSWORD: &str = "Password must be at least 8 characters and contain an uppercase letter, a lowercase letter, and a digit";

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$")
        .expect("email pattern is a valid regex")
});

/// Outcome of validating all registration fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub valid: bool,
    pub errors: Vec<String>,
}

pub fn validate_username(username: &str) -> bool {
    let length = username.chars().count();
    (USERNAME_MIN_LENGTH..=USERNAME_MAX_LENGTH).contains(&length)
        && username
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Format check only; deliverability is not checked.
pub fn validate_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

pub fn validate_password(password: &str) -> bool {
    password.chars().count() >= PASSWORD_MIN_LENGTH
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_digit())
}

/// Runs every field check and collects one message per failing field,
/// in username, email, password order.
pub fn validate_registration(username: &str, email: &str, password: &str) -> ValidationResult {
    let checks = [
        (validate_username(username), MSG_INVALID_USERNAME),
        (validate_email(email), MSG_INVALID_EMAIL),
        (validate_password(password), MSG_WEAK_PASSWORD),
    ];

    let errors: Vec<String> = checks
        .into_iter()
        .filter(|(ok, _)| !ok)
        .map(|(_, message)| message.to_string())
        .collect();

    ValidationResult {
        valid: errors.is_empty(),
        errors,
    }
}
