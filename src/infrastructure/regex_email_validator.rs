use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::services::email_validator::EmailValidator;

/// Something, an `@`, something, a dot, something; no whitespace anywhere.
static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

#[derive(Debug, Clone, Copy, Default)]
pub struct RegexEmailValidator;

impl RegexEmailValidator {
    pub fn new() -> Self {
        Self
    }
}

impl EmailValidator for RegexEmailValidator {
    fn is_valid(&self, email: &str) -> bool {
        EMAIL_PATTERN.is_match(email)
    }
}
