//! Email capture for the result gate.

use std::sync::OnceLock;

use regex::Regex;

/// `local@domain.tld`: no whitespace, a single `@`, at least one `.` after it.
const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

fn email_regex() -> &'static Regex {
    static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
    EMAIL_REGEX.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern is valid"))
}

/// Returns `true` if `s` has the shape of an email address.
pub fn is_valid_email(s: &str) -> bool {
    email_regex().is_match(s)
}

/// The email input together with its derived validity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmailField {
    raw: String,
    is_valid: bool,
}

impl EmailField {
    pub fn new(raw: impl Into<String>) -> Self {
        let mut field = Self::default();
        field.set(raw);
        field
    }

    /// Replaces the text and recomputes validity.
    pub fn set(
        &mut self,
        raw: impl Into<String>,
    ) {
        self.raw = raw.into();
        self.is_valid = is_valid_email(&self.raw);
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn is_valid(&self) -> bool {
        self.is_valid
    }
}
