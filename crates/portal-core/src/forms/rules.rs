//! Field validation rules shared by the login and registration forms.

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\S+@\S+\.\S+$").expect("email regex"));

// Loose on purpose: digits with optional +, spaces, dashes and parens.
static PHONE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[\d\s\-()]{10,}$").expect("phone regex"));

static WEBSITE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^https?://.+").expect("website regex"));

/// Minimum password length for signing in.
pub const LOGIN_PASSWORD_MIN: usize = 6;

/// Minimum password length for creating an account.
pub const REGISTRATION_PASSWORD_MIN: usize = 8;

/// `local@domain.tld` shape; anything fancier is the backend's problem.
pub fn valid_email(value: &str) -> bool {
    EMAIL.is_match(value)
}

pub fn valid_phone(value: &str) -> bool {
    PHONE.is_match(value)
}

pub fn valid_website(value: &str) -> bool {
    WEBSITE.is_match(value)
}

/// Registration passwords additionally need upper, lower and a digit.
pub fn has_required_character_classes(value: &str) -> bool {
    value.chars().any(|c| c.is_ascii_uppercase())
        && value.chars().any(|c| c.is_ascii_lowercase())
        && value.chars().any(|c| c.is_ascii_digit())
}
