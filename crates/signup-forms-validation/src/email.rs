//! Email validation functions

use once_cell::sync::Lazy;
use regex::Regex;

// Dot-atom local part, dotted hostname labels, alphabetic TLD of 2+ chars
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+(\.[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+)*@([A-Za-z0-9]([A-Za-z0-9-]*[A-Za-z0-9])?\.)+[A-Za-z]{2,}$",
    )
    .expect("email pattern is a valid regex")
});

/// Validates email shape
///
/// Checks for:
/// - Exactly one '@' with content on both sides
/// - Local part made of RFC 5322 atom characters, no leading, trailing or doubled dots
/// - Domain of dotted labels that don't start or end with a hyphen
/// - Alphabetic TLD of at least 2 characters
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}
