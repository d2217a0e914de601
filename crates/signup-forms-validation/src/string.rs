//! String validation functions

/// Required check. Whitespace counts as content; no trimming happens here.
pub fn is_non_empty(s: &str) -> bool {
    !s.is_empty()
}

/// Length check in characters, not bytes
pub fn has_exact_length(s: &str, len: usize) -> bool {
    s.chars().count() == len
}

/// Enum/value restriction, case-sensitive
pub fn is_one_of<S: AsRef<str>>(value: &str, allowed: &[S]) -> bool {
    allowed.iter().any(|a| a.as_ref() == value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_empty() {
        assert!(is_non_empty("Ann"));
        assert!(is_non_empty(" "));
        assert!(!is_non_empty(""));
    }

    #[test]
    fn test_exact_length() {
        assert!(has_exact_length("1234567890", 10));
        assert!(!has_exact_length("12345", 10));
        assert!(!has_exact_length("12345678901", 10));
        // Multi-byte characters count once
        assert!(has_exact_length("ก123456789", 10));
    }

    #[test]
    fn test_enum_variant() {
        let allowed = &["Male", "Female", "Non-binary", "Prefer not to say"];
        assert!(is_one_of("Male", allowed));
        assert!(is_one_of("Prefer not to say", allowed));
        assert!(!is_one_of("male", allowed));
        assert!(!is_one_of("Other", allowed));

        let owned = vec!["Thailand".to_string()];
        assert!(is_one_of("Thailand", &owned));
    }
}
