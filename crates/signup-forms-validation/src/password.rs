//! Password validation functions

/// Character classes a password can be required to contain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    /// ASCII `a-z`
    Lowercase,
    /// ASCII `A-Z`
    Uppercase,
    /// ASCII `0-9`
    Digit,
}

impl CharClass {
    pub fn matches(self, c: char) -> bool {
        match self {
            CharClass::Lowercase => c.is_ascii_lowercase(),
            CharClass::Uppercase => c.is_ascii_uppercase(),
            CharClass::Digit => c.is_ascii_digit(),
        }
    }

    fn describe(self) -> &'static str {
        match self {
            CharClass::Lowercase => "lowercase letter",
            CharClass::Uppercase => "uppercase letter",
            CharClass::Digit => "digit",
        }
    }
}

/// The classes used by the registration password rule
pub const LOWER_UPPER_DIGIT: [CharClass; 3] =
    [CharClass::Lowercase, CharClass::Uppercase, CharClass::Digit];

/// True when every class appears at least once, in any position
pub fn has_required_classes(password: &str, classes: &[CharClass]) -> bool {
    classes
        .iter()
        .all(|class| password.chars().any(|c| class.matches(c)))
}

/// Same check as [`has_required_classes`], reporting the first missing class
pub fn validate_char_classes(password: &str, classes: &[CharClass]) -> Result<(), String> {
    classes
        .iter()
        .find(|class| !password.chars().any(|c| class.matches(c)))
        .map(|class| Err(format!("Password must contain at least one {}", class.describe())))
        .unwrap_or(Ok(()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_classes_present() {
        assert!(has_required_classes("Abc12345", &LOWER_UPPER_DIGIT));
        assert!(has_required_classes("1aB", &LOWER_UPPER_DIGIT));
        assert!(has_required_classes("9zzzzZ", &LOWER_UPPER_DIGIT));
    }

    #[test]
    fn test_missing_classes() {
        assert!(!has_required_classes("abcdefgh", &LOWER_UPPER_DIGIT));
        assert!(!has_required_classes("ABCDEFG1", &LOWER_UPPER_DIGIT));
        assert!(!has_required_classes("abcDEFgh", &LOWER_UPPER_DIGIT));
        assert!(!has_required_classes("", &LOWER_UPPER_DIGIT));
        // Non-ASCII letters do not satisfy the ASCII classes
        assert!(!has_required_classes("ÄÖÜ123abc", &LOWER_UPPER_DIGIT));
    }

    #[test]
    fn test_first_missing_class_reported() {
        assert!(validate_char_classes("Abc12345", &LOWER_UPPER_DIGIT).is_ok());
        assert_eq!(
            validate_char_classes("abcdefgh", &LOWER_UPPER_DIGIT),
            Err("Password must contain at least one uppercase letter".to_string())
        );
        assert_eq!(
            validate_char_classes("Abcdefgh", &LOWER_UPPER_DIGIT),
            Err("Password must contain at least one digit".to_string())
        );
    }
}
