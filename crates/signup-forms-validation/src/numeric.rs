//! Numeric validation functions

/// Checks that `value` lies in `[min, max]`, both ends inclusive
pub fn is_in_range<T: PartialOrd>(value: T, min: T, max: T) -> bool {
    value >= min && value <= max
}

/// Parses a whole number the way the age field expects it
///
/// Accepts an optional leading sign and ASCII digits only. Surrounding
/// whitespace, decimals and exponents are rejected.
pub fn parse_integer(raw: &str) -> Option<i64> {
    raw.parse::<i64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_range() {
        assert!(is_in_range(10, 10, 95));
        assert!(is_in_range(95, 10, 95));
        assert!(is_in_range(30, 10, 95));
        assert!(!is_in_range(9, 10, 95));
        assert!(!is_in_range(96, 10, 95));
    }

    #[test]
    fn test_parse_integer() {
        assert_eq!(parse_integer("30"), Some(30));
        assert_eq!(parse_integer("-4"), Some(-4));
        assert_eq!(parse_integer("abc"), None);
        assert_eq!(parse_integer("3.5"), None);
        assert_eq!(parse_integer(" 30"), None);
        assert_eq!(parse_integer(""), None);
    }
}
