//! Calendar date validation functions

use chrono::{Months, NaiveDate};

/// Format accepted for dates supplied as text
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses an ISO `YYYY-MM-DD` date
pub fn parse_iso_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, ISO_DATE_FORMAT).ok()
}

/// Subtracts whole years from `today`, keeping month and day
///
/// A leap day with no counterpart in the target year clamps to Feb 28.
/// Returns `None` only when the result falls outside chrono's range.
pub fn years_before(today: NaiveDate, years: u32) -> Option<NaiveDate> {
    today.checked_sub_months(Months::new(years.checked_mul(12)?))
}

/// Inclusive date window check
pub fn is_within_window(date: NaiveDate, earliest: NaiveDate, latest: NaiveDate) -> bool {
    date >= earliest && date <= latest
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_iso_date() {
        assert_eq!(parse_iso_date("2000-01-31"), Some(ymd(2000, 1, 31)));
        assert_eq!(parse_iso_date("2000-02-30"), None);
        assert_eq!(parse_iso_date("31/01/2000"), None);
        assert_eq!(parse_iso_date(""), None);
    }

    #[rstest]
    #[case(ymd(2026, 10, 18), 10, ymd(2016, 10, 18))]
    #[case(ymd(2026, 10, 18), 95, ymd(1931, 10, 18))]
    #[case(ymd(2024, 2, 29), 1, ymd(2023, 2, 28))]
    #[case(ymd(2024, 2, 29), 4, ymd(2020, 2, 29))]
    fn test_years_before(#[case] today: NaiveDate, #[case] years: u32, #[case] expected: NaiveDate) {
        assert_eq!(years_before(today, years), Some(expected));
    }

    #[test]
    fn test_window_is_inclusive() {
        let today = ymd(2026, 10, 18);
        let earliest = years_before(today, 95).unwrap();
        let latest = years_before(today, 10).unwrap();

        assert!(is_within_window(ymd(2016, 10, 18), earliest, latest));
        assert!(is_within_window(ymd(1931, 10, 18), earliest, latest));
        assert!(is_within_window(ymd(2001, 10, 18), earliest, latest));

        assert!(!is_within_window(ymd(2016, 10, 19), earliest, latest));
        assert!(!is_within_window(ymd(1931, 10, 17), earliest, latest));
    }
}
