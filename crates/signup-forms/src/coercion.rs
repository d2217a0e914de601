// File: src/coercion.rs
// Purpose: Raw value -> typed value conversion

use crate::value::RawValue;
use chrono::NaiveDate;
use signup_forms_validation::{parse_integer, parse_iso_date};

/// How a field's raw value becomes a typed value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coercion {
    /// Keep the text as-is
    Identity,
    /// Whole number, see [`signup_forms_validation::parse_integer`]
    ParseInt,
    /// Calendar date, either given directly or as `YYYY-MM-DD` text
    ParseDate,
}

/// A coerced value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypedValue {
    Text(String),
    Integer(i64),
    Date(NaiveDate),
}

impl TypedValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            TypedValue::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            TypedValue::Integer(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            TypedValue::Date(d) => Some(*d),
            _ => None,
        }
    }
}

/// Why a raw value could not be coerced
///
/// Never surfaced to the user directly: the evaluator reports the field's
/// own coercion message instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoercionError {
    #[error("`{0}` is not a whole number")]
    NotAnInteger(String),

    #[error("`{0}` is not a calendar date")]
    NotADate(String),
}

impl Coercion {
    /// Coerce a raw value. Total: every input yields a value or an error.
    pub fn apply(self, raw: &RawValue) -> Result<TypedValue, CoercionError> {
        match (self, raw) {
            (Coercion::Identity, raw) => Ok(TypedValue::Text(raw.to_text())),
            (Coercion::ParseInt, RawValue::Text(s)) => parse_integer(s)
                .map(TypedValue::Integer)
                .ok_or_else(|| CoercionError::NotAnInteger(s.clone())),
            (Coercion::ParseInt, raw @ RawValue::Date(_)) => {
                Err(CoercionError::NotAnInteger(raw.to_text()))
            }
            (Coercion::ParseDate, RawValue::Date(d)) => Ok(TypedValue::Date(*d)),
            (Coercion::ParseDate, RawValue::Text(s)) => parse_iso_date(s)
                .map(TypedValue::Date)
                .ok_or_else(|| CoercionError::NotADate(s.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_keeps_text() {
        let raw = RawValue::from(" Ann ");
        assert_eq!(
            Coercion::Identity.apply(&raw),
            Ok(TypedValue::Text(" Ann ".to_string()))
        );
    }

    #[test]
    fn test_parse_int() {
        assert_eq!(
            Coercion::ParseInt.apply(&RawValue::from("30")),
            Ok(TypedValue::Integer(30))
        );
        assert_eq!(
            Coercion::ParseInt.apply(&RawValue::from("abc")),
            Err(CoercionError::NotAnInteger("abc".to_string()))
        );
        assert!(Coercion::ParseInt.apply(&RawValue::from("")).is_err());
    }

    #[test]
    fn test_parse_date() {
        let day = NaiveDate::from_ymd_opt(2001, 2, 3).unwrap();
        assert_eq!(
            Coercion::ParseDate.apply(&RawValue::Date(day)),
            Ok(TypedValue::Date(day))
        );
        assert_eq!(
            Coercion::ParseDate.apply(&RawValue::from("2001-02-03")),
            Ok(TypedValue::Date(day))
        );
        assert_eq!(
            Coercion::ParseDate.apply(&RawValue::from("yesterday")),
            Err(CoercionError::NotADate("yesterday".to_string()))
        );
    }

    #[test]
    fn test_typed_accessors() {
        assert_eq!(TypedValue::Integer(4).as_integer(), Some(4));
        assert_eq!(TypedValue::Integer(4).as_text(), None);
        assert_eq!(TypedValue::Text("x".into()).as_date(), None);
    }
}
