// File: src/value.rs
// Purpose: Raw form values as handed over by the presentation layer

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single untyped form value
///
/// Text inputs arrive as strings. Date pickers may hand over a calendar
/// date directly; a date sent as text is parsed during coercion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Text(String),
    Date(NaiveDate),
}

impl RawValue {
    /// Text form of the value, dates rendered as `YYYY-MM-DD`
    pub fn to_text(&self) -> String {
        match self {
            RawValue::Text(s) => s.clone(),
            RawValue::Date(d) => d.format(signup_forms_validation::ISO_DATE_FORMAT).to_string(),
        }
    }
}

impl From<String> for RawValue {
    fn from(s: String) -> Self {
        RawValue::Text(s)
    }
}

impl From<&str> for RawValue {
    fn from(s: &str) -> Self {
        RawValue::Text(s.to_string())
    }
}

impl From<NaiveDate> for RawValue {
    fn from(d: NaiveDate) -> Self {
        RawValue::Date(d)
    }
}

/// Field name -> raw value mapping for one submission attempt
///
/// Values are stored exactly as given; nothing is trimmed or normalized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormInput {
    values: HashMap<String, RawValue>,
}

impl FormInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create from plain text fields
    pub fn from_fields(fields: HashMap<String, String>) -> Self {
        Self {
            values: fields
                .into_iter()
                .map(|(k, v)| (k, RawValue::Text(v)))
                .collect(),
        }
    }

    /// Builder-style insert
    pub fn with(mut self, name: impl Into<String>, value: impl Into<RawValue>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<RawValue>) {
        self.values.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&RawValue> {
        self.values.get(name)
    }

    /// Get a text value; dates are not returned here
    pub fn text(&self, name: &str) -> Option<&str> {
        match self.values.get(name)? {
            RawValue::Text(s) => Some(s.as_str()),
            RawValue::Date(_) => None,
        }
    }

    pub fn date(&self, name: &str) -> Option<NaiveDate> {
        match self.values.get(name)? {
            RawValue::Date(d) => Some(*d),
            RawValue::Text(_) => None,
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>, V: Into<RawValue>> FromIterator<(K, V)> for FormInput {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_fields_keeps_text_verbatim() {
        let mut fields = HashMap::new();
        fields.insert("firstname".to_string(), "  Ann ".to_string());

        let input = FormInput::from_fields(fields);
        assert_eq!(input.text("firstname"), Some("  Ann "));
        assert_eq!(input.len(), 1);
    }

    #[test]
    fn test_date_and_text_accessors() {
        let day = NaiveDate::from_ymd_opt(2001, 5, 4).unwrap();
        let input = FormInput::new().with("birthdate", day).with("age", "25");

        assert_eq!(input.date("birthdate"), Some(day));
        assert_eq!(input.text("birthdate"), None);
        assert_eq!(input.text("age"), Some("25"));
        assert_eq!(input.date("age"), None);
        assert_eq!(input.get("missing"), None);
    }

    #[test]
    fn test_deserialize_from_json_object() {
        let input: FormInput =
            serde_json::from_str(r#"{"firstname":"Ann","birthdate":"2001-05-04"}"#).unwrap();

        assert_eq!(input.text("firstname"), Some("Ann"));
        // JSON strings stay text; the date coercion parses them later
        assert_eq!(input.text("birthdate"), Some("2001-05-04"));
    }

    #[test]
    fn test_date_renders_as_iso_text() {
        let value = RawValue::from(NaiveDate::from_ymd_opt(1999, 12, 1).unwrap());
        assert_eq!(value.to_text(), "1999-12-01");
    }
}
