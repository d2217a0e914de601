// File: src/record.rs
// Purpose: Coerced, typed view of one submission

use crate::coercion::TypedValue;
use chrono::NaiveDate;
use std::collections::HashMap;

/// Typed values for every field that coerced successfully
///
/// Fields whose coercion failed are simply absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    values: HashMap<String, TypedValue>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: TypedValue) {
        self.values.insert(name.into(), value);
    }

    pub fn get(&self, name: &str) -> Option<&TypedValue> {
        self.values.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn text(&self, name: &str) -> Option<&str> {
        self.get(name)?.as_text()
    }

    pub fn integer(&self, name: &str) -> Option<i64> {
        self.get(name)?.as_integer()
    }

    pub fn date(&self, name: &str) -> Option<NaiveDate> {
        self.get(name)?.as_date()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typed_getters() {
        let mut record = Record::new();
        record.insert("age", TypedValue::Integer(30));
        record.insert("firstname", TypedValue::Text("Ann".into()));

        assert_eq!(record.integer("age"), Some(30));
        assert_eq!(record.text("firstname"), Some("Ann"));
        assert_eq!(record.text("age"), None);
        assert_eq!(record.date("birthdate"), None);
        assert!(!record.contains("birthdate"));
        assert_eq!(record.len(), 2);
    }
}
