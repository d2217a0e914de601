// File: src/result.rs
// Purpose: Aggregated, path-keyed error report of one validation pass

use crate::error::FieldError;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Field path -> ordered error messages
///
/// Paths keep the order in which they first received an error; messages under
/// a path keep rule order. An empty result means the input is valid, and a
/// path that is absent is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationResult {
    errors: IndexMap<String, Vec<String>>,
}

impl ValidationResult {
    /// Create a successful validation result
    pub fn success() -> Self {
        Self::default()
    }

    /// Fold field errors in order
    pub fn from_errors(errors: impl IntoIterator<Item = FieldError>) -> Self {
        let mut result = Self::default();
        for error in errors {
            result.push(error.path, error.message);
        }
        result
    }

    pub(crate) fn push(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.errors
            .entry(path.into())
            .or_default()
            .push(message.into());
    }

    /// Append another report after this one
    pub fn merge(mut self, other: ValidationResult) -> Self {
        for (path, messages) in other.errors {
            self.errors.entry(path).or_default().extend(messages);
        }
        self
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Check if there are any errors
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Check if a specific field has errors
    pub fn has_error(&self, path: &str) -> bool {
        self.errors.contains_key(path)
    }

    /// Get first error for a specific field
    pub fn get_error(&self, path: &str) -> Option<&str> {
        self.errors
            .get(path)
            .and_then(|messages| messages.first())
            .map(String::as_str)
    }

    /// Get all errors for a specific field
    pub fn get_errors(&self, path: &str) -> Option<&[String]> {
        self.errors.get(path).map(Vec::as_slice)
    }

    /// Paths with errors, in report order
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.errors.keys().map(String::as_str)
    }

    /// Total number of messages across all paths
    pub fn error_count(&self) -> usize {
        self.errors.values().map(Vec::len).sum()
    }

    pub fn errors(&self) -> &IndexMap<String, Vec<String>> {
        &self.errors
    }

    /// `Ok(())` when valid, otherwise the error map
    pub fn into_result(self) -> Result<(), IndexMap<String, Vec<String>>> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self.errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ViolationKind;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_success_is_valid() {
        let result = ValidationResult::success();
        assert!(result.is_valid());
        assert!(!result.has_errors());
        assert_eq!(result.error_count(), 0);
        assert_eq!(result.into_result(), Ok(()));
    }

    #[test]
    fn test_from_errors_groups_by_path_in_order() {
        let result = ValidationResult::from_errors(vec![
            FieldError::new("phone", "wrong length", ViolationKind::Constraint),
            FieldError::new("age", "not a number", ViolationKind::Coercion),
            FieldError::new("phone", "second", ViolationKind::Constraint),
        ]);

        assert_eq!(result.paths().collect::<Vec<_>>(), vec!["phone", "age"]);
        assert_eq!(
            result.get_errors("phone"),
            Some(&["wrong length".to_string(), "second".to_string()][..])
        );
        assert_eq!(result.get_error("age"), Some("not a number"));
        assert_eq!(result.get_error("email"), None);
        assert_eq!(result.error_count(), 3);
    }

    #[test]
    fn test_merge_appends() {
        let first = ValidationResult::from_errors(vec![FieldError::new(
            "confirmpassword",
            "shape",
            ViolationKind::Constraint,
        )]);
        let second = ValidationResult::from_errors(vec![FieldError::new(
            "confirmpassword",
            "mismatch",
            ViolationKind::CrossField,
        )]);

        let merged = first.merge(second);
        assert_eq!(
            merged.get_errors("confirmpassword"),
            Some(&["shape".to_string(), "mismatch".to_string()][..])
        );
    }

    #[test]
    fn test_serializes_as_plain_map() {
        let result = ValidationResult::from_errors(vec![FieldError::new(
            "phone",
            "Phone number must be exactly 10 characters",
            ViolationKind::Constraint,
        )]);

        let json = serde_json::to_string(&result).unwrap();
        assert_eq!(
            json,
            r#"{"phone":["Phone number must be exactly 10 characters"]}"#
        );
    }
}
