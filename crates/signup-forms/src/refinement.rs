// File: src/refinement.rs
// Purpose: Whole-record rules reported under a single field path

use crate::record::Record;
use std::fmt;
use std::sync::Arc;

type RefinementFn = dyn Fn(&Record) -> bool + Send + Sync;

/// A rule over the full coerced record
///
/// The target path is where the error shows up; it does not have to be one
/// of the fields the rule reads.
#[derive(Clone)]
pub struct CrossFieldRefinement {
    target: String,
    message: String,
    test: Arc<RefinementFn>,
}

impl CrossFieldRefinement {
    pub fn new(
        target: impl Into<String>,
        message: impl Into<String>,
        test: impl Fn(&Record) -> bool + Send + Sync + 'static,
    ) -> Self {
        Self {
            target: target.into(),
            message: message.into(),
            test: Arc::new(test),
        }
    }

    /// Two text fields must hold identical strings; reported under `target`
    pub fn fields_equal(
        left: impl Into<String>,
        right: impl Into<String>,
        target: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        let left = left.into();
        let right = right.into();
        Self::new(target, message, move |record| {
            record.text(&left) == record.text(&right)
        })
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn holds(&self, record: &Record) -> bool {
        (self.test)(record)
    }
}

impl fmt::Debug for CrossFieldRefinement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CrossFieldRefinement")
            .field("target", &self.target)
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coercion::TypedValue;

    fn record(password: &str, confirm: &str) -> Record {
        let mut record = Record::new();
        record.insert("password", TypedValue::Text(password.into()));
        record.insert("confirmpassword", TypedValue::Text(confirm.into()));
        record
    }

    #[test]
    fn test_fields_equal() {
        let rule = CrossFieldRefinement::fields_equal(
            "password",
            "confirmpassword",
            "confirmpassword",
            "Passwords don't match",
        );

        assert!(rule.holds(&record("Abc12345", "Abc12345")));
        assert!(!rule.holds(&record("Abc12345", "Abc99999")));
        // Exact string comparison, no case folding
        assert!(!rule.holds(&record("abc", "ABC")));
        assert_eq!(rule.target(), "confirmpassword");
    }
}
