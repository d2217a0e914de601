// File: src/error.rs
// Purpose: Violation taxonomy and schema construction errors

use serde::{Deserialize, Serialize};

/// Where a reported error came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    /// The raw value could not be converted to the field's type
    Coercion,
    /// The coerced value failed one of the field's predicates
    Constraint,
    /// A whole-record rule failed
    CrossField,
}

/// One (path, message) pair produced by a validation pass
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub path: String,
    pub message: String,
    pub kind: ViolationKind,
}

impl FieldError {
    pub fn new(path: impl Into<String>, message: impl Into<String>, kind: ViolationKind) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
            kind,
        }
    }
}

/// A schema that can't be built. Programming or configuration mistakes,
/// never user input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    #[error("field `{0}` is declared more than once")]
    DuplicateField(String),

    #[error("refinement reports under undeclared field `{0}`")]
    UnknownRefinementTarget(String),

    #[error("invalid bounds for `{field}`: minimum {min} is greater than maximum {max}")]
    InvalidBounds { field: String, min: i64, max: i64 },

    #[error("no allowed values configured for `{0}`")]
    EmptyChoices(String),

    #[error("a window of {0} years before today falls outside the supported calendar")]
    DateOutOfRange(u32),
}
