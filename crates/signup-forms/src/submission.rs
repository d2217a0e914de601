// File: src/submission.rs
// Purpose: Submit gate used by the presentation layer

use crate::result::ValidationResult;
use crate::schema::Schema;
use crate::value::{FormInput, RawValue};

/// Acknowledgment returned when a submission is accepted
pub const SUBMITTED_ACK: &str = "Registration submitted";

/// Result of a submission attempt
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionOutcome {
    /// Validation passed; the stored input has been reset
    Submitted { acknowledgment: String },
    /// Validation failed; the stored input is kept for correction
    Invalid(ValidationResult),
}

impl SubmissionOutcome {
    /// Check if the submission went through
    pub fn is_submitted(&self) -> bool {
        matches!(self, SubmissionOutcome::Submitted { .. })
    }

    /// Extract the errors if validation failed
    pub fn errors(self) -> Option<ValidationResult> {
        match self {
            SubmissionOutcome::Submitted { .. } => None,
            SubmissionOutcome::Invalid(result) => Some(result),
        }
    }
}

/// Form state bound to a schema
///
/// Holds the current input between field changes. Each `validate` call is
/// independent of earlier ones.
#[derive(Debug, Clone)]
pub struct Submission {
    schema: Schema,
    input: FormInput,
}

impl Submission {
    /// Bind a form to `schema`
    ///
    /// The schema is used as built. A registration schema fixes its birthdate
    /// window at build time, so a form left open past midnight keeps the old
    /// window until [`Submission::set_schema`] swaps in a fresh one.
    pub fn new(schema: Schema) -> Self {
        Self {
            schema,
            input: FormInput::new(),
        }
    }

    /// Record a field change
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<RawValue>) {
        self.input.insert(name, value);
    }

    /// Replace the schema, keeping the current input
    pub fn set_schema(&mut self, schema: Schema) {
        self.schema = schema;
    }

    pub fn input(&self) -> &FormInput {
        &self.input
    }

    pub fn validate(&self) -> ValidationResult {
        self.schema.validate(&self.input)
    }

    /// Messages for one field after it changed
    pub fn field_errors(&self, name: &str) -> Vec<String> {
        self.schema.validate_field(name, &self.input)
    }

    /// Validate and, only when valid, acknowledge and reset the input
    pub fn attempt(&mut self) -> SubmissionOutcome {
        let result = self.validate();
        if result.has_errors() {
            tracing::debug!(error_count = result.error_count(), "submission blocked");
            return SubmissionOutcome::Invalid(result);
        }

        self.input = FormInput::new();
        SubmissionOutcome::Submitted {
            acknowledgment: SUBMITTED_ACK.to_string(),
        }
    }
}
