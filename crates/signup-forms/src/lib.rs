// signup-forms - registration form validation
// Declarative field rules, typed coercion and cross-field refinements
// folded into one path-keyed error report.

pub mod coercion;
pub mod config;
pub mod error;
pub mod field;
pub mod record;
pub mod refinement;
pub mod registration;
pub mod result;
pub mod schema;
pub mod submission;
pub mod value;

// Re-export core types
pub use coercion::{Coercion, CoercionError, TypedValue};
pub use config::RegistrationConfig;
pub use error::{FieldError, SchemaError, ViolationKind};
pub use field::{FieldSpec, Predicate, RawType};
pub use record::Record;
pub use refinement::CrossFieldRefinement;
pub use registration::{
    registration_schema, validate_registration, validate_registration_today,
};
pub use result::ValidationResult;
pub use schema::{CoercionPass, Schema, SchemaBuilder};
pub use submission::{Submission, SubmissionOutcome};
pub use value::{FormInput, RawValue};

// Re-export the predicate library for custom schemas
pub use signup_forms_validation as predicates;
