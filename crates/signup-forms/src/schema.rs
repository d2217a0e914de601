// File: src/schema.rs
// Purpose: Schema evaluator - coerce, check constraints, refine

use crate::error::{FieldError, SchemaError, ViolationKind};
use crate::field::FieldSpec;
use crate::record::Record;
use crate::refinement::CrossFieldRefinement;
use crate::result::ValidationResult;
use crate::value::{FormInput, RawValue};
use std::collections::HashSet;

/// Output of the coercion pass
#[derive(Debug, Clone, Default)]
pub struct CoercionPass {
    /// Typed values of the fields that coerced
    pub record: Record,
    /// One error per field that didn't, in field order
    pub errors: Vec<FieldError>,
}

/// Ordered field specs plus ordered cross-field refinements
///
/// Immutable once built; validating never mutates the schema, so one
/// instance can serve any number of independent calls.
#[derive(Debug, Clone)]
pub struct Schema {
    fields: Vec<FieldSpec>,
    refinements: Vec<CrossFieldRefinement>,
}

/// Builder for [`Schema`]
#[derive(Debug, Clone, Default)]
pub struct SchemaBuilder {
    fields: Vec<FieldSpec>,
    refinements: Vec<CrossFieldRefinement>,
}

impl SchemaBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, spec: FieldSpec) -> Self {
        self.fields.push(spec);
        self
    }

    pub fn refine(mut self, refinement: CrossFieldRefinement) -> Self {
        self.refinements.push(refinement);
        self
    }

    /// Check field names are unique and every refinement targets a declared field
    pub fn build(self) -> Result<Schema, SchemaError> {
        let mut seen = HashSet::new();
        for spec in &self.fields {
            if !seen.insert(spec.name()) {
                return Err(SchemaError::DuplicateField(spec.name().to_string()));
            }
        }

        if let Some(orphan) = self
            .refinements
            .iter()
            .find(|r| !seen.contains(r.target()))
        {
            return Err(SchemaError::UnknownRefinementTarget(
                orphan.target().to_string(),
            ));
        }

        Ok(Schema {
            fields: self.fields,
            refinements: self.refinements,
        })
    }
}

impl Schema {
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::new()
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name() == name)
    }

    pub fn refinements(&self) -> &[CrossFieldRefinement] {
        &self.refinements
    }

    /// Pass 1: coerce every declared field
    ///
    /// A missing value is coerced as empty text. Failures record the field's
    /// coercion message and leave the field out of the record.
    pub fn coerce(&self, input: &FormInput) -> CoercionPass {
        let empty = RawValue::Text(String::new());
        let mut pass = CoercionPass::default();

        for spec in &self.fields {
            let raw = input.get(spec.name()).unwrap_or(&empty);
            match spec.coerce(raw) {
                Ok(value) => pass.record.insert(spec.name(), value),
                Err(err) => {
                    tracing::trace!(field = spec.name(), error = %err, "coercion failed");
                    pass.errors.push(FieldError::new(
                        spec.name(),
                        spec.coercion_message(),
                        ViolationKind::Coercion,
                    ));
                }
            }
        }

        pass
    }

    /// Pass 2: run constraints of every coerced field, in field then rule order
    pub fn check_constraints(&self, record: &Record) -> Vec<FieldError> {
        self.fields
            .iter()
            .filter_map(|spec| record.get(spec.name()).map(|value| (spec, value)))
            .flat_map(|(spec, value)| {
                spec.violations(value)
                    .into_iter()
                    .map(|message| FieldError::new(spec.name(), message, ViolationKind::Constraint))
                    .collect::<Vec<_>>()
            })
            .collect()
    }

    /// Pass 3: run every cross-field refinement against the record
    pub fn refine(&self, record: &Record) -> Vec<FieldError> {
        self.refinements
            .iter()
            .filter(|r| !r.holds(record))
            .map(|r| FieldError::new(r.target(), r.message(), ViolationKind::CrossField))
            .collect()
    }

    /// Run all three passes and fold them into one report
    ///
    /// Field-level errors come first in field declaration order, then
    /// refinement errors in refinement order. Refinements always run, whatever
    /// the field-level outcome.
    pub fn validate(&self, input: &FormInput) -> ValidationResult {
        let CoercionPass { record, errors } = self.coerce(input);

        let mut field_errors = errors;
        field_errors.extend(self.check_constraints(&record));
        // Stable: a field has either a coercion error or constraint errors
        field_errors.sort_by_key(|e| self.position(&e.path));

        let cross_errors = self.refine(&record);
        let result = ValidationResult::from_errors(field_errors.into_iter().chain(cross_errors));

        tracing::debug!(
            fields = self.fields.len(),
            coerced = record.len(),
            error_count = result.error_count(),
            "validated form"
        );

        result
    }

    /// Messages reported under one path, cross-field ones included
    pub fn validate_field(&self, name: &str, input: &FormInput) -> Vec<String> {
        self.validate(input)
            .get_errors(name)
            .map(<[String]>::to_vec)
            .unwrap_or_default()
    }

    fn position(&self, path: &str) -> usize {
        self.fields
            .iter()
            .position(|f| f.name() == path)
            .unwrap_or(self.fields.len())
    }
}
