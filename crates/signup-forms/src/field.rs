// File: src/field.rs
// Purpose: Field specs - coercion plus ordered constraint predicates

use crate::coercion::{Coercion, CoercionError, TypedValue};
use crate::value::RawValue;
use chrono::NaiveDate;
use std::fmt;
use std::sync::Arc;

/// What the presentation layer hands over for a field
///
/// Descriptive only: it tells a form renderer which kind of input widget
/// feeds the field. The evaluator never reads it; whether a raw value is
/// accepted is decided by the field's [`Coercion`] alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawType {
    Text,
    Date,
}

type PredicateFn = dyn Fn(&TypedValue) -> bool + Send + Sync;

/// A pure test over a coerced value, paired with its failure message
#[derive(Clone)]
pub struct Predicate {
    message: String,
    test: Arc<PredicateFn>,
}

impl Predicate {
    pub fn new(
        message: impl Into<String>,
        test: impl Fn(&TypedValue) -> bool + Send + Sync + 'static,
    ) -> Self {
        Self {
            message: message.into(),
            test: Arc::new(test),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn holds(&self, value: &TypedValue) -> bool {
        (self.test)(value)
    }
}

impl fmt::Debug for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Predicate")
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

/// Static description of one form field
#[derive(Debug, Clone)]
pub struct FieldSpec {
    name: String,
    raw_type: RawType,
    coercion: Coercion,
    coercion_message: String,
    constraints: Vec<Predicate>,
}

impl FieldSpec {
    /// Text field with identity coercion
    pub fn text(name: impl Into<String>) -> Self {
        Self::with_coercion(name, RawType::Text, Coercion::Identity, String::new())
    }

    /// Text field parsed as a whole number; `coercion_message` is reported when parsing fails
    pub fn integer(name: impl Into<String>, coercion_message: impl Into<String>) -> Self {
        Self::with_coercion(name, RawType::Text, Coercion::ParseInt, coercion_message)
    }

    /// Date field; `coercion_message` is reported when the value isn't a date
    pub fn date(name: impl Into<String>, coercion_message: impl Into<String>) -> Self {
        Self::with_coercion(name, RawType::Date, Coercion::ParseDate, coercion_message)
    }

    fn with_coercion(
        name: impl Into<String>,
        raw_type: RawType,
        coercion: Coercion,
        coercion_message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            raw_type,
            coercion,
            coercion_message: coercion_message.into(),
            constraints: Vec::new(),
        }
    }

    /// Append a constraint; constraints run in the order they are added
    pub fn constraint(mut self, predicate: Predicate) -> Self {
        self.constraints.push(predicate);
        self
    }

    /// Constraint over the text value. Non-text values fail it.
    pub fn text_rule(
        self,
        message: impl Into<String>,
        test: impl Fn(&str) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.constraint(Predicate::new(message, move |v| {
            v.as_text().is_some_and(|s| test(s))
        }))
    }

    pub fn integer_rule(
        self,
        message: impl Into<String>,
        test: impl Fn(i64) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.constraint(Predicate::new(message, move |v| {
            v.as_integer().is_some_and(|n| test(n))
        }))
    }

    pub fn date_rule(
        self,
        message: impl Into<String>,
        test: impl Fn(NaiveDate) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.constraint(Predicate::new(message, move |v| {
            v.as_date().is_some_and(|d| test(d))
        }))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Widget kind for the presentation layer, see [`RawType`]
    pub fn raw_type(&self) -> RawType {
        self.raw_type
    }

    pub fn coercion(&self) -> Coercion {
        self.coercion
    }

    pub fn coercion_message(&self) -> &str {
        &self.coercion_message
    }

    pub fn constraints(&self) -> &[Predicate] {
        &self.constraints
    }

    pub fn coerce(&self, raw: &RawValue) -> Result<TypedValue, CoercionError> {
        self.coercion.apply(raw)
    }

    /// Messages of every failing constraint, in declaration order
    pub fn violations(&self, value: &TypedValue) -> Vec<&str> {
        self.constraints
            .iter()
            .filter(|p| !p.holds(value))
            .map(Predicate::message)
            .collect()
    }
}
