// File: src/registration.rs
// Purpose: The registration form's rule table

use crate::config::RegistrationConfig;
use crate::error::SchemaError;
use crate::field::FieldSpec;
use crate::refinement::CrossFieldRefinement;
use crate::result::ValidationResult;
use crate::schema::Schema;
use crate::value::FormInput;
use chrono::NaiveDate;
use signup_forms_validation::{
    has_exact_length, has_required_classes, is_in_range, is_non_empty, is_one_of,
    is_valid_email, is_within_window, years_before, LOWER_UPPER_DIGIT,
};

pub const FIRSTNAME: &str = "firstname";
pub const LASTNAME: &str = "lastname";
pub const EMAIL: &str = "email";
pub const PHONE: &str = "phone";
pub const IDNUMBER: &str = "idnumber";
pub const AGE: &str = "age";
pub const GENDER: &str = "gender";
pub const COUNTRY: &str = "country";
pub const BIRTHDATE: &str = "birthdate";
pub const PASSWORD: &str = "password";
pub const CONFIRMPASSWORD: &str = "confirmpassword";

/// Field names in declaration (and report) order
pub const FIELD_NAMES: [&str; 11] = [
    FIRSTNAME,
    LASTNAME,
    EMAIL,
    PHONE,
    IDNUMBER,
    AGE,
    GENDER,
    COUNTRY,
    BIRTHDATE,
    PASSWORD,
    CONFIRMPASSWORD,
];

/// Build the registration schema
///
/// `today` anchors the birthdate window; the window bounds are computed once
/// here, so two schemas built with the same `today` validate identically.
pub fn registration_schema(
    config: &RegistrationConfig,
    today: NaiveDate,
) -> Result<Schema, SchemaError> {
    config.validate()?;

    let earliest = years_before(today, config.birthdate.max_years)
        .ok_or(SchemaError::DateOutOfRange(config.birthdate.max_years))?;
    let latest = years_before(today, config.birthdate.min_years)
        .ok_or(SchemaError::DateOutOfRange(config.birthdate.min_years))?;

    let messages = &config.messages;
    let phone_length = config.contact.phone_length;
    let id_number_length = config.contact.id_number_length;
    let (min_age, max_age) = (config.age.min, config.age.max);
    let genders = config.choices.genders.clone();
    let countries = config.choices.countries.clone();

    Schema::builder()
        .field(FieldSpec::text(FIRSTNAME).text_rule(&messages.firstname, is_non_empty))
        .field(FieldSpec::text(LASTNAME).text_rule(&messages.lastname, is_non_empty))
        .field(FieldSpec::text(EMAIL).text_rule(&messages.email, is_valid_email))
        .field(
            FieldSpec::text(PHONE)
                .text_rule(&messages.phone, move |s| has_exact_length(s, phone_length)),
        )
        .field(
            FieldSpec::text(IDNUMBER)
                .text_rule(&messages.idnumber, move |s| has_exact_length(s, id_number_length)),
        )
        .field(
            FieldSpec::integer(AGE, &messages.age_invalid)
                .integer_rule(&messages.age_range, move |n| is_in_range(n, min_age, max_age)),
        )
        .field(
            FieldSpec::text(GENDER).text_rule(&messages.gender, move |s| is_one_of(s, &genders)),
        )
        .field(
            FieldSpec::text(COUNTRY)
                .text_rule(&messages.country, move |s| is_one_of(s, &countries)),
        )
        .field(
            FieldSpec::date(BIRTHDATE, &messages.birthdate_invalid)
                .date_rule(&messages.birthdate_range, move |d| {
                    is_within_window(d, earliest, latest)
                }),
        )
        .field(
            FieldSpec::text(PASSWORD)
                .text_rule(&messages.password, |s| has_required_classes(s, &LOWER_UPPER_DIGIT)),
        )
        .field(
            FieldSpec::text(CONFIRMPASSWORD).text_rule(&messages.confirmpassword, |s| {
                has_required_classes(s, &LOWER_UPPER_DIGIT)
            }),
        )
        .refine(CrossFieldRefinement::fields_equal(
            PASSWORD,
            CONFIRMPASSWORD,
            CONFIRMPASSWORD,
            &messages.password_mismatch,
        ))
        .build()
}

/// Validate a registration form with the stock rules
pub fn validate_registration(
    input: &FormInput,
    today: NaiveDate,
) -> Result<ValidationResult, SchemaError> {
    let schema = registration_schema(&RegistrationConfig::default(), today)?;
    Ok(schema.validate(input))
}

/// Same as [`validate_registration`], anchored at the local calendar date
pub fn validate_registration_today(input: &FormInput) -> Result<ValidationResult, SchemaError> {
    validate_registration(input, chrono::Local::now().date_naive())
}
