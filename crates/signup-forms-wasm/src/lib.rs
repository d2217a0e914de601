//! Signup-Forms WASM
//!
//! WebAssembly bindings for the registration schema.
//! The browser form calls these on submit and on every field change; the
//! returned error map is rendered next to each input.

use serde::Serialize;
use signup_forms::{registration_schema, FormInput, RegistrationConfig, Schema, ValidationResult};
use signup_forms::predicates as core;
use wasm_bindgen::prelude::*;

/// Set panic hook for better error messages in the browser
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

fn today() -> chrono::NaiveDate {
    chrono::Local::now().date_naive()
}

fn stock_schema() -> Result<Schema, JsValue> {
    registration_schema(&RegistrationConfig::default(), today())
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

fn parse_input(values: JsValue) -> Result<FormInput, JsValue> {
    serde_wasm_bindgen::from_value(values)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse form values: {}", e)))
}

/// Serialize for the browser; maps become plain objects, not ES2015 `Map`s
fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsValue> {
    Ok(value.serialize(&serde_wasm_bindgen::Serializer::json_compatible())?)
}

/// Validate an already parsed form against the stock schema
pub fn validate_input(schema: &Schema, input: &FormInput) -> ValidationResult {
    schema.validate(input)
}

/// Validate the whole registration form
///
/// # Returns
/// Object mapping field name to an array of messages (empty object if valid)
///
/// # Example (JavaScript)
/// ```javascript
/// const errors = validateRegistration({
///     firstname: 'Ann',
///     phone: '12345',
///     // ...
/// });
/// // { phone: ['Phone number must be exactly 10 characters'], ... }
/// ```
#[wasm_bindgen(js_name = validateRegistration)]
pub fn validate_registration(values: JsValue) -> Result<JsValue, JsValue> {
    let input = parse_input(values)?;
    let result = validate_input(&stock_schema()?, &input);
    to_js(&result)
}

/// Validate the form and return only the messages for `field_name`
///
/// Cross-field messages (e.g. password mismatch) are included.
#[wasm_bindgen(js_name = validateRegistrationField)]
pub fn validate_registration_field(field_name: &str, values: JsValue) -> Result<JsValue, JsValue> {
    let input = parse_input(values)?;
    let messages = stock_schema()?.validate_field(field_name, &input);
    to_js(&messages)
}

/// Quick email validation
#[wasm_bindgen(js_name = isValidEmail)]
pub fn is_valid_email_js(email: &str) -> bool {
    core::is_valid_email(email)
}

/// Quick password check; returns the first missing character class
#[wasm_bindgen(js_name = checkPassword)]
pub fn check_password_js(password: &str) -> Option<String> {
    core::validate_char_classes(password, &core::LOWER_UPPER_DIGIT).err()
}
