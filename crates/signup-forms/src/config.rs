// File: src/config.rs
// Purpose: Registration rule configuration parsed from signup.toml

use crate::error::SchemaError;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Registration schema configuration
///
/// Every value defaults to the standard registration rules, so an absent or
/// empty file yields the stock schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct RegistrationConfig {
    #[serde(default)]
    pub contact: ContactConfig,

    #[serde(default)]
    pub age: AgeConfig,

    #[serde(default)]
    pub birthdate: BirthdateConfig,

    #[serde(default)]
    pub choices: ChoicesConfig,

    #[serde(default)]
    pub messages: MessagesConfig,
}

/// Exact lengths for phone and national ID numbers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactConfig {
    #[serde(default = "default_phone_length")]
    pub phone_length: usize,

    #[serde(default = "default_id_number_length")]
    pub id_number_length: usize,
}

/// Inclusive age range
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgeConfig {
    #[serde(default = "default_min_age")]
    pub min: i64,

    #[serde(default = "default_max_age")]
    pub max: i64,
}

/// Birthdate window in whole years before today
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BirthdateConfig {
    #[serde(default = "default_min_years")]
    pub min_years: u32,

    #[serde(default = "default_max_years")]
    pub max_years: u32,
}

/// Allowed values for select fields, matched case-sensitively
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChoicesConfig {
    #[serde(default = "default_genders")]
    pub genders: Vec<String>,

    #[serde(default = "default_countries")]
    pub countries: Vec<String>,
}

/// Static messages shown by the presentation layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessagesConfig {
    #[serde(default = "default_firstname_message")]
    pub firstname: String,

    #[serde(default = "default_lastname_message")]
    pub lastname: String,

    #[serde(default = "default_email_message")]
    pub email: String,

    #[serde(default = "default_phone_message")]
    pub phone: String,

    #[serde(default = "default_idnumber_message")]
    pub idnumber: String,

    #[serde(default = "default_age_invalid_message")]
    pub age_invalid: String,

    #[serde(default = "default_age_range_message")]
    pub age_range: String,

    #[serde(default = "default_gender_message")]
    pub gender: String,

    #[serde(default = "default_country_message")]
    pub country: String,

    #[serde(default = "default_birthdate_invalid_message")]
    pub birthdate_invalid: String,

    #[serde(default = "default_birthdate_range_message")]
    pub birthdate_range: String,

    #[serde(default = "default_password_message")]
    pub password: String,

    #[serde(default = "default_confirmpassword_message")]
    pub confirmpassword: String,

    #[serde(default = "default_password_mismatch_message")]
    pub password_mismatch: String,
}

// Default values
fn default_phone_length() -> usize {
    10
}

fn default_id_number_length() -> usize {
    13
}

fn default_min_age() -> i64 {
    10
}

fn default_max_age() -> i64 {
    95
}

fn default_min_years() -> u32 {
    10
}

fn default_max_years() -> u32 {
    95
}

fn default_genders() -> Vec<String> {
    vec![
        "Male".to_string(),
        "Female".to_string(),
        "Non-binary".to_string(),
        "Prefer not to say".to_string(),
    ]
}

fn default_countries() -> Vec<String> {
    vec![
        "Thailand".to_string(),
        "Russia".to_string(),
        "China".to_string(),
        "North Korea".to_string(),
    ]
}

fn default_firstname_message() -> String {
    "First name is required".to_string()
}

fn default_lastname_message() -> String {
    "Last name is required".to_string()
}

fn default_email_message() -> String {
    "Invalid email address".to_string()
}

fn default_phone_message() -> String {
    "Phone number must be exactly 10 characters".to_string()
}

fn default_idnumber_message() -> String {
    "ID number must be exactly 13 characters".to_string()
}

fn default_age_invalid_message() -> String {
    "Age must be a whole number".to_string()
}

fn default_age_range_message() -> String {
    "Age must be between 10 and 95".to_string()
}

fn default_gender_message() -> String {
    "Please select a gender".to_string()
}

fn default_country_message() -> String {
    "Please select a country".to_string()
}

fn default_birthdate_invalid_message() -> String {
    "Please enter a valid date".to_string()
}

fn default_birthdate_range_message() -> String {
    "You must be between 10 and 95 years old".to_string()
}

fn default_password_message() -> String {
    "Password must contain at least one lowercase letter, one uppercase letter and one digit"
        .to_string()
}

fn default_confirmpassword_message() -> String {
    default_password_message()
}

fn default_password_mismatch_message() -> String {
    "Passwords don't match".to_string()
}

// Default implementations
impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            phone_length: default_phone_length(),
            id_number_length: default_id_number_length(),
        }
    }
}

impl Default for AgeConfig {
    fn default() -> Self {
        Self {
            min: default_min_age(),
            max: default_max_age(),
        }
    }
}

impl Default for BirthdateConfig {
    fn default() -> Self {
        Self {
            min_years: default_min_years(),
            max_years: default_max_years(),
        }
    }
}

impl Default for ChoicesConfig {
    fn default() -> Self {
        Self {
            genders: default_genders(),
            countries: default_countries(),
        }
    }
}

impl Default for MessagesConfig {
    fn default() -> Self {
        Self {
            firstname: default_firstname_message(),
            lastname: default_lastname_message(),
            email: default_email_message(),
            phone: default_phone_message(),
            idnumber: default_idnumber_message(),
            age_invalid: default_age_invalid_message(),
            age_range: default_age_range_message(),
            gender: default_gender_message(),
            country: default_country_message(),
            birthdate_invalid: default_birthdate_invalid_message(),
            birthdate_range: default_birthdate_range_message(),
            password: default_password_message(),
            confirmpassword: default_confirmpassword_message(),
            password_mismatch: default_password_mismatch_message(),
        }
    }
}

impl RegistrationConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // If file doesn't exist or is empty, return default config
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: RegistrationConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        config
            .validate()
            .with_context(|| format!("Invalid registration rules in {:?}", path))?;

        Ok(config)
    }

    /// Load configuration from default path (./signup.toml)
    pub fn load_default() -> Result<Self> {
        Self::load("signup.toml")
    }

    /// Reject bounds and choice lists no input could satisfy
    pub fn validate(&self) -> Result<(), SchemaError> {
        if self.age.min > self.age.max {
            return Err(SchemaError::InvalidBounds {
                field: "age".to_string(),
                min: self.age.min,
                max: self.age.max,
            });
        }

        if self.birthdate.min_years > self.birthdate.max_years {
            return Err(SchemaError::InvalidBounds {
                field: "birthdate".to_string(),
                min: i64::from(self.birthdate.min_years),
                max: i64::from(self.birthdate.max_years),
            });
        }

        if self.choices.genders.is_empty() {
            return Err(SchemaError::EmptyChoices("gender".to_string()));
        }

        if self.choices.countries.is_empty() {
            return Err(SchemaError::EmptyChoices("country".to_string()));
        }

        Ok(())
    }
}
