//! Field validation for package intake and shipment request forms
//!
//! Validators return `None` when the value is acceptable, otherwise the
//! message shown next to the field.

use serde::Serialize;
use std::collections::BTreeMap;

/// Heaviest single package accepted at intake, in kilograms
pub const MAX_PACKAGE_WEIGHT_KG: f64 = 1000.0;

const MIN_PHONE_DIGITS: usize = 7;
const MAX_PHONE_DIGITS: usize = 15;
const MIN_TRACKING_LENGTH: usize = 6;
const MAX_TRACKING_LENGTH: usize = 40;

pub fn validate_required(field: &str, value: &str) -> Option<String> {
    if value.trim().is_empty() {
        Some(format!("{field} is required"))
    } else {
        None
    }
}

pub fn is_valid_email(value: &str) -> bool {
    let value = value.trim();
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => {
            !host.is_empty()
                && !host.starts_with('.')
                && !host.ends_with('.')
                && tld.len() >= 2
                && tld.chars().all(|c| c.is_ascii_alphabetic())
        }
        None => false,
    }
}

pub fn validate_email(value: &str) -> Option<String> {
    if is_valid_email(value) {
        None
    } else {
        Some("Enter a valid email address".to_string())
    }
}

/// Digits with optional leading `+`, spaces, dashes, dots and parentheses
pub fn is_valid_phone(value: &str) -> bool {
    let value = value.trim();
    let body = value.strip_prefix('+').unwrap_or(value);
    if !body
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '-' | '.' | '(' | ')'))
    {
        return false;
    }
    let digits = body.chars().filter(char::is_ascii_digit).count();
    (MIN_PHONE_DIGITS..=MAX_PHONE_DIGITS).contains(&digits)
}

pub fn validate_phone(value: &str) -> Option<String> {
    if is_valid_phone(value) {
        None
    } else {
        Some("Enter a valid phone number".to_string())
    }
}

/// Carrier tracking numbers: letters, digits and dashes
pub fn is_valid_tracking_number(value: &str) -> bool {
    let value = value.trim();
    let len = value.chars().count();
    (MIN_TRACKING_LENGTH..=MAX_TRACKING_LENGTH).contains(&len)
        && value.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
        && value.chars().any(|c| c.is_ascii_alphanumeric())
}

pub fn validate_tracking_number(value: &str) -> Option<String> {
    if is_valid_tracking_number(value) {
        None
    } else {
        Some(format!(
            "Tracking number must be {MIN_TRACKING_LENGTH}-{MAX_TRACKING_LENGTH} letters, digits or dashes"
        ))
    }
}

/// Weight in kilograms, as typed into the form
pub fn validate_weight(value: &str) -> Option<String> {
    match value.trim().parse::<f64>() {
        Ok(weight) if weight.is_finite() && weight > 0.0 && weight <= MAX_PACKAGE_WEIGHT_KG => None,
        Ok(_) => Some(format!(
            "Weight must be greater than 0 and at most {MAX_PACKAGE_WEIGHT_KG} kg"
        )),
        Err(_) => Some("Weight must be a number".to_string()),
    }
}

/// Per-field error messages collected while validating a form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormErrors {
    errors: BTreeMap<String, String>,
}

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the result of a validator; the first error per field wins
    pub fn check(&mut self, field: &str, result: Option<String>) -> &mut Self {
        if let Some(message) = result {
            self.errors.entry(field.to_string()).or_insert(message);
        }
        self
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.errors.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
