//! Format rules for the customer information step.
//!
//! Each validator trims its input and returns an empty string when the value
//! is acceptable, otherwise a message ready to show next to the field.

use once_cell::sync::Lazy;
use regex::Regex;

static LETTERS_AND_SPACES: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z ]+$").expect("letters pattern compiles"));

static PHONE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\+60|0)?[0-9]{9,10}$").expect("phone pattern compiles"));

static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9-]+(\.[A-Za-z0-9-]+)*\.[A-Za-z]{2,}$")
        .expect("email pattern compiles")
});

static POSTAL_CODE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{5}$").expect("postal code pattern compiles"));

const MIN_NAME_LEN: usize = 2;
const MIN_ADDRESS_LEN: usize = 5;

fn letters_only(label: &str, value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        format!("{label} is required")
    } else if trimmed.chars().count() < MIN_NAME_LEN {
        format!("{label} must be at least {MIN_NAME_LEN} characters")
    } else if !LETTERS_AND_SPACES.is_match(trimmed) {
        format!("{label} can only contain letters and spaces")
    } else {
        String::new()
    }
}

pub fn validate_first_name(value: &str) -> String {
    letters_only("First name", value)
}

pub fn validate_last_name(value: &str) -> String {
    letters_only("Last name", value)
}

/// Malaysian numbers: optional `+60` or `0` prefix followed by 9-10 digits.
/// Spaces are ignored.
pub fn validate_phone(value: &str) -> String {
    let compact: String = value.chars().filter(|ch| !ch.is_whitespace()).collect();
    if compact.is_empty() {
        "Phone number is required".into()
    } else if !PHONE.is_match(&compact) {
        "Enter a valid phone number (e.g. 012 345 6789 or +60 12 345 6789)".into()
    } else {
        String::new()
    }
}

pub fn validate_email(value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        "Email is required".into()
    } else if !EMAIL.is_match(trimmed) {
        "Enter a valid email address".into()
    } else {
        String::new()
    }
}

pub fn validate_address_line1(value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        "Address is required".into()
    } else if trimmed.chars().count() < MIN_ADDRESS_LEN {
        format!("Address must be at least {MIN_ADDRESS_LEN} characters")
    } else {
        String::new()
    }
}

pub fn validate_postal_code(value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        "Postal code is required".into()
    } else if !POSTAL_CODE.is_match(trimmed) {
        "Postal code must be exactly 5 digits".into()
    } else {
        String::new()
    }
}

pub fn validate_city(value: &str) -> String {
    letters_only("City", value)
}

pub fn validate_country(value: &str) -> String {
    letters_only("Country", value)
}
