//! Phone entry form rules

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Indian mobile numbers: ten digits starting 6-9
    static ref NATIONAL_MOBILE_REGEX: Regex = Regex::new(r"^[6-9][0-9]{9}$").unwrap();

    /// Same shape the verification API enforces
    static ref E164_REGEX: Regex = Regex::new(r"^\+[1-9][0-9]{1,14}$").unwrap();
}

pub const NATIONAL_NUMBER_LENGTH: usize = 10;
pub const COUNTRY_CODE: &str = "+91";

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PhoneEntryError {
    #[error("Phone number is required")]
    Required,
    #[error("Please enter a valid 10-digit mobile number")]
    InvalidNumber,
}

/// Keep ASCII digits only, at most ten of them
pub fn sanitize_phone_input(raw: &str) -> String {
    raw.chars()
        .filter(char::is_ascii_digit)
        .take(NATIONAL_NUMBER_LENGTH)
        .collect()
}

pub fn validate_national_number(digits: &str) -> Result<(), PhoneEntryError> {
    if digits.is_empty() {
        return Err(PhoneEntryError::Required);
    }
    if !NATIONAL_MOBILE_REGEX.is_match(digits) {
        return Err(PhoneEntryError::InvalidNumber);
    }
    Ok(())
}

pub fn is_e164(phone: &str) -> bool {
    E164_REGEX.is_match(phone)
}

/// `9876543210` -> `+919876543210`
pub fn full_phone_number(digits: &str) -> String {
    format!("{}{}", COUNTRY_CODE, digits)
}
