use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use std::fmt;

use crate::domains::auth::errors::OtpError;

lazy_static! {
    // E.164: leading +, country code without leading zero, at most 15 digits
    static ref E164_REGEX: Regex = Regex::new(r"^\+[1-9][0-9]{1,14}$").unwrap();
}

/// Phone number in E.164 format
///
/// Only constructed through [`PhoneNumber::parse`], so every value the
/// provider sees has already passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Validate a raw phone string. No normalization is applied: the value
    /// must already be E.164.
    pub fn parse(raw: &str) -> Result<Self, OtpError> {
        if E164_REGEX.is_match(raw) {
            Ok(Self(raw.to_string()))
        } else {
            Err(OtpError::InvalidPhone)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Log-safe rendering: keeps `+`, the first two digits and the last four
    pub fn masked(&self) -> String {
        let digits = &self.0[1..];
        if digits.len() <= 6 {
            return format!("+{}", "*".repeat(digits.len()));
        }
        format!(
            "+{}{}{}",
            &digits[..2],
            "*".repeat(digits.len() - 6),
            &digits[digits.len() - 4..]
        )
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PhoneNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_e164() {
        for phone in ["+919876543210", "+15555551234", "+12", "+123456789012345"] {
            assert!(PhoneNumber::parse(phone).is_ok(), "{} should be valid", phone);
        }
    }

    #[test]
    fn test_rejects_malformed() {
        for phone in [
            "9876543210",        // missing +
            "+0919876543210",    // leading zero country code
            "+1",                // too short
            "+1234567890123456", // 16 digits
            "+91 98765 43210",   // spaces
            "+91-9876543210",
            "+९१९८७६५४३२१०",   // non-ASCII digits
            "",
            "+",
        ] {
            assert!(
                matches!(PhoneNumber::parse(phone), Err(OtpError::InvalidPhone)),
                "{:?} should be rejected",
                phone
            );
        }
    }

    #[test]
    fn test_masked_hides_middle_digits() {
        let phone = PhoneNumber::parse("+919876543210").unwrap();
        assert_eq!(phone.masked(), "+91******3210");

        let short = PhoneNumber::parse("+12345").unwrap();
        assert_eq!(short.masked(), "+*****");
    }

    #[test]
    fn test_display_is_unmodified() {
        let phone = PhoneNumber::parse("+919876543210").unwrap();
        assert_eq!(phone.to_string(), "+919876543210");
    }
}
