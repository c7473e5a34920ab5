use lazy_static::lazy_static;
use regex::Regex;

use crate::domains::auth::errors::OtpError;

lazy_static! {
    // ASCII digits only; `\d` would also accept other Unicode decimal digits
    static ref OTP_CODE_REGEX: Regex = Regex::new(r"^[0-9]{6}$").unwrap();
}

/// Six-digit numeric verification code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OtpCode(String);

impl OtpCode {
    pub fn parse(raw: &str) -> Result<Self, OtpError> {
        if OTP_CODE_REGEX.is_match(raw) {
            Ok(Self(raw.to_string()))
        } else {
            Err(OtpError::InvalidCode)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_six_digits_only() {
        assert!(OtpCode::parse("000000").is_ok());
        assert!(OtpCode::parse("123456").is_ok());

        for code in ["1234", "12345", "1234567", "12a456", " 123456", "", "１２３４５６"] {
            assert!(
                matches!(OtpCode::parse(code), Err(OtpError::InvalidCode)),
                "{:?} should be rejected",
                code
            );
        }
    }
}
