use axum::http::StatusCode;
use thiserror::Error;

use crate::kernel::ProviderError;

/// Errors for the send/verify OTP flow
///
/// `Display` is the message returned to clients, except for
/// `ProviderCallFailed` whose upstream detail is logged only
/// (see [`OtpError::public_message`]).
#[derive(Error, Debug)]
pub enum OtpError {
    #[error("Invalid phone. Provide E.164 format, e.g. +919876543210")]
    InvalidPhone,

    #[error("Invalid code. Provide 6-digit numeric code")]
    InvalidCode,

    #[error("Server not configured: Missing Twilio credentials")]
    ProviderUnconfigured,

    #[error("Provider call failed: {message}")]
    ProviderCallFailed {
        status: Option<u16>,
        message: String,
    },

    #[error("Invalid or expired code")]
    VerificationRejected,
}

impl OtpError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            OtpError::InvalidPhone | OtpError::InvalidCode => StatusCode::BAD_REQUEST,
            OtpError::ProviderUnconfigured => StatusCode::INTERNAL_SERVER_ERROR,
            OtpError::ProviderCallFailed { status, .. } => status
                .and_then(|s| StatusCode::from_u16(s).ok())
                .filter(|s| s.is_client_error() || s.is_server_error())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            OtpError::VerificationRejected => StatusCode::BAD_REQUEST,
        }
    }

    /// Input errors the user has to correct before retrying
    pub fn is_validation(&self) -> bool {
        matches!(self, OtpError::InvalidPhone | OtpError::InvalidCode)
    }

    /// Client-facing message. Provider failures get `fallback` instead of
    /// the upstream detail.
    pub fn public_message(&self, fallback: &str) -> String {
        match self {
            OtpError::ProviderCallFailed { .. } => fallback.to_string(),
            other => other.to_string(),
        }
    }
}

impl From<ProviderError> for OtpError {
    fn from(err: ProviderError) -> Self {
        OtpError::ProviderCallFailed {
            status: err.status,
            message: err.message,
        }
    }
}
