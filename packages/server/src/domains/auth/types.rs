//! Auth domain data types
//!
//! Request/response bodies of the verification API.

use serde::{Deserialize, Serialize};

use super::models::{DeliveryChannel, PhoneNumber};

/// Body of `POST /api/auth/send-otp`
///
/// Fields are optional so a missing field surfaces as a validation error
/// rather than a deserialization failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SendOtpRequest {
    pub phone: Option<String>,
    pub channel: Option<String>,
}

/// Body of `POST /api/auth/verify-otp`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VerifyOtpRequest {
    pub phone: Option<String>,
    pub code: Option<String>,
}

/// Result of starting a verification
#[derive(Debug, Clone, Serialize)]
pub struct OtpSent {
    /// Provider status, normally `pending`
    pub status: String,
    pub to: String,
    pub channel: DeliveryChannel,
}

impl OtpSent {
    pub fn new(status: impl Into<String>, to: impl Into<String>, channel: DeliveryChannel) -> Self {
        Self {
            status: status.into(),
            to: to.into(),
            channel,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct VerifyOtpResponse {
    pub verified: bool,
}

/// Uniform error body
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verified: Option<bool>,
    pub error: String,
}

/// Provider acknowledgement of a started verification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationStarted {
    pub status: String,
    pub to: String,
}

/// Provider verdict on a code check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckStatus {
    Approved,
    /// Anything other than approved, with the provider's status string
    NotApproved(String),
}

impl CheckStatus {
    pub fn is_approved(&self) -> bool {
        matches!(self, CheckStatus::Approved)
    }
}

impl VerificationStarted {
    pub fn for_phone(status: impl Into<String>, phone: &PhoneNumber) -> Self {
        Self {
            status: status.into(),
            to: phone.to_string(),
        }
    }
}
