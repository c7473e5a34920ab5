use serde::{Deserialize, Serialize};

/// Delivery channel for a verification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    Sms,
    Whatsapp,
}

impl Channel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Channel::Sms => "sms",
            Channel::Whatsapp => "whatsapp",
        }
    }
}

impl std::fmt::Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Status of a Verify v2 verification resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerificationStatus {
    Pending,
    Approved,
    Canceled,
    MaxAttemptsReached,
    Deleted,
    Failed,
    Expired,
    #[serde(other)]
    Unknown,
}

impl VerificationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            VerificationStatus::Pending => "pending",
            VerificationStatus::Approved => "approved",
            VerificationStatus::Canceled => "canceled",
            VerificationStatus::MaxAttemptsReached => "max_attempts_reached",
            VerificationStatus::Deleted => "deleted",
            VerificationStatus::Failed => "failed",
            VerificationStatus::Expired => "expired",
            VerificationStatus::Unknown => "unknown",
        }
    }

    pub fn is_approved(&self) -> bool {
        matches!(self, VerificationStatus::Approved)
    }
}

/// Response to `POST /v2/Services/{sid}/Verifications`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OTPResponse {
    #[serde(default)]
    pub sid: String,
    #[serde(default)]
    pub service_sid: String,
    pub to: String,
    pub channel: String,
    pub status: VerificationStatus,
    #[serde(default)]
    pub valid: bool,
}

/// Response to `POST /v2/Services/{sid}/VerificationCheck`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OTPVerifyResponse {
    #[serde(default)]
    pub sid: String,
    #[serde(default)]
    pub to: String,
    #[serde(default)]
    pub channel: Option<String>,
    pub status: VerificationStatus,
    #[serde(default)]
    pub valid: bool,
}

/// Error body Twilio returns alongside non-2xx statuses
#[derive(Debug, Clone, Deserialize)]
pub struct TwilioErrorBody {
    pub code: Option<u32>,
    pub message: Option<String>,
    pub more_info: Option<String>,
    pub status: Option<u16>,
}
