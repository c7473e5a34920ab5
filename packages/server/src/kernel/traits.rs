// Trait abstractions for external services
//
// Handlers depend on these traits, never on concrete clients, so tests can
// swap in the mocks from `test_dependencies`.

use async_trait::async_trait;
use thiserror::Error;

use crate::domains::auth::types::{CheckStatus, VerificationStarted};
use crate::domains::auth::{DeliveryChannel, OtpCode, PhoneNumber};

/// Failure talking to the OTP provider
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct ProviderError {
    /// Upstream HTTP status, when the provider answered
    pub status: Option<u16>,
    pub message: String,
}

impl ProviderError {
    pub fn new(status: Option<u16>, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }
}

// =============================================================================
// OTP Provider Trait (Infrastructure - SMS/WhatsApp verification)
// =============================================================================

#[async_trait]
pub trait BaseOtpProvider: Send + Sync {
    /// Generate and deliver a code to `phone_number`
    async fn start_verification(
        &self,
        phone_number: &PhoneNumber,
        channel: DeliveryChannel,
    ) -> Result<VerificationStarted, ProviderError>;

    /// Check `code` against the pending verification for `phone_number`
    async fn check_verification(
        &self,
        phone_number: &PhoneNumber,
        code: &OtpCode,
    ) -> Result<CheckStatus, ProviderError>;
}
