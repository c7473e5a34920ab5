//! Server dependencies for request handlers (using traits for testability)
//!
//! Built once at startup and handed to the router; nothing here is global.

use async_trait::async_trait;
use std::sync::Arc;
use twilio::{TwilioError, TwilioService};

use crate::config::Config;
use crate::domains::auth::types::{CheckStatus, VerificationStarted};
use crate::domains::auth::{DeliveryChannel, OtpCode, PhoneNumber};
use crate::kernel::{BaseOtpProvider, ProviderError};

pub const SERVICE_NAME: &str = "otp-backend";

// =============================================================================
// TwilioService Adapter (implements BaseOtpProvider trait)
// =============================================================================

/// Wrapper around TwilioService that implements BaseOtpProvider trait
pub struct TwilioAdapter(pub Arc<TwilioService>);

impl TwilioAdapter {
    pub fn new(service: Arc<TwilioService>) -> Self {
        Self(service)
    }
}

impl From<TwilioError> for ProviderError {
    fn from(err: TwilioError) -> Self {
        ProviderError::new(err.status(), err.to_string())
    }
}

#[async_trait]
impl BaseOtpProvider for TwilioAdapter {
    async fn start_verification(
        &self,
        phone_number: &PhoneNumber,
        channel: DeliveryChannel,
    ) -> Result<VerificationStarted, ProviderError> {
        let response = self.0.send_otp(phone_number.as_str(), channel.into()).await?;
        Ok(VerificationStarted {
            status: response.status.as_str().to_string(),
            to: response.to,
        })
    }

    async fn check_verification(
        &self,
        phone_number: &PhoneNumber,
        code: &OtpCode,
    ) -> Result<CheckStatus, ProviderError> {
        let response = self
            .0
            .verify_otp(phone_number.as_str(), code.as_str())
            .await?;

        if response.status.is_approved() {
            Ok(CheckStatus::Approved)
        } else {
            Ok(CheckStatus::NotApproved(response.status.as_str().to_string()))
        }
    }
}

// =============================================================================
// ServerDeps
// =============================================================================

/// Server dependencies accessible to handlers
#[derive(Clone)]
pub struct ServerDeps {
    /// `None` when credentials are missing or malformed
    pub otp_provider: Option<Arc<dyn BaseOtpProvider>>,
    pub service_name: &'static str,
}

impl ServerDeps {
    pub fn new(otp_provider: Option<Arc<dyn BaseOtpProvider>>) -> Self {
        Self {
            otp_provider,
            service_name: SERVICE_NAME,
        }
    }

    /// Wire the Twilio-backed provider from configuration
    pub fn from_config(config: &Config) -> Self {
        let otp_provider = config.twilio.as_ref().map(|credentials| {
            let twilio = Arc::new(TwilioService::new(credentials.to_options()));
            Arc::new(TwilioAdapter::new(twilio)) as Arc<dyn BaseOtpProvider>
        });

        if otp_provider.is_none() {
            tracing::warn!(
                "Twilio env vars missing or invalid. Set TWILIO_ACCOUNT_SID, TWILIO_AUTH_TOKEN, TWILIO_VERIFY_SERVICE_SID."
            );
        }

        Self::new(otp_provider)
    }

    pub fn otp_provider(&self) -> Option<&Arc<dyn BaseOtpProvider>> {
        self.otp_provider.as_ref()
    }
}
