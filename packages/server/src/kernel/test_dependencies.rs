// Mock implementations for testing
//
// Provides a scripted OTP provider that can be injected into ServerDeps in
// place of Twilio.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use super::{BaseOtpProvider, ProviderError};
use crate::domains::auth::types::{CheckStatus, VerificationStarted};
use crate::domains::auth::{DeliveryChannel, OtpCode, PhoneNumber};

// =============================================================================
// Mock OTP Provider
// =============================================================================

/// Arguments captured from a start_verification call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendCall {
    pub phone_number: String,
    pub channel: DeliveryChannel,
}

/// Arguments captured from a check_verification call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckCall {
    pub phone_number: String,
    pub code: String,
}

#[derive(Clone)]
pub struct MockOtpProvider {
    check_status: Arc<Mutex<String>>,
    send_failure: Arc<Mutex<Option<ProviderError>>>,
    check_failure: Arc<Mutex<Option<ProviderError>>>,
    send_calls: Arc<Mutex<Vec<SendCall>>>,
    check_calls: Arc<Mutex<Vec<CheckCall>>>,
}

impl MockOtpProvider {
    /// Provider that accepts every send and approves every check
    pub fn new() -> Self {
        Self {
            check_status: Arc::new(Mutex::new("approved".to_string())),
            send_failure: Arc::new(Mutex::new(None)),
            check_failure: Arc::new(Mutex::new(None)),
            send_calls: Arc::new(Mutex::new(Vec::new())),
            check_calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Status reported by subsequent checks (`approved`, `pending`, ...)
    pub fn with_check_status(self, status: impl Into<String>) -> Self {
        *self.check_status.lock().unwrap() = status.into();
        self
    }

    pub fn with_send_failure(self, status: Option<u16>, message: &str) -> Self {
        *self.send_failure.lock().unwrap() = Some(ProviderError::new(status, message));
        self
    }

    pub fn with_check_failure(self, status: Option<u16>, message: &str) -> Self {
        *self.check_failure.lock().unwrap() = Some(ProviderError::new(status, message));
        self
    }

    pub fn send_calls(&self) -> Vec<SendCall> {
        self.send_calls.lock().unwrap().clone()
    }

    pub fn check_calls(&self) -> Vec<CheckCall> {
        self.check_calls.lock().unwrap().clone()
    }

    pub fn total_calls(&self) -> usize {
        self.send_calls.lock().unwrap().len() + self.check_calls.lock().unwrap().len()
    }
}

impl Default for MockOtpProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseOtpProvider for MockOtpProvider {
    async fn start_verification(
        &self,
        phone_number: &PhoneNumber,
        channel: DeliveryChannel,
    ) -> Result<VerificationStarted, ProviderError> {
        self.send_calls.lock().unwrap().push(SendCall {
            phone_number: phone_number.to_string(),
            channel,
        });

        if let Some(err) = self.send_failure.lock().unwrap().clone() {
            return Err(err);
        }

        Ok(VerificationStarted::for_phone("pending", phone_number))
    }

    async fn check_verification(
        &self,
        phone_number: &PhoneNumber,
        code: &OtpCode,
    ) -> Result<CheckStatus, ProviderError> {
        self.check_calls.lock().unwrap().push(CheckCall {
            phone_number: phone_number.to_string(),
            code: code.as_str().to_string(),
        });

        if let Some(err) = self.check_failure.lock().unwrap().clone() {
            return Err(err);
        }

        let status = self.check_status.lock().unwrap().clone();
        if status == "approved" {
            Ok(CheckStatus::Approved)
        } else {
            Ok(CheckStatus::NotApproved(status))
        }
    }
}
