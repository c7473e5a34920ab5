//! Send OTP action

use tracing::{error, info};

use crate::domains::auth::errors::OtpError;
use crate::domains::auth::models::{DeliveryChannel, PhoneNumber};
use crate::domains::auth::types::{OtpSent, SendOtpRequest};
use crate::kernel::ServerDeps;

/// Start a verification for the requested phone number.
///
/// Input is validated before the provider configuration is consulted, so
/// a malformed phone is a 400 even on an unconfigured server.
pub async fn send_otp(request: SendOtpRequest, deps: &ServerDeps) -> Result<OtpSent, OtpError> {
    let phone_number = PhoneNumber::parse(request.phone.as_deref().unwrap_or_default())?;
    let channel = DeliveryChannel::from_request(request.channel.as_deref());

    let provider = deps.otp_provider().ok_or(OtpError::ProviderUnconfigured)?;

    let started = provider
        .start_verification(&phone_number, channel)
        .await
        .map_err(|e| {
            error!(phone = %phone_number.masked(), status = ?e.status, "send-otp error: {}", e);
            OtpError::from(e)
        })?;

    info!(
        phone = %phone_number.masked(),
        channel = channel.as_str(),
        status = %started.status,
        "OTP sent"
    );

    Ok(OtpSent::new(started.status, started.to, channel))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernel::test_dependencies::SendCall;
    use crate::kernel::MockOtpProvider;
    use std::sync::Arc;

    fn request(phone: &str, channel: Option<&str>) -> SendOtpRequest {
        SendOtpRequest {
            phone: Some(phone.to_string()),
            channel: channel.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn test_sends_with_requested_channel() {
        let mock = MockOtpProvider::new();
        let deps = ServerDeps::new(Some(Arc::new(mock.clone())));

        let sent = send_otp(request("+919876543210", Some("whatsapp")), &deps)
            .await
            .unwrap();

        assert_eq!(sent.status, "pending");
        assert_eq!(sent.to, "+919876543210");
        assert_eq!(sent.channel, DeliveryChannel::Whatsapp);
        assert_eq!(
            mock.send_calls(),
            vec![SendCall {
                phone_number: "+919876543210".to_string(),
                channel: DeliveryChannel::Whatsapp,
            }]
        );
    }

    #[tokio::test]
    async fn test_invalid_phone_never_reaches_provider() {
        let mock = MockOtpProvider::new();
        let deps = ServerDeps::new(Some(Arc::new(mock.clone())));

        let err = send_otp(request("9876543210", None), &deps).await.unwrap_err();
        assert!(matches!(err, OtpError::InvalidPhone));

        let err = send_otp(SendOtpRequest::default(), &deps).await.unwrap_err();
        assert!(matches!(err, OtpError::InvalidPhone));

        assert_eq!(mock.total_calls(), 0);
    }

    #[tokio::test]
    async fn test_validation_precedes_configuration_check() {
        let deps = ServerDeps::new(None);

        let err = send_otp(request("12345", None), &deps).await.unwrap_err();
        assert!(matches!(err, OtpError::InvalidPhone));

        let err = send_otp(request("+919876543210", None), &deps)
            .await
            .unwrap_err();
        assert!(matches!(err, OtpError::ProviderUnconfigured));
    }

    #[tokio::test]
    async fn test_provider_failure_keeps_upstream_status() {
        let mock = MockOtpProvider::new().with_send_failure(Some(429), "Max send attempts reached");
        let deps = ServerDeps::new(Some(Arc::new(mock)));

        let err = send_otp(request("+919876543210", Some("sms")), &deps)
            .await
            .unwrap_err();

        match err {
            OtpError::ProviderCallFailed { status, .. } => assert_eq!(status, Some(429)),
            other => panic!("expected ProviderCallFailed, got {:?}", other),
        }
    }
}
