//! Verify OTP action

use tracing::{error, info};

use crate::domains::auth::errors::OtpError;
use crate::domains::auth::models::{OtpCode, PhoneNumber};
use crate::domains::auth::types::{CheckStatus, VerifyOtpRequest};
use crate::kernel::ServerDeps;

/// Check a code with the provider.
///
/// `Ok(())` only for an approved check; any other provider status is
/// `VerificationRejected`.
pub async fn verify_otp(request: VerifyOtpRequest, deps: &ServerDeps) -> Result<(), OtpError> {
    let phone_number = PhoneNumber::parse(request.phone.as_deref().unwrap_or_default())?;
    let code = OtpCode::parse(request.code.as_deref().unwrap_or_default())?;

    let provider = deps.otp_provider().ok_or(OtpError::ProviderUnconfigured)?;

    let status = provider
        .check_verification(&phone_number, &code)
        .await
        .map_err(|e| {
            error!(phone = %phone_number.masked(), status = ?e.status, "verify-otp error: {}", e);
            OtpError::from(e)
        })?;

    match status {
        CheckStatus::Approved => {
            info!(phone = %phone_number.masked(), "OTP verified");
            Ok(())
        }
        CheckStatus::NotApproved(provider_status) => {
            info!(
                phone = %phone_number.masked(),
                status = %provider_status,
                "OTP verification rejected"
            );
            Err(OtpError::VerificationRejected)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernel::test_dependencies::CheckCall;
    use crate::kernel::MockOtpProvider;
    use std::sync::Arc;

    fn request(phone: &str, code: &str) -> VerifyOtpRequest {
        VerifyOtpRequest {
            phone: Some(phone.to_string()),
            code: Some(code.to_string()),
        }
    }

    #[tokio::test]
    async fn test_approved_check() {
        let mock = MockOtpProvider::new();
        let deps = ServerDeps::new(Some(Arc::new(mock.clone())));

        verify_otp(request("+919876543210", "000000"), &deps)
            .await
            .unwrap();

        assert_eq!(
            mock.check_calls(),
            vec![CheckCall {
                phone_number: "+919876543210".to_string(),
                code: "000000".to_string(),
            }]
        );
    }

    #[tokio::test]
    async fn test_any_other_status_is_rejected() {
        for status in ["pending", "canceled", "expired", "max_attempts_reached"] {
            let mock = MockOtpProvider::new().with_check_status(status);
            let deps = ServerDeps::new(Some(Arc::new(mock)));

            let err = verify_otp(request("+919876543210", "000000"), &deps)
                .await
                .unwrap_err();
            assert!(matches!(err, OtpError::VerificationRejected), "status {}", status);
        }
    }

    #[tokio::test]
    async fn test_code_shape_is_validated() {
        let mock = MockOtpProvider::new();
        let deps = ServerDeps::new(Some(Arc::new(mock.clone())));

        let err = verify_otp(request("+919876543210", "1234"), &deps)
            .await
            .unwrap_err();
        assert!(matches!(err, OtpError::InvalidCode));

        let err = verify_otp(request("+919876543210", ""), &deps)
            .await
            .unwrap_err();
        assert!(matches!(err, OtpError::InvalidCode));

        assert_eq!(mock.total_calls(), 0);
    }

    #[tokio::test]
    async fn test_phone_checked_before_code() {
        let deps = ServerDeps::new(None);
        let err = verify_otp(request("919876543210", "12"), &deps)
            .await
            .unwrap_err();
        assert!(matches!(err, OtpError::InvalidPhone));
    }

    #[tokio::test]
    async fn test_unconfigured_provider() {
        let deps = ServerDeps::new(None);
        let err = verify_otp(request("+919876543210", "123456"), &deps)
            .await
            .unwrap_err();
        assert!(matches!(err, OtpError::ProviderUnconfigured));
    }
}
