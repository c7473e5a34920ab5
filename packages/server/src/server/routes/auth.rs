//! OTP endpoints.
//!
//! POST /api/auth/send-otp    { phone, channel? } -> { status, to, channel }
//! POST /api/auth/verify-otp  { phone, code }     -> { verified: true }
//!
//! Bodies that are missing or fail to parse are treated as `{}`, which the
//! actions then reject as a validation error.

use axum::{
    extract::{rejection::JsonRejection, Extension},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::domains::auth::types::{ErrorResponse, SendOtpRequest, VerifyOtpRequest, VerifyOtpResponse};
use crate::domains::auth::{self, OtpError};
use crate::server::app::AxumAppState;

const SEND_FAILED: &str = "Failed to send OTP";
const VERIFY_FAILED: &str = "Verification failed";

pub async fn send_otp_handler(
    Extension(state): Extension<AxumAppState>,
    payload: Result<Json<SendOtpRequest>, JsonRejection>,
) -> Response {
    let request = payload.map(|Json(body)| body).unwrap_or_default();

    match auth::send_otp(request, &state.deps).await {
        Ok(sent) => (StatusCode::OK, Json(sent)).into_response(),
        Err(err) => send_error_response(&err),
    }
}

pub async fn verify_otp_handler(
    Extension(state): Extension<AxumAppState>,
    payload: Result<Json<VerifyOtpRequest>, JsonRejection>,
) -> Response {
    let request = payload.map(|Json(body)| body).unwrap_or_default();

    match auth::verify_otp(request, &state.deps).await {
        Ok(()) => (StatusCode::OK, Json(VerifyOtpResponse { verified: true })).into_response(),
        Err(err) => verify_error_response(&err),
    }
}

fn send_error_response(err: &OtpError) -> Response {
    let body = ErrorResponse {
        verified: None,
        error: err.public_message(SEND_FAILED),
    };
    (err.status_code(), Json(body)).into_response()
}

/// Verify errors carry `verified: false`, except input validation errors
fn verify_error_response(err: &OtpError) -> Response {
    let body = ErrorResponse {
        verified: if err.is_validation() { None } else { Some(false) },
        error: err.public_message(VERIFY_FAILED),
    };
    (err.status_code(), Json(body)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_statuses() {
        assert_eq!(
            send_error_response(&OtpError::InvalidPhone).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            verify_error_response(&OtpError::ProviderUnconfigured).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            verify_error_response(&OtpError::VerificationRejected).status(),
            StatusCode::BAD_REQUEST
        );
    }
}
