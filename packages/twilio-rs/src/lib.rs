// https://dev.to/hackmamba/how-to-build-a-one-time-passwordotp-verification-api-with-rust-and-twilio-22il

pub mod models;

use reqwest::{header, Client, Response};
use thiserror::Error;
use tracing::{debug, error};

pub use crate::models::{Channel, OTPResponse, OTPVerifyResponse, VerificationStatus};
use crate::models::TwilioErrorBody;

pub const DEFAULT_BASE_URL: &str = "https://verify.twilio.com";

#[derive(Debug, Clone)]
pub struct TwilioOptions {
    pub account_sid: String,
    pub auth_token: String,
    pub service_id: String,
    /// Verify API root, overridable for staging or a local stub.
    pub base_url: String,
}

impl TwilioOptions {
    pub fn new(
        account_sid: impl Into<String>,
        auth_token: impl Into<String>,
        service_id: impl Into<String>,
    ) -> Self {
        Self {
            account_sid: account_sid.into(),
            auth_token: auth_token.into(),
            service_id: service_id.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }
}

#[derive(Debug, Error)]
pub enum TwilioError {
    #[error("Request to Twilio failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Twilio returned an error ({status}): {message}")]
    Api {
        status: u16,
        code: Option<u32>,
        message: String,
    },

    #[error("Error parsing Twilio response: {0}")]
    Decode(String),
}

impl TwilioError {
    /// Upstream HTTP status, when Twilio answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            TwilioError::Api { status, .. } => Some(*status),
            TwilioError::Request(e) => e.status().map(|s| s.as_u16()),
            TwilioError::Decode(_) => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct TwilioService {
    options: TwilioOptions,
    client: Client,
}

impl TwilioService {
    pub fn new(options: TwilioOptions) -> Self {
        Self {
            options,
            client: Client::new(),
        }
    }

    pub fn options(&self) -> &TwilioOptions {
        &self.options
    }

    /// Start a verification: Twilio generates a code and delivers it over `channel`.
    pub async fn send_otp(
        &self,
        recipient: &str,
        channel: Channel,
    ) -> Result<OTPResponse, TwilioError> {
        let url = format!(
            "{base}/v2/Services/{serv_id}/Verifications",
            base = self.options.base_url,
            serv_id = self.options.service_id
        );

        let form_body = [("To", recipient), ("Channel", channel.as_str())];
        let response = self.post_form(&url, &form_body).await?;
        let data = Self::decode::<OTPResponse>(response).await?;

        debug!(status = data.status.as_str(), channel = %channel, "Twilio verification started");
        Ok(data)
    }

    /// Check a code. Any status Twilio reports is returned as-is; only
    /// transport and API errors are `Err`.
    pub async fn verify_otp(
        &self,
        recipient: &str,
        code: &str,
    ) -> Result<OTPVerifyResponse, TwilioError> {
        let url = format!(
            "{base}/v2/Services/{serv_id}/VerificationCheck",
            base = self.options.base_url,
            serv_id = self.options.service_id,
        );

        let form_body = [("To", recipient), ("Code", code)];
        let response = self.post_form(&url, &form_body).await?;
        let data = Self::decode::<OTPVerifyResponse>(response).await?;

        debug!(status = data.status.as_str(), "Twilio verification checked");
        Ok(data)
    }

    async fn post_form(&self, url: &str, form_body: &[(&str, &str)]) -> Result<Response, TwilioError> {
        let res = self
            .client
            .post(url)
            .basic_auth(&self.options.account_sid, Some(&self.options.auth_token))
            .header(header::ACCEPT, "application/json")
            .form(form_body)
            .send()
            .await;

        match res {
            Ok(response) => Ok(response),
            Err(e) => {
                error!("Request to Twilio failed: {}", e);
                Err(TwilioError::Request(e))
            }
        }
    }

    async fn decode<T: serde::de::DeserializeOwned>(response: Response) -> Result<T, TwilioError> {
        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            error!("Twilio error ({}): {}", status, error_body);

            let parsed = serde_json::from_str::<TwilioErrorBody>(&error_body).ok();
            return Err(TwilioError::Api {
                status: status.as_u16(),
                code: parsed.as_ref().and_then(|b| b.code),
                message: parsed
                    .and_then(|b| b.message)
                    .unwrap_or_else(|| "Twilio returned an error".to_string()),
            });
        }

        response.json::<T>().await.map_err(|e| {
            error!("Failed to parse Twilio response: {}", e);
            TwilioError::Decode(e.to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        extract::{Path, State},
        http::{HeaderMap, StatusCode},
        routing::post,
        Form, Json, Router,
    };
    use serde_json::{json, Value};
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    type Calls = Arc<Mutex<Vec<(String, HashMap<String, String>, Option<String>)>>>;

    /// Local stand-in for the Verify API. Code "123456" is approved,
    /// recipient "+15005550009" is rejected as undeliverable.
    async fn spawn_stub() -> (String, Calls) {
        let calls: Calls = Arc::new(Mutex::new(Vec::new()));

        async fn verifications(
            State(calls): State<Calls>,
            Path(sid): Path<String>,
            headers: HeaderMap,
            Form(form): Form<HashMap<String, String>>,
        ) -> (StatusCode, Json<Value>) {
            let auth = headers
                .get("authorization")
                .and_then(|v| v.to_str().ok())
                .map(str::to_string);
            calls.lock().unwrap().push((sid.clone(), form.clone(), auth));

            if form.get("To").map(String::as_str) == Some("+15005550009") {
                return (
                    StatusCode::BAD_REQUEST,
                    Json(json!({
                        "code": 60200,
                        "message": "Invalid parameter `To`",
                        "more_info": "https://www.twilio.com/docs/errors/60200",
                        "status": 400
                    })),
                );
            }

            (
                StatusCode::CREATED,
                Json(json!({
                    "sid": "VE0001",
                    "service_sid": sid,
                    "to": form["To"],
                    "channel": form["Channel"],
                    "status": "pending",
                    "valid": false
                })),
            )
        }

        async fn check(
            Form(form): Form<HashMap<String, String>>,
        ) -> (StatusCode, Json<Value>) {
            let status = if form.get("Code").map(String::as_str) == Some("123456") {
                "approved"
            } else {
                "pending"
            };
            (
                StatusCode::OK,
                Json(json!({ "sid": "VE0001", "to": form["To"], "status": status, "valid": status == "approved" })),
            )
        }

        let app = Router::new()
            .route("/v2/Services/:sid/Verifications", post(verifications))
            .route("/v2/Services/:sid/VerificationCheck", post(check))
            .with_state(calls.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        (format!("http://{}", addr), calls)
    }

    fn service(base_url: &str) -> TwilioService {
        TwilioService::new(
            TwilioOptions::new("ACtest", "secret", "VAtest").with_base_url(base_url),
        )
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let options = TwilioOptions::new("AC1", "t", "VA1").with_base_url("http://stub/");
        assert_eq!(options.base_url, "http://stub");
        assert_eq!(TwilioOptions::new("AC1", "t", "VA1").base_url, DEFAULT_BASE_URL);
    }

    #[tokio::test]
    async fn test_send_otp_posts_form_with_basic_auth() {
        let (base, calls) = spawn_stub().await;

        let response = service(&base)
            .send_otp("+919876543210", Channel::Whatsapp)
            .await
            .unwrap();

        assert_eq!(response.status, VerificationStatus::Pending);
        assert_eq!(response.to, "+919876543210");
        assert_eq!(response.channel, "whatsapp");

        let calls = calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        let (sid, form, auth) = &calls[0];
        assert_eq!(sid, "VAtest");
        assert_eq!(form["Channel"], "whatsapp");
        assert!(auth.as_deref().unwrap_or_default().starts_with("Basic "));
    }

    #[tokio::test]
    async fn test_send_otp_surfaces_api_error_status() {
        let (base, _calls) = spawn_stub().await;

        let err = service(&base)
            .send_otp("+15005550009", Channel::Sms)
            .await
            .unwrap_err();

        assert_eq!(err.status(), Some(400));
        match err {
            TwilioError::Api { code, message, .. } => {
                assert_eq!(code, Some(60200));
                assert_eq!(message, "Invalid parameter `To`");
            }
            other => panic!("expected Api error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_verify_otp_returns_status() {
        let (base, _calls) = spawn_stub().await;
        let twilio = service(&base);

        let approved = twilio.verify_otp("+919876543210", "123456").await.unwrap();
        assert!(approved.status.is_approved());

        let pending = twilio.verify_otp("+919876543210", "000000").await.unwrap();
        assert_eq!(pending.status, VerificationStatus::Pending);
    }

    #[tokio::test]
    async fn test_unreachable_host_is_request_error() {
        let err = service("http://127.0.0.1:1")
            .verify_otp("+919876543210", "123456")
            .await
            .unwrap_err();
        assert!(matches!(err, TwilioError::Request(_)));
        assert_eq!(err.status(), None);
    }
}
