//! REST client for the OTP endpoints

use serde::Serialize;

use crate::types::{ApiBody, Channel, SendOtpBody, VerifyOtpBody};

/// Used when `API_BASE_URL` is not set at build time
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";

const REQUEST_FAILED: &str = "Request failed";

/// Base URL of the verification API, without a trailing slash
pub fn api_base_url() -> String {
    normalize_base_url(option_env!("API_BASE_URL").unwrap_or(DEFAULT_API_BASE_URL))
}

fn normalize_base_url(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}

/// Error type for API calls that never produced a response
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

/// Status code plus whatever JSON body came back
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiReply {
    pub status: u16,
    pub body: ApiBody,
}

impl ApiReply {
    /// A non-2xx response keeps its JSON body; an unreadable one becomes
    /// `{ error: "Request failed" }`.
    pub fn from_parts(status: u16, text: &str) -> Self {
        let parsed = serde_json::from_str::<ApiBody>(text).ok();
        let body = if (200..300).contains(&status) {
            parsed.unwrap_or_default()
        } else {
            parsed.unwrap_or_else(|| ApiBody {
                error: Some(REQUEST_FAILED.to_string()),
                ..ApiBody::default()
            })
        };
        Self { status, body }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn error(&self) -> Option<&str> {
        self.body.error.as_deref()
    }
}

/// Client for `/api/auth/*`
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new(api_base_url())
    }
}

impl ApiClient {
    pub fn new(base_url: impl AsRef<str>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: normalize_base_url(base_url.as_ref()),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Ask the backend to text a code to `phone`
    pub async fn send_otp(&self, phone: &str, channel: Channel) -> Result<ApiReply, ClientError> {
        self.post("/api/auth/send-otp", &SendOtpBody { phone, channel })
            .await
    }

    /// Check `code` for `phone`
    pub async fn verify_otp(&self, phone: &str, code: &str) -> Result<ApiReply, ClientError> {
        self.post("/api/auth/verify-otp", &VerifyOtpBody { phone, code })
            .await
    }

    async fn post<B: Serialize>(&self, path: &str, body: &B) -> Result<ApiReply, ClientError> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(url = %url, "POST");

        let response = self.client.post(&url).json(body).send().await?;
        let status = response.status().as_u16();
        let text = response.text().await.unwrap_or_default();

        if !(200..300).contains(&status) {
            tracing::warn!(status, path, "API request failed");
        }

        Ok(ApiReply::from_parts(status, &text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        assert_eq!(ApiClient::new("http://api.test/").base_url(), "http://api.test");
        assert_eq!(ApiClient::new("http://api.test").base_url(), "http://api.test");
    }

    #[test]
    fn test_error_body_is_returned_not_raised() {
        let reply = ApiReply::from_parts(
            400,
            r#"{"error":"Invalid phone. Provide E.164 format, e.g. +919876543210"}"#,
        );
        assert!(!reply.is_success());
        assert_eq!(
            reply.error(),
            Some("Invalid phone. Provide E.164 format, e.g. +919876543210")
        );
    }

    #[test]
    fn test_unreadable_error_body() {
        let reply = ApiReply::from_parts(502, "<html>Bad Gateway</html>");
        assert_eq!(reply.error(), Some("Request failed"));

        let reply = ApiReply::from_parts(500, "");
        assert_eq!(reply.error(), Some("Request failed"));
    }

    #[test]
    fn test_success_body() {
        let reply = ApiReply::from_parts(200, r#"{"status":"pending","to":"+919876543210","channel":"sms"}"#);
        assert!(reply.is_success());
        assert_eq!(reply.error(), None);
        assert_eq!(reply.body.status.as_deref(), Some("pending"));

        let reply = ApiReply::from_parts(200, "");
        assert_eq!(reply.body, ApiBody::default());
    }
}
