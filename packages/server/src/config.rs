use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;
use twilio::TwilioOptions;

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_ALLOWED_ORIGINS: &str = "http://localhost:5173";

/// Twilio Verify credentials, present only when they look usable
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TwilioCredentials {
    pub account_sid: String,
    pub auth_token: String,
    pub verify_service_sid: String,
    pub base_url: Option<String>,
}

impl TwilioCredentials {
    /// Account SIDs start with `AC`, Verify service SIDs with `VA`.
    fn validate(
        account_sid: String,
        auth_token: String,
        verify_service_sid: String,
        base_url: Option<String>,
    ) -> Option<Self> {
        if account_sid.starts_with("AC")
            && !auth_token.is_empty()
            && verify_service_sid.starts_with("VA")
        {
            Some(Self {
                account_sid,
                auth_token,
                verify_service_sid,
                base_url,
            })
        } else {
            None
        }
    }

    pub fn to_options(&self) -> TwilioOptions {
        let options = TwilioOptions::new(
            self.account_sid.clone(),
            self.auth_token.clone(),
            self.verify_service_sid.clone(),
        );
        match &self.base_url {
            Some(url) => options.with_base_url(url.clone()),
            None => options,
        }
    }
}

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub allowed_origins: Vec<String>,
    /// `None` when any Twilio variable is missing or malformed; the server
    /// still starts but send/verify answer 500.
    pub twilio: Option<TwilioCredentials>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .with_context(|| format!("PORT must be a valid number, got {:?}", raw))?,
            None => DEFAULT_PORT,
        };

        let raw_origins =
            lookup("ALLOWED_ORIGINS").unwrap_or_else(|| DEFAULT_ALLOWED_ORIGINS.to_string());

        let twilio = TwilioCredentials::validate(
            lookup("TWILIO_ACCOUNT_SID").unwrap_or_default(),
            lookup("TWILIO_AUTH_TOKEN").unwrap_or_default(),
            lookup("TWILIO_VERIFY_SERVICE_SID").unwrap_or_default(),
            lookup("TWILIO_VERIFY_BASE_URL").filter(|url| !url.trim().is_empty()),
        );

        Ok(Self {
            port,
            allowed_origins: parse_origins(&raw_origins),
            twilio,
        })
    }
}

/// Split a comma-separated origin list, dropping blanks.
///
/// `*` is not an origin: credentialed CORS cannot use a wildcard, so the
/// entry is dropped with a warning instead of being allow-listed.
pub fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .filter(|origin| {
            if *origin == "*" {
                tracing::warn!("Ignoring wildcard in ALLOWED_ORIGINS; list origins explicitly");
                false
            } else {
                true
            }
        })
        .map(str::to_string)
        .collect()
}
