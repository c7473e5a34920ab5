//! Where verification and resend requests actually go
//!
//! `Live` talks to the backend. `Simulated` reproduces the demo timings
//! (approve after 2 s, resend after 1 s) so the screens can be exercised
//! without Twilio credentials. The mode is fixed at build time through
//! `KARM_OTP_MODE`.

use super::controller::{CodeError, ResendCommand, VerificationOutcome, VerifyCommand};
use super::timer::sleep_ms;
use crate::api::{ApiClient, ApiReply};
use crate::types::Channel;

const SIMULATED_VERIFY_MS: u32 = 2000;
const SIMULATED_RESEND_MS: u32 = 1000;

const SEND_FAILED: &str = "Failed to send OTP. Please try again.";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum GatewayMode {
    #[default]
    Live,
    Simulated,
}

impl GatewayMode {
    /// Anything other than `simulated` means live
    pub fn parse(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(v) if v.eq_ignore_ascii_case("simulated") => GatewayMode::Simulated,
            _ => GatewayMode::Live,
        }
    }
}

#[derive(Clone, Debug)]
pub enum VerificationGateway {
    Live(ApiClient),
    Simulated,
}

impl VerificationGateway {
    pub fn from_env() -> Self {
        Self::for_mode(GatewayMode::parse(option_env!("KARM_OTP_MODE")))
    }

    pub fn for_mode(mode: GatewayMode) -> Self {
        match mode {
            GatewayMode::Live => VerificationGateway::Live(ApiClient::default()),
            GatewayMode::Simulated => VerificationGateway::Simulated,
        }
    }

    pub fn mode(&self) -> GatewayMode {
        match self {
            VerificationGateway::Live(_) => GatewayMode::Live,
            VerificationGateway::Simulated => GatewayMode::Simulated,
        }
    }

    /// Request the first code. `Err` carries the text to show the user.
    pub async fn send_otp(&self, phone: &str, channel: Channel) -> Result<(), String> {
        match self {
            VerificationGateway::Live(client) => match client.send_otp(phone, channel).await {
                Ok(reply) => match reply.error() {
                    Some(error) => Err(error.to_string()),
                    None => Ok(()),
                },
                Err(e) => {
                    tracing::error!(error = %e, "send-otp request failed");
                    Err(SEND_FAILED.to_string())
                }
            },
            VerificationGateway::Simulated => {
                sleep_ms(SIMULATED_RESEND_MS).await;
                Ok(())
            }
        }
    }

    pub async fn verify(&self, command: &VerifyCommand) -> VerificationOutcome {
        match self {
            VerificationGateway::Live(client) => {
                match client.verify_otp(&command.phone_number, &command.code).await {
                    Ok(reply) => outcome_from_reply(&reply),
                    Err(e) => {
                        tracing::error!(error = %e, "verify-otp request failed");
                        VerificationOutcome::Rejected(CodeError::Network)
                    }
                }
            }
            VerificationGateway::Simulated => {
                sleep_ms(SIMULATED_VERIFY_MS).await;
                VerificationOutcome::Approved
            }
        }
    }

    pub async fn resend(&self, command: &ResendCommand) -> Result<(), CodeError> {
        match self {
            VerificationGateway::Live(client) => {
                match client.send_otp(&command.phone_number, command.channel).await {
                    Ok(reply) if reply.is_success() && reply.error().is_none() => Ok(()),
                    Ok(reply) => {
                        tracing::warn!(status = reply.status, "resend rejected");
                        Err(CodeError::ResendFailed)
                    }
                    Err(e) => {
                        tracing::error!(error = %e, "resend request failed");
                        Err(CodeError::ResendFailed)
                    }
                }
            }
            VerificationGateway::Simulated => {
                sleep_ms(SIMULATED_RESEND_MS).await;
                Ok(())
            }
        }
    }
}

/// Map a verify-otp response onto the controller's outcome
pub fn outcome_from_reply(reply: &ApiReply) -> VerificationOutcome {
    if reply.is_success() && reply.body.verified == Some(true) {
        return VerificationOutcome::Approved;
    }

    let error = match reply.status {
        404 | 410 => CodeError::ExpiredCode,
        400..=499 => CodeError::InvalidCode,
        200..=299 => CodeError::InvalidCode,
        _ => CodeError::Network,
    };
    VerificationOutcome::Rejected(error)
}
