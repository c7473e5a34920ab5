//! Auth domain - phone number verification via OTP
//!
//! Responsibilities:
//! - Input validation (E.164 phone numbers, 6-digit codes)
//! - Starting and checking verifications with the OTP provider
//! - Mapping provider outcomes onto the API's error taxonomy
//!
//! Session/token issuance after a successful check is out of scope.

pub mod actions;
pub mod errors;
pub mod models;
pub mod types;

pub use actions::{send_otp, verify_otp};
pub use errors::OtpError;
pub use models::{DeliveryChannel, OtpCode, PhoneNumber};
