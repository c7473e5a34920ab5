// Karm OTP backend - API Core
//
// Thin verification API: validates phone/code input and proxies
// send/check requests to the OTP provider (Twilio Verify).

pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
