//! Page components

mod login;
mod otp_verification;
mod welcome;

pub use login::*;
pub use otp_verification::*;
pub use welcome::*;
