mod channel;
mod otp_code;
mod phone_number;

pub use channel::*;
pub use otp_code::*;
pub use phone_number::*;
