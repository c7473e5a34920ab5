//! OTP code entry: the controller, its cooldown, and the I/O around it

mod controller;
mod cooldown;
mod gateway;
mod timer;

pub use controller::*;
pub use cooldown::*;
pub use gateway::*;
pub use timer::*;
