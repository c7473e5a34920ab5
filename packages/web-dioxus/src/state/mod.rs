//! Form state and rules shared by the screens

mod pending;
mod phone_entry;

pub use pending::*;
pub use phone_entry::*;
