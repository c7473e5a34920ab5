//! Reusable UI components

mod back_button;
mod loading;
mod redirect_home;

pub use back_button::*;
pub use loading::*;
pub use redirect_home::*;
