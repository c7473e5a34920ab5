//! Karm - Dioxus web frontend for phone login
//!
//! Three screens: role picker, phone entry, and OTP code entry. Codes are
//! sent and checked through the otp-backend service at `API_BASE_URL`.
//!
//! ## Running
//!
//! Development (with hot reload):
//! ```bash
//! dx serve --features web
//! ```
//!
//! Against a backend without Twilio credentials:
//! ```bash
//! KARM_OTP_MODE=simulated dx serve --features web
//! ```

#![allow(non_snake_case)]

mod api;
mod app;
mod components;
mod otp;
mod pages;
mod routes;
mod state;
mod types;

fn main() {
    // Initialize logging
    tracing_subscriber::fmt::init();

    dioxus::launch(app::App);
}
