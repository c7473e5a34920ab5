//! HTTP client for the verification API

mod client;

pub use client::*;
