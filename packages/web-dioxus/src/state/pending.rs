//! The number a code was just sent to
//!
//! Set by the phone entry screen after a successful send. The code entry
//! screen only opens for that exact number, so a hand-typed or shared
//! `/otp-verification/...` link cannot start a flow on its own.

use dioxus::prelude::*;

use super::is_e164;

#[derive(Clone, Copy)]
pub struct PendingVerification {
    phone: Signal<Option<String>>,
}

impl PendingVerification {
    pub fn new() -> Self {
        Self {
            phone: Signal::new(None),
        }
    }

    /// Record that a code went out to `phone`
    pub fn start(&mut self, phone: impl Into<String>) {
        self.phone.set(Some(phone.into()));
    }

    pub fn allows(&self, phone: &str) -> bool {
        allows_code_entry(self.phone.peek().as_deref(), phone)
    }
}

/// Code entry is reachable only for a well-formed number that was just sent
pub fn allows_code_entry(pending: Option<&str>, requested: &str) -> bool {
    let requested = route_phone(requested);
    is_e164(&requested) && pending == Some(requested.as_str())
}

/// The `+` of a path segment may arrive percent-encoded
pub fn route_phone(raw: &str) -> String {
    match raw.get(..3) {
        Some(prefix) if prefix.eq_ignore_ascii_case("%2B") => format!("+{}", &raw[3..]),
        _ => raw.to_string(),
    }
}

pub fn use_pending_verification() -> PendingVerification {
    use_context::<PendingVerification>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deep_link_without_send_is_refused() {
        assert!(!allows_code_entry(None, "+919876543210"));
    }

    #[test]
    fn test_only_the_sent_number_is_allowed() {
        assert!(allows_code_entry(Some("+919876543210"), "+919876543210"));
        assert!(!allows_code_entry(Some("+919876543210"), "+919999999999"));
    }

    #[test]
    fn test_encoded_plus_is_accepted() {
        assert!(allows_code_entry(Some("+919876543210"), "%2B919876543210"));
        assert_eq!(route_phone("%2b91"), "+91");
        assert_eq!(route_phone("+91"), "+91");
    }

    #[test]
    fn test_malformed_number_is_refused() {
        assert!(!allows_code_entry(Some("not-a-phone"), "not-a-phone"));
    }
}
