//! Shared types for the login screens and the verification API

use serde::{Deserialize, Serialize};

/// Which side of the marketplace the user is signing in as
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Employee,
    Employer,
}

impl Role {
    /// Unknown or missing values fall back to `Employee`
    pub fn from_query(value: &str) -> Self {
        match value {
            "employer" => Role::Employer,
            _ => Role::Employee,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Employee => "employee",
            Role::Employer => "employer",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::Employee => "Employee",
            Role::Employer => "Employer",
        }
    }

    pub fn variants() -> &'static [Role] {
        &[Role::Employee, Role::Employer]
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Delivery channel for the one-time code
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    #[default]
    Sms,
    Whatsapp,
}

// ============================================================================
// API bodies
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct SendOtpBody<'a> {
    pub phone: &'a str,
    pub channel: Channel,
}

#[derive(Debug, Clone, Serialize)]
pub struct VerifyOtpBody<'a> {
    pub phone: &'a str,
    pub code: &'a str,
}

/// Any response from the verification API.
///
/// Success and error bodies share one shape; callers look at `error` first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ApiBody {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub to: Option<String>,
    #[serde(default)]
    pub channel: Option<String>,
    #[serde(default)]
    pub verified: Option<bool>,
    #[serde(default)]
    pub error: Option<String>,
}
