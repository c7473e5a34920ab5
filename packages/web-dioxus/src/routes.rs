//! Route definitions for the application

use dioxus::prelude::*;

use crate::components::RedirectHome;
use crate::pages::{Login, OtpVerification, Welcome};

/// All application routes
#[derive(Clone, Debug, PartialEq, Routable)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Welcome {},

    #[route("/login?:role")]
    Login { role: String },

    #[route("/otp-verification/:phone")]
    OtpVerification { phone: String },

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

/// Unknown paths go back to the landing screen
#[component]
fn NotFound(segments: Vec<String>) -> Element {
    tracing::debug!(path = %segments.join("/"), "unknown route");
    rsx! { RedirectHome {} }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_paths() {
        assert_eq!(Route::Welcome {}.to_string(), "/");
        assert_eq!(
            Route::Login {
                role: "employer".to_string()
            }
            .to_string(),
            "/login?role=employer"
        );
    }

    #[test]
    fn test_parse_routes() {
        assert_eq!("/".parse::<Route>().ok(), Some(Route::Welcome {}));
        assert_eq!(
            "/otp-verification/919876543210".parse::<Route>().ok(),
            Some(Route::OtpVerification {
                phone: "919876543210".to_string()
            })
        );
        assert!(matches!(
            "/somewhere/else".parse::<Route>(),
            Ok(Route::NotFound { .. })
        ));
    }
}
