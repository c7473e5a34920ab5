//! CORS allow-list.
//!
//! Only origins from `ALLOWED_ORIGINS` receive `Access-Control-Allow-Origin`,
//! so browsers on other origins cannot read responses. Requests without an
//! `Origin` header (curl, server-to-server) are not affected by CORS at all.

use axum::http::{header::CONTENT_TYPE, HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Build the CORS layer for the configured origins.
///
/// Origins that are not valid header values, and the `*` wildcard (which
/// `AllowOrigin::list` rejects), are skipped with a warning.
pub fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) if value != "*" => Some(value),
            _ => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    tracing::info!(origins = ?allowed_origins, "Configuring CORS allow-list");

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .allow_credentials(true)
}
