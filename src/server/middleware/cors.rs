use std::time::Duration;

use axum::http::HeaderValue;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

/// How long browsers may cache a preflight response.
pub const CORS_MAX_AGE: Duration = Duration::from_secs(3600);

/// Builds the CORS policy shared by the gateway and the services.
///
/// Methods and headers mirror the preflight request since credentials are allowed,
/// which rules out the `*` wildcard.
///
/// # Arguments
/// - `origins` - Exact origins permitted to call the API
pub fn cors_layer(origins: Vec<HeaderValue>) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
        .max_age(CORS_MAX_AGE)
}
