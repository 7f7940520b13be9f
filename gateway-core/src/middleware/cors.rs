use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

/// CORS policy accepting any origin, method and header, with credentials.
///
/// Browsers reject `Access-Control-Allow-Origin: *` on credentialed
/// requests, so the caller's origin and requested method/headers are
/// mirrored back instead of wildcards.
pub fn permissive_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}
