use actix_cors::Cors;
use actix_web::http::header::{self, HeaderName};

const ALLOWED_METHODS: [&str; 3] = ["GET", "POST", "OPTIONS"];
const MAX_AGE_SECS: usize = 3600;

/// Any origin may call the API. Preflight requests are answered here for
/// every route, and the allowed request headers are limited to the ones
/// browser clients send.
pub fn cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .send_wildcard()
        .allowed_methods(ALLOWED_METHODS)
        .allowed_headers([
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            HeaderName::from_static("x-client-info"),
            HeaderName::from_static("apikey"),
        ])
        .max_age(MAX_AGE_SECS)
}
