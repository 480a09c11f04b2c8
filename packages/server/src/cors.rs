use axum::http::StatusCode;

use crate::event::HttpResponse;

pub const ALLOW_ORIGIN_HEADER: &str = "Access-Control-Allow-Origin";
pub const ALLOW_ORIGIN: &str = "*";

/// Seconds a browser may cache a preflight answer.
pub const PREFLIGHT_MAX_AGE: u64 = 86400;

/// Answer a CORS preflight advertising `methods` (e.g. `"GET, PUT, OPTIONS"`).
pub fn preflight(methods: &str) -> HttpResponse {
    let mut response = HttpResponse::empty(StatusCode::OK);
    response.headers.insert(
        "Access-Control-Allow-Methods".to_string(),
        methods.to_string(),
    );
    response.headers.insert(
        "Access-Control-Allow-Headers".to_string(),
        "Content-Type".to_string(),
    );
    response.headers.insert(
        "Access-Control-Max-Age".to_string(),
        PREFLIGHT_MAX_AGE.to_string(),
    );
    response
}
