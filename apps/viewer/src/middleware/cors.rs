use std::env;

use actix_cors::Cors;
use actix_web::http::header;

/// Build CORS middleware for the read-only view API.
///
/// Origins come from CORS_ALLOWED_ORIGINS (comma-separated, lightly
/// validated). The viewer is a public spectator surface, so an empty
/// configuration allows any origin rather than locking down.
pub fn cors_middleware() -> Cors {
    let allowed_raw = env::var("CORS_ALLOWED_ORIGINS").unwrap_or_default();

    let allowed_origins: Vec<String> = allowed_raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty() && *s != "null")
        .filter(|s| s.starts_with("http://") || s.starts_with("https://"))
        .map(str::to_string)
        .collect();

    let mut cors = Cors::default()
        // The API is strictly read-only
        .allowed_methods(vec!["GET"])
        .allowed_headers(vec![header::CONTENT_TYPE, header::ACCEPT])
        .expose_headers(vec![
            header::HeaderName::from_static("x-trace-id"),
            header::HeaderName::from_static("x-request-id"),
        ])
        .max_age(3600);

    if allowed_origins.is_empty() {
        cors = cors.allow_any_origin();
    } else {
        for origin in allowed_origins {
            cors = cors.allowed_origin(&origin);
        }
    }

    cors
}
