use axum::http::{HeaderValue, Method, header};
use std::io;
use std::time::Duration;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::info;

/// Build a CORS layer from `CORS_ALLOWED_ORIGIN` (comma-separated origins).
///
/// Returns `Ok(None)` when the variable is unset: the functions are then
/// served without CORS headers. A set but empty or
/// malformed value is a startup error.
pub fn cors_layer_from_env() -> io::Result<Option<CorsLayer>> {
    let Ok(origins) = std::env::var("CORS_ALLOWED_ORIGIN") else {
        info!("CORS_ALLOWED_ORIGIN not set, CORS disabled");
        return Ok(None);
    };

    let allowed_origins = parse_origins(&origins)?;
    info!("CORS configured with allowed origins: {}", origins);

    let layer = CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed_origins))
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .max_age(Duration::from_secs(3600));

    Ok(Some(layer))
}

fn parse_origins(raw: &str) -> io::Result<Vec<HeaderValue>> {
    let origins = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<HeaderValue>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Invalid CORS_ALLOWED_ORIGIN value: {}", e),
            )
        })?;

    if origins.is_empty() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "CORS_ALLOWED_ORIGIN cannot be empty",
        ));
    }

    Ok(origins)
}
