use poem::middleware::Cors;
use std::env;

/// Initialize CORS middleware for browser clients
///
/// Environment variables:
/// - CORS_ALLOWED_ORIGINS: Comma-separated list of allowed origins
///   (default: any origin)
pub fn init_cors() -> Cors {
    let cors = Cors::new()
        .allow_methods(vec!["GET", "POST", "OPTIONS"])
        .allow_headers(vec!["content-type"]);

    match env::var("CORS_ALLOWED_ORIGINS") {
        Ok(origins) => cors.allow_origins(
            origins
                .split(',')
                .map(str::trim)
                .filter(|o| !o.is_empty())
                .collect::<Vec<_>>(),
        ),
        Err(_) => cors,
    }
}
