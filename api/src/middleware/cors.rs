//! CORS middleware configuration for cross-origin requests.
//!
//! Outside production an empty origin list means any origin is allowed. In
//! production only the configured origins are accepted.

use actix_cors::Cors;
use actix_web::http::{header, Method};
use pa_shared::config::{CorsConfig, Environment};

/// Creates a CORS middleware instance for the given environment.
pub fn create_cors(config: &CorsConfig, environment: Environment) -> Cors {
    let mut cors = Cors::default()
        .allowed_methods(vec![Method::GET, Method::POST, Method::OPTIONS])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .max_age(config.max_age);

    if config.allowed_origins.is_empty() && !environment.is_production() {
        log::info!("Configuring permissive CORS for {}", environment);
        return cors.allow_any_origin();
    }

    for origin in config.allowed_origins.iter().map(|s| s.trim()) {
        if !origin.is_empty() {
            log::info!("Adding allowed origin: {}", origin);
            cors = cors.allowed_origin(origin);
        }
    }

    cors
}
