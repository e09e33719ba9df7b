//! Application factory
//!
//! Builds the Actix-web application around an [`AppState`] so the binary and
//! the integration tests share one route table.

use std::sync::Arc;

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    http::StatusCode,
    middleware::Logger,
    web, App, Error, HttpResponse,
};

use pa_core::repositories::UserRepository;
use pa_core::services::token::TokenIssuer;
use pa_core::services::verification::VerificationProvider;
use pa_shared::config::AppConfig;

use crate::dto::ErrorResponse;
use crate::handlers::error::handle_json_error;
use crate::middleware::{auth::JwtAuth, cors::create_cors};
use crate::routes::auth::{login, me, verify, AppState};

/// Create and configure the application with all dependencies
pub fn create_app<U, P, T>(
    app_state: web::Data<AppState<U, P, T>>,
    config: &AppConfig,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
>
where
    U: UserRepository + 'static,
    P: VerificationProvider + 'static,
    T: TokenIssuer + 'static,
{
    let issuer: Arc<dyn TokenIssuer> = app_state.auth_service.token_issuer();
    let cors = create_cors(&config.cors, config.environment);
    let json_config = web::JsonConfig::default()
        .limit(config.server.max_payload_size)
        .error_handler(handle_json_error);
    let form_config = web::FormConfig::default().limit(config.server.max_payload_size);

    App::new()
        .app_data(app_state)
        .app_data(json_config)
        .app_data(form_config)
        .wrap(cors)
        .wrap(Logger::default())
        .route("/health", web::get().to(health_check))
        .service(
            web::scope("/api")
                .route("/verify", web::post().to(verify::<U, P, T>))
                .route("/login", web::post().to(login::<U, P, T>))
                .service(
                    web::resource("/me")
                        .wrap(JwtAuth::new(issuer))
                        .route(web::get().to(me::<U, P, T>)),
                ),
        )
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "phone-auth-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    ErrorResponse::new("not_found", "The requested resource was not found")
        .to_response(StatusCode::NOT_FOUND)
}
