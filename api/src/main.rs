use std::sync::Arc;
use std::time::Duration;

use actix_web::{web, HttpServer};
use anyhow::Context;
use log::{info, warn};

use pa_api::app::create_app;
use pa_api::routes::auth::AppState;
use pa_core::services::auth::{AuthService, AuthServiceConfig};
use pa_core::services::token::{JwtTokenIssuer, TokenServiceConfig};
use pa_infra::database::{DatabasePool, MySqlUserRepository};
use pa_infra::verify::create_verification_provider;
use pa_shared::config::AppConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("failed to load configuration")?;

    // Initialize logger
    let write_style = if config.logging.colored {
        env_logger::WriteStyle::Auto
    } else {
        env_logger::WriteStyle::Never
    };
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.logging.level.as_str()),
    )
    .write_style(write_style)
    .init();

    info!("Starting phone auth API ({})", config.environment);
    if config.jwt.is_using_default_secret() {
        warn!("Using the default JWT secret; set JWT_SECRET before deploying");
    }

    let database = DatabasePool::new(&config.database)
        .await
        .context("failed to connect to the database")?;
    if !config.environment.is_production() {
        database.run_migrations().await?;
    }

    let user_repository = Arc::new(MySqlUserRepository::new(database.pool().clone()));
    let provider = Arc::new(create_verification_provider(&config.verify)?);
    let token_issuer = Arc::new(JwtTokenIssuer::new(TokenServiceConfig::from_jwt_config(
        &config.jwt,
    )?)?);

    let auth_service = AuthService::new(
        user_repository,
        provider,
        token_issuer,
        AuthServiceConfig::from_verify_config(&config.verify),
    );
    let app_state = web::Data::new(AppState::new(auth_service));

    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    let app_config = config.clone();
    let mut server = HttpServer::new(move || create_app(app_state.clone(), &app_config))
        .keep_alive(Duration::from_secs(config.server.keep_alive));
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server.bind(&bind_address)?.run().await?;

    database.close().await;
    info!("Server stopped");
    Ok(())
}
