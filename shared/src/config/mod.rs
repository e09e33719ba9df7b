//! Configuration module with business-specific sub-modules
//!
//! - `auth` - bearer token (JWT) issuance
//! - `database` - user store connection pool
//! - `environment` - environment detection and logging
//! - `server` - HTTP server and CORS
//! - `verify` - phone verification provider
//!
//! [`AppConfig::load`] layers built-in defaults, an optional `config.toml`,
//! `APP__SECTION__KEY` environment variables and finally a handful of
//! conventional flat variables (`DATABASE_URL`, `JWT_SECRET`, ...).

pub mod auth;
pub mod database;
pub mod environment;
pub mod server;
pub mod verify;

use config::{Config, File, FileFormat};
use serde::{Deserialize, Serialize};

pub use auth::{JwtConfig, MAX_TTL_MINUTES};
pub use database::DatabaseConfig;
pub use environment::{Environment, LoggingConfig};
pub use server::{CorsConfig, ServerConfig};
pub use verify::{VerifyConfig, VerifyProvider};

/// Errors raised while loading or validating configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Server configuration
    pub server: ServerConfig,

    /// CORS configuration
    #[serde(default)]
    pub cors: CorsConfig,

    /// Database configuration
    pub database: DatabaseConfig,

    /// Token issuance configuration
    pub jwt: JwtConfig,

    /// Verification provider configuration
    pub verify: VerifyConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::for_environment(Environment::default())
    }
}

impl AppConfig {
    /// Defaults appropriate for the given environment
    pub fn for_environment(environment: Environment) -> Self {
        let server = if environment.is_production() {
            ServerConfig::new("0.0.0.0", 8080)
        } else {
            ServerConfig::default()
        };
        let database = if environment.is_production() {
            DatabaseConfig::default().with_max_connections(50)
        } else {
            DatabaseConfig::default()
        };

        Self {
            environment,
            server,
            cors: CorsConfig::default(),
            database,
            jwt: JwtConfig::default(),
            verify: VerifyConfig::default(),
            logging: LoggingConfig::for_environment(environment),
        }
    }

    /// Load configuration from defaults, `config.toml` and the environment
    pub fn load() -> Result<Self, ConfigError> {
        let environment = Environment::from_env();
        dotenvy::from_filename(environment.env_file()).ok();
        dotenvy::dotenv().ok();

        Self::load_from("config.toml", environment)
    }

    /// Load configuration using an explicit settings file path
    pub fn load_from(path: &str, environment: Environment) -> Result<Self, ConfigError> {
        let defaults = Config::try_from(&Self::for_environment(environment))?;

        let settings = Config::builder()
            .add_source(defaults)
            .add_source(File::with_name(path).format(FileFormat::Toml).required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("cors.allowed_origins"),
            )
            .set_override_option("database.url", std::env::var("DATABASE_URL").ok())?
            .set_override_option("jwt.secret", std::env::var("JWT_SECRET").ok())?
            .set_override_option(
                "jwt.ttl_minutes",
                std::env::var("JWT_TTL").ok().and_then(|v| v.parse::<i64>().ok()),
            )?
            .set_override_option("verify.api_key", std::env::var("VONAGE_API_KEY").ok())?
            .set_override_option("verify.api_secret", std::env::var("VONAGE_API_SECRET").ok())?
            .set_override_option("verify.brand", std::env::var("VONAGE_BRAND").ok())?
            .build()?;

        let config: Self = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings the service cannot safely run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.jwt.has_valid_ttl() {
            return Err(ConfigError::Invalid(format!(
                "jwt.ttl_minutes must be between 1 and {}",
                MAX_TTL_MINUTES
            )));
        }
        if self.environment.is_production() && self.jwt.is_using_default_secret() {
            return Err(ConfigError::Invalid(
                "jwt.secret must be set in production".to_string(),
            ));
        }
        if self.verify.provider == VerifyProvider::Vonage && !self.verify.has_credentials() {
            return Err(ConfigError::Invalid(
                "verify.api_key and verify.api_secret are required for the vonage provider"
                    .to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.verify.provider, VerifyProvider::Mock);
    }

    #[test]
    fn test_production_requires_secret() {
        let config = AppConfig::for_environment(Environment::Production);
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_vonage_requires_credentials() {
        let mut config = AppConfig::default();
        config.verify.provider = VerifyProvider::Vonage;
        assert!(config.validate().is_err());

        config.verify.api_key = "key".to_string();
        config.verify.api_secret = "secret".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_ttl_out_of_range_is_rejected() {
        let mut config = AppConfig::default();
        for ttl in [0, -1, MAX_TTL_MINUTES + 1, i64::MAX] {
            config.jwt.ttl_minutes = ttl;
            assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
        }

        config.jwt.ttl_minutes = MAX_TTL_MINUTES;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_missing_file_uses_defaults() {
        let config = AppConfig::load_from("does-not-exist.toml", Environment::Staging).unwrap();
        assert_eq!(config.environment, Environment::Staging);
        assert!(config.jwt.ttl_minutes > 0);
    }
}
