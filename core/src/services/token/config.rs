//! Configuration for the token service

use jsonwebtoken::Algorithm;
use pa_shared::config::JwtConfig;

use crate::domain::entities::token::{DEFAULT_TTL_MINUTES, JWT_AUDIENCE, JWT_ISSUER};
use crate::errors::DomainError;

/// Configuration for the token service
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// JWT signing secret
    pub jwt_secret: String,
    /// JWT signing algorithm (HMAC family)
    pub algorithm: Algorithm,
    /// Token lifetime in minutes
    pub ttl_minutes: i64,
    /// `iss` claim
    pub issuer: String,
    /// `aud` claim
    pub audience: String,
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self {
            jwt_secret: "development-secret-please-change-in-production".to_string(),
            algorithm: Algorithm::HS256,
            ttl_minutes: DEFAULT_TTL_MINUTES,
            issuer: JWT_ISSUER.to_string(),
            audience: JWT_AUDIENCE.to_string(),
        }
    }
}

impl TokenServiceConfig {
    /// Build from the shared JWT configuration section
    pub fn from_jwt_config(config: &JwtConfig) -> Result<Self, DomainError> {
        let algorithm = match config.algorithm.to_uppercase().as_str() {
            "HS256" => Algorithm::HS256,
            "HS384" => Algorithm::HS384,
            "HS512" => Algorithm::HS512,
            other => {
                return Err(DomainError::Internal {
                    message: format!("Unsupported JWT algorithm: {}", other),
                })
            }
        };

        Ok(Self {
            jwt_secret: config.secret.clone(),
            algorithm,
            ttl_minutes: config.ttl_minutes,
            issuer: config.issuer.clone(),
            audience: config.audience.clone(),
        })
    }
}
