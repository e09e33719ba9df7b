//! Token issuance configuration

use serde::{Deserialize, Serialize};

const DEFAULT_SECRET: &str = "your-secret-key-change-in-production";

/// Longest token lifetime accepted, one year in minutes
pub const MAX_TTL_MINUTES: i64 = 525_600;

/// JWT configuration for issued bearer tokens
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// Secret key for signing tokens
    pub secret: String,

    /// Token time-to-live in minutes
    pub ttl_minutes: i64,

    /// JWT issuer claim
    pub issuer: String,

    /// JWT audience claim
    pub audience: String,

    /// Algorithm for JWT signing (HS256, HS384 or HS512)
    #[serde(default = "default_algorithm")]
    pub algorithm: String,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::from(DEFAULT_SECRET),
            ttl_minutes: 60,
            issuer: String::from("phone-auth"),
            audience: String::from("phone-auth-api"),
            algorithm: default_algorithm(),
        }
    }
}

impl JwtConfig {
    /// Create a new JWT configuration with secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Set token time-to-live in minutes
    pub fn with_ttl_minutes(mut self, minutes: i64) -> Self {
        self.ttl_minutes = minutes;
        self
    }

    /// Whether `ttl_minutes` lies in `1..=MAX_TTL_MINUTES`
    pub fn has_valid_ttl(&self) -> bool {
        (1..=MAX_TTL_MINUTES).contains(&self.ttl_minutes)
    }

    /// Check if using default secret (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.secret == DEFAULT_SECRET
    }
}

fn default_algorithm() -> String {
    String::from("HS256")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jwt_config_default() {
        let config = JwtConfig::default();
        assert_eq!(config.ttl_minutes, 60);
        assert!(config.has_valid_ttl());
        assert_eq!(config.algorithm, "HS256");
        assert!(config.is_using_default_secret());
    }

    #[test]
    fn test_jwt_config_builder() {
        let config = JwtConfig::new("my-secret").with_ttl_minutes(15);
        assert_eq!(config.secret, "my-secret");
        assert_eq!(config.ttl_minutes, 15);
        assert!(!config.is_using_default_secret());
    }

    #[test]
    fn test_ttl_bounds() {
        assert!(!JwtConfig::default().with_ttl_minutes(0).has_valid_ttl());
        assert!(!JwtConfig::default().with_ttl_minutes(-5).has_valid_ttl());
        assert!(JwtConfig::default().with_ttl_minutes(MAX_TTL_MINUTES).has_valid_ttl());
        assert!(!JwtConfig::default()
            .with_ttl_minutes(MAX_TTL_MINUTES + 1)
            .has_valid_ttl());
        assert!(!JwtConfig::default().with_ttl_minutes(i64::MAX).has_valid_ttl());
    }
}
