//! Configuration for the authentication service

use pa_shared::config::VerifyConfig;

/// Configuration for the authentication service
#[derive(Debug, Clone)]
pub struct AuthServiceConfig {
    /// Brand name the provider shows in the verification SMS
    pub brand: String,
}

impl Default for AuthServiceConfig {
    fn default() -> Self {
        Self {
            brand: "Phone Auth".to_string(),
        }
    }
}

impl AuthServiceConfig {
    /// Build from the shared verification configuration section
    pub fn from_verify_config(config: &VerifyConfig) -> Self {
        Self {
            brand: config.brand.clone(),
        }
    }
}
