//! Phone verification provider configuration

use serde::{Deserialize, Serialize};

/// Which verification provider backs the service
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VerifyProvider {
    /// Vonage (formerly Nexmo) Verify API
    Vonage,
    /// Local mock that accepts a fixed code and logs instead of sending SMS
    #[default]
    Mock,
}

/// Verification provider settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct VerifyConfig {
    /// Provider implementation
    #[serde(default)]
    pub provider: VerifyProvider,

    /// Provider API key
    #[serde(default)]
    pub api_key: String,

    /// Provider API secret
    #[serde(default)]
    pub api_secret: String,

    /// Brand/display name shown in the SMS ("Your <brand> code is ...")
    #[serde(default = "default_brand")]
    pub brand: String,

    /// Base URL of the Verify API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Code length requested from the provider (4 or 6)
    #[serde(default)]
    pub code_length: Option<u8>,

    /// Challenge lifetime in seconds (provider side)
    #[serde(default)]
    pub pin_expiry: Option<u32>,

    /// Provider delivery workflow id
    #[serde(default)]
    pub workflow_id: Option<u8>,

    /// Timeout for provider requests in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    /// Code accepted by the mock provider
    #[serde(default = "default_mock_code")]
    pub mock_code: String,
}

impl Default for VerifyConfig {
    fn default() -> Self {
        Self {
            provider: VerifyProvider::default(),
            api_key: String::new(),
            api_secret: String::new(),
            brand: default_brand(),
            base_url: default_base_url(),
            code_length: None,
            pin_expiry: None,
            workflow_id: None,
            request_timeout_secs: default_request_timeout(),
            mock_code: default_mock_code(),
        }
    }
}

impl VerifyConfig {
    /// Whether credentials for a hosted provider are present
    pub fn has_credentials(&self) -> bool {
        !self.api_key.is_empty() && !self.api_secret.is_empty()
    }
}

fn default_brand() -> String {
    String::from("Phone Auth")
}

fn default_base_url() -> String {
    String::from("https://api.nexmo.com")
}

fn default_request_timeout() -> u64 {
    30
}

fn default_mock_code() -> String {
    String::from("1234")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verify_config_default() {
        let config = VerifyConfig::default();
        assert_eq!(config.provider, VerifyProvider::Mock);
        assert_eq!(config.base_url, "https://api.nexmo.com");
        assert!(!config.has_credentials());
    }

    #[test]
    fn test_provider_deserialization() {
        let provider: VerifyProvider = serde_json::from_str("\"vonage\"").unwrap();
        assert_eq!(provider, VerifyProvider::Vonage);
    }
}
