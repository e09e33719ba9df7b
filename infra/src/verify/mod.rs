//! Phone verification providers
//!
//! - **Vonage**: the hosted Verify API (formerly Nexmo), which generates,
//!   sends and checks the codes
//! - **Mock**: accepts a fixed code and never sends an SMS, for local runs

use async_trait::async_trait;
use pa_core::domain::value_objects::Challenge;
use pa_core::errors::ProviderError;
use pa_core::services::verification::VerificationProvider;
use pa_shared::config::{VerifyConfig, VerifyProvider};
use tracing::info;

use crate::InfrastructureError;

pub mod mock;
pub mod vonage;

pub use mock::MockVerificationProvider;
pub use vonage::{VerifyApiResponse, VonageVerifyClient};

#[cfg(test)]
mod tests;

/// The provider selected by configuration
pub enum ConfiguredVerificationProvider {
    Vonage(VonageVerifyClient),
    Mock(MockVerificationProvider),
}

/// Build the provider named by `verify.provider`
///
/// Fails when the Vonage provider is selected without credentials.
pub fn create_verification_provider(
    config: &VerifyConfig,
) -> Result<ConfiguredVerificationProvider, InfrastructureError> {
    match config.provider {
        VerifyProvider::Vonage => {
            let client = VonageVerifyClient::new(config)?;
            info!("Using Vonage Verify at {}", config.base_url);
            Ok(ConfiguredVerificationProvider::Vonage(client))
        }
        VerifyProvider::Mock => {
            info!("Using mock verification provider, no SMS will be sent");
            Ok(ConfiguredVerificationProvider::Mock(
                MockVerificationProvider::new(config.mock_code.clone()),
            ))
        }
    }
}

#[async_trait]
impl VerificationProvider for ConfiguredVerificationProvider {
    async fn start(&self, number: u64, brand: &str) -> Result<Challenge, ProviderError> {
        match self {
            Self::Vonage(p) => p.start(number, brand).await,
            Self::Mock(p) => p.start(number, brand).await,
        }
    }

    async fn check(&self, challenge: &Challenge, code: &str) -> Result<(), ProviderError> {
        match self {
            Self::Vonage(p) => p.check(challenge, code).await,
            Self::Mock(p) => p.check(challenge, code).await,
        }
    }

    async fn cancel(&self, challenge: &Challenge) -> Result<(), ProviderError> {
        match self {
            Self::Vonage(p) => p.cancel(challenge).await,
            Self::Mock(p) => p.cancel(challenge).await,
        }
    }
}
