//! Mock verification provider for development
//!
//! Issues random challenge ids and accepts one configured code. Nothing is
//! sent; the would-be SMS is only logged.

use async_trait::async_trait;
use pa_core::domain::value_objects::Challenge;
use pa_core::errors::ProviderError;
use pa_core::services::verification::VerificationProvider;
use pa_shared::utils::phone::mask_msisdn;
use tracing::{debug, info};
use uuid::Uuid;

/// Mock provider accepting a fixed code for every challenge
#[derive(Debug, Clone)]
pub struct MockVerificationProvider {
    accepted_code: String,
}

impl MockVerificationProvider {
    pub fn new(accepted_code: impl Into<String>) -> Self {
        Self {
            accepted_code: accepted_code.into(),
        }
    }
}

impl Default for MockVerificationProvider {
    fn default() -> Self {
        Self::new("1234")
    }
}

#[async_trait]
impl VerificationProvider for MockVerificationProvider {
    async fn start(&self, number: u64, brand: &str) -> Result<Challenge, ProviderError> {
        let challenge = Challenge::new(Uuid::new_v4().simple().to_string());
        info!(
            "[MOCK SMS] {} verification code sent to {} (challenge {})",
            brand,
            mask_msisdn(number),
            challenge
        );
        Ok(challenge)
    }

    async fn check(&self, challenge: &Challenge, code: &str) -> Result<(), ProviderError> {
        if code == self.accepted_code {
            debug!("[MOCK SMS] challenge {} accepted", challenge);
            Ok(())
        } else {
            Err(
                ProviderError::new("The code provided does not match the expected value")
                    .with_status("16"),
            )
        }
    }

    async fn cancel(&self, challenge: &Challenge) -> Result<(), ProviderError> {
        debug!("[MOCK SMS] challenge {} cancelled", challenge);
        Ok(())
    }
}
