//! Trait for phone verification provider integration

use async_trait::async_trait;

use crate::domain::value_objects::Challenge;
use crate::errors::ProviderError;

/// Hosted phone verification service
#[async_trait]
pub trait VerificationProvider: Send + Sync {
    /// Start a challenge: the provider sends a code to `number`
    ///
    /// `brand` is the display name the provider puts in the SMS text.
    async fn start(&self, number: u64, brand: &str) -> Result<Challenge, ProviderError>;

    /// Check `code` against a previously started challenge
    ///
    /// `Ok(())` only when the provider accepted the code.
    async fn check(&self, challenge: &Challenge, code: &str) -> Result<(), ProviderError>;

    /// Cancel a challenge that will not be checked
    async fn cancel(&self, challenge: &Challenge) -> Result<(), ProviderError>;
}
