//! Main authentication service implementation

use std::sync::Arc;

use pa_shared::utils::phone::mask_msisdn;
use tracing::{debug, info, warn};

use crate::domain::entities::user::User;
use crate::domain::value_objects::{AccessToken, Challenge};
use crate::errors::{DomainError, DomainResult};
use crate::repositories::UserRepository;
use crate::services::token::TokenIssuer;
use crate::services::verification::VerificationProvider;

use super::config::AuthServiceConfig;

/// Authentication service orchestrating the user store, the verification
/// provider and the token issuer
///
/// Holds no per-request state; every call reads and writes the user store.
pub struct AuthService<U, P, T>
where
    U: UserRepository,
    P: VerificationProvider,
    T: TokenIssuer,
{
    /// User repository for database operations
    user_repository: Arc<U>,
    /// Hosted verification service
    provider: Arc<P>,
    /// Bearer token issuer
    token_issuer: Arc<T>,
    /// Service configuration
    config: AuthServiceConfig,
}

impl<U, P, T> AuthService<U, P, T>
where
    U: UserRepository,
    P: VerificationProvider,
    T: TokenIssuer,
{
    /// Create a new authentication service
    pub fn new(
        user_repository: Arc<U>,
        provider: Arc<P>,
        token_issuer: Arc<T>,
        config: AuthServiceConfig,
    ) -> Self {
        Self {
            user_repository,
            provider,
            token_issuer,
            config,
        }
    }

    /// The token issuer, shared with the request guard
    pub fn token_issuer(&self) -> Arc<T> {
        Arc::clone(&self.token_issuer)
    }

    /// Start a phone verification for a registered user
    ///
    /// This method:
    /// 1. Looks up the user by phone; unknown phones fail with `NotFound`
    ///    before the provider is contacted
    /// 2. Cancels the user's outstanding challenge, if any
    /// 3. Asks the provider to send a code
    /// 4. Stores the new challenge id on the user
    ///
    /// # Returns
    ///
    /// * `Ok(Challenge)` - The provider challenge now pending for the user
    /// * `Err(DomainError::NotFound)` - No user with this phone
    /// * `Err(DomainError::Provider)` - The provider refused or failed
    pub async fn start_verification(&self, phone: u64) -> DomainResult<Challenge> {
        let mut user = self
            .user_repository
            .find_by_phone(phone)
            .await?
            .ok_or_else(|| {
                info!("Verification requested for unknown phone {}", mask_msisdn(phone));
                DomainError::not_found("User")
            })?;

        if let Some(previous) = user.verification_id.clone() {
            self.cancel_quietly(&user, Challenge::new(previous)).await;
        }

        let challenge = self
            .provider
            .start(user.phone, &self.config.brand)
            .await
            .map_err(|e| {
                warn!(
                    "Provider refused to start verification for {}: {} (status {:?})",
                    mask_msisdn(user.phone),
                    e.message,
                    e.status
                );
                DomainError::Provider(e)
            })?;

        user.start_verification(challenge.request_id());
        self.user_repository.update(user).await?;

        info!(
            "Verification {} started for {}",
            challenge,
            mask_msisdn(phone)
        );
        Ok(challenge)
    }

    /// Exchange a challenge id and code for a bearer token
    ///
    /// The challenge is single-use: once the provider accepts the code, the
    /// stored id is cleared and a replay fails with `NotFound`. A rejected
    /// code leaves the user untouched so the provider's own attempt limit
    /// governs retries.
    ///
    /// # Returns
    ///
    /// * `Ok(AccessToken)` - Bearer token envelope
    /// * `Err(DomainError::NotFound)` - No user holds this challenge id
    /// * `Err(DomainError::Provider)` - The provider rejected the code or failed
    pub async fn login(&self, verification_id: &str, code: &str) -> DomainResult<AccessToken> {
        let mut user = self
            .user_repository
            .find_by_verification_id(verification_id)
            .await?
            .ok_or_else(|| {
                info!("Login attempted with unknown verification id {}", verification_id);
                DomainError::not_found("User")
            })?;

        let challenge = Challenge::new(verification_id);
        self.provider.check(&challenge, code).await.map_err(|e| {
            warn!(
                "Provider rejected code for verification {}: {} (status {:?})",
                challenge, e.message, e.status
            );
            DomainError::Provider(e)
        })?;

        user.complete_verification(code);
        let user = self.user_repository.update(user).await?;

        let token = self.token_issuer.issue(&user)?;
        info!("User {} logged in via verification {}", user.id, challenge);

        Ok(AccessToken::bearer(token, self.token_issuer.ttl_minutes()))
    }

    /// Load the user a validated token was issued for
    pub async fn current_user(&self, user_id: u64) -> DomainResult<User> {
        self.user_repository
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| DomainError::not_found("User"))
    }

    async fn cancel_quietly(&self, user: &User, challenge: Challenge) {
        match self.provider.cancel(&challenge).await {
            Ok(()) => debug!("Cancelled verification {} for user {}", challenge, user.id),
            Err(e) => warn!(
                "Could not cancel verification {} for user {}: {}",
                challenge, user.id, e
            ),
        }
    }
}
