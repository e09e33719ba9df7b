//! Drives the login flow through the crate-root re-exports only

use std::sync::Arc;

use async_trait::async_trait;

use pa_core::{
    AccessToken, AuthService, AuthServiceConfig, Challenge, DomainError, JwtTokenIssuer,
    MockUserRepository, ProviderError, TokenIssuer, TokenServiceConfig, User,
    VerificationProvider, TOKEN_TYPE,
};

struct FixedCodeProvider;

#[async_trait]
impl VerificationProvider for FixedCodeProvider {
    async fn start(&self, _number: u64, _brand: &str) -> Result<Challenge, ProviderError> {
        Ok(Challenge::new("req-root"))
    }

    async fn check(&self, _challenge: &Challenge, code: &str) -> Result<(), ProviderError> {
        if code == "4321" {
            Ok(())
        } else {
            Err(ProviderError::new("The code provided does not match the expected value"))
        }
    }

    async fn cancel(&self, _challenge: &Challenge) -> Result<(), ProviderError> {
        Ok(())
    }
}

#[tokio::test]
async fn test_login_through_root_exports() {
    let repo = Arc::new(MockUserRepository::with_users(vec![User::new(3, 447700900123)]));
    let issuer = Arc::new(JwtTokenIssuer::new(TokenServiceConfig::default()).unwrap());
    let service = AuthService::new(
        Arc::clone(&repo),
        Arc::new(FixedCodeProvider),
        Arc::clone(&issuer),
        AuthServiceConfig::default(),
    );

    let challenge = service.start_verification(447700900123).await.unwrap();
    assert_eq!(challenge.request_id(), "req-root");

    let rejected = service.login("req-root", "0000").await;
    assert!(matches!(rejected, Err(DomainError::Provider(_))));

    let token: AccessToken = service.login("req-root", "4321").await.unwrap();
    assert_eq!(token.token_type, TOKEN_TYPE);

    let claims = issuer.verify(&token.access_token).unwrap();
    assert_eq!(claims.user_id().unwrap(), 3);
}
