//! Tests for the mock provider and the provider factory

use pa_core::domain::value_objects::Challenge;
use pa_core::services::verification::VerificationProvider;
use pa_shared::config::{VerifyConfig, VerifyProvider};

use crate::verify::{create_verification_provider, ConfiguredVerificationProvider, MockVerificationProvider};
use crate::InfrastructureError;

#[tokio::test]
async fn test_mock_issues_distinct_challenges() {
    let provider = MockVerificationProvider::default();

    let first = provider.start(447700900123, "Brand").await.unwrap();
    let second = provider.start(447700900123, "Brand").await.unwrap();

    assert!(!first.request_id().is_empty());
    assert_ne!(first, second);
}

#[tokio::test]
async fn test_mock_accepts_only_configured_code() {
    let provider = MockVerificationProvider::new("5678");
    let challenge = Challenge::new("any");

    assert!(provider.check(&challenge, "5678").await.is_ok());

    let err = provider.check(&challenge, "1234").await.unwrap_err();
    assert_eq!(err.status.as_deref(), Some("16"));
    assert!(!err.message.is_empty());
}

#[tokio::test]
async fn test_factory_defaults_to_mock() {
    let config = VerifyConfig {
        mock_code: "0000".to_string(),
        ..Default::default()
    };

    let provider = create_verification_provider(&config).unwrap();
    assert!(matches!(provider, ConfiguredVerificationProvider::Mock(_)));

    let challenge = provider.start(14155550100, "Brand").await.unwrap();
    assert!(provider.check(&challenge, "0000").await.is_ok());
    assert!(provider.cancel(&challenge).await.is_ok());
}

#[test]
fn test_factory_rejects_vonage_without_credentials() {
    let config = VerifyConfig {
        provider: VerifyProvider::Vonage,
        ..Default::default()
    };

    let result = create_verification_provider(&config);
    assert!(matches!(result, Err(InfrastructureError::Config(_))));
}

#[test]
fn test_factory_builds_vonage_client() {
    let config = VerifyConfig {
        provider: VerifyProvider::Vonage,
        api_key: "key".to_string(),
        api_secret: "secret".to_string(),
        ..Default::default()
    };

    let provider = create_verification_provider(&config).unwrap();
    assert!(matches!(provider, ConfiguredVerificationProvider::Vonage(_)));
}
