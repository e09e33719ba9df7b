//! Vonage Verify API client
//!
//! Talks to the legacy Verify endpoints (`/verify/json`,
//! `/verify/check/json`, `/verify/control/json`) with form-encoded bodies.
//! Every response carries a `status`; `"0"` means success and anything else
//! comes with a human-readable `error_text` that is passed through verbatim.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Deserializer};
use tracing::{debug, error};

use pa_core::domain::value_objects::Challenge;
use pa_core::errors::ProviderError;
use pa_core::services::verification::VerificationProvider;
use pa_shared::config::VerifyConfig;
use pa_shared::utils::phone::mask_msisdn;

use crate::InfrastructureError;

/// Status value the API uses for success
pub const STATUS_OK: &str = "0";

/// Body returned by every Verify endpoint
///
/// Only the fields this service reads are modelled.
#[derive(Debug, Clone, Deserialize)]
pub struct VerifyApiResponse {
    #[serde(default)]
    pub request_id: Option<String>,
    #[serde(deserialize_with = "status_from_string_or_number")]
    pub status: String,
    #[serde(default)]
    pub error_text: Option<String>,
}

impl VerifyApiResponse {
    /// Turn a non-zero status into a provider error
    pub fn into_result(self) -> Result<Self, ProviderError> {
        if self.status == STATUS_OK {
            return Ok(self);
        }
        let message = self.error_text.clone().unwrap_or_else(|| {
            format!("Verification request failed with status {}", self.status)
        });
        Err(ProviderError::new(message).with_status(self.status))
    }
}

fn status_from_string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Status {
        Text(String),
        Number(i64),
    }

    Ok(match Status::deserialize(deserializer)? {
        Status::Text(s) => s,
        Status::Number(n) => n.to_string(),
    })
}

/// HTTP client for the Vonage Verify API
pub struct VonageVerifyClient {
    client: Client,
    config: VerifyConfig,
}

impl VonageVerifyClient {
    /// Create a client; credentials must be present
    pub fn new(config: &VerifyConfig) -> Result<Self, InfrastructureError> {
        if !config.has_credentials() {
            return Err(InfrastructureError::Config(
                "Vonage api_key and api_secret must be set".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.config.base_url.trim_end_matches('/'), path)
    }

    /// Form fields for a start request, credentials excluded
    pub fn start_form(&self, number: u64, brand: &str) -> Vec<(&'static str, String)> {
        let mut form = vec![("number", number.to_string()), ("brand", brand.to_string())];
        if let Some(length) = self.config.code_length {
            form.push(("code_length", length.to_string()));
        }
        if let Some(expiry) = self.config.pin_expiry {
            form.push(("pin_expiry", expiry.to_string()));
        }
        if let Some(workflow) = self.config.workflow_id {
            form.push(("workflow_id", workflow.to_string()));
        }
        form
    }

    async fn post(
        &self,
        path: &str,
        mut form: Vec<(&'static str, String)>,
    ) -> Result<VerifyApiResponse, ProviderError> {
        form.push(("api_key", self.config.api_key.clone()));
        form.push(("api_secret", self.config.api_secret.clone()));

        let response = self
            .client
            .post(self.endpoint(path))
            .form(&form)
            .send()
            .await
            .map_err(|e| {
                error!("Request to Vonage {} failed: {}", path, e);
                ProviderError::new(e.to_string())
            })?;

        let http_status = response.status();
        let body = response.json::<VerifyApiResponse>().await.map_err(|e| {
            error!(
                "Failed to parse Vonage {} response (HTTP {}): {}",
                path, http_status, e
            );
            ProviderError::new(e.to_string())
        })?;

        body.into_result()
    }
}

#[async_trait]
impl VerificationProvider for VonageVerifyClient {
    async fn start(&self, number: u64, brand: &str) -> Result<Challenge, ProviderError> {
        let response = self
            .post("verify/json", self.start_form(number, brand))
            .await?;

        let request_id = response
            .request_id
            .filter(|id| !id.is_empty())
            .ok_or_else(|| ProviderError::new("Verification response did not include a request_id"))?;

        debug!(
            "Vonage verification {} started for {}",
            request_id,
            mask_msisdn(number)
        );
        Ok(Challenge::new(request_id))
    }

    async fn check(&self, challenge: &Challenge, code: &str) -> Result<(), ProviderError> {
        let form = vec![
            ("request_id", challenge.request_id().to_string()),
            ("code", code.to_string()),
        ];
        self.post("verify/check/json", form).await?;
        debug!("Vonage verification {} checked", challenge);
        Ok(())
    }

    async fn cancel(&self, challenge: &Challenge) -> Result<(), ProviderError> {
        let form = vec![
            ("request_id", challenge.request_id().to_string()),
            ("cmd", "cancel".to_string()),
        ];
        self.post("verify/control/json", form).await?;
        debug!("Vonage verification {} cancelled", challenge);
        Ok(())
    }
}
