use pa_core::errors::{DomainError, FieldErrors};
use pa_shared::phone::is_valid_msisdn;
use serde::{Deserialize, Deserializer, Serialize};
use validator::{Validate, ValidationErrors};

/// Body of `POST /api/verify`
///
/// `phone` may be sent as a JSON number or as a string of digits.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct VerifyRequest {
    #[serde(default, deserialize_with = "string_or_number")]
    #[validate(required(message = "The phone field is required."))]
    pub phone: Option<String>,
}

impl VerifyRequest {
    /// Validate the body and return the phone as an integer
    pub fn validated_phone(&self) -> Result<u64, DomainError> {
        self.validate().map_err(validation_error)?;

        let phone = self.phone.as_deref().unwrap_or_default().trim();
        if !is_valid_msisdn(phone) {
            return Err(DomainError::validation(
                "phone",
                "The phone must be an integer.",
            ));
        }
        phone
            .parse::<u64>()
            .map_err(|_| DomainError::validation("phone", "The phone must be an integer."))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyResponse {
    pub verification_id: String,
}

/// Body of `POST /api/login`
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[serde(default, deserialize_with = "string_or_number")]
    #[validate(
        required(message = "The code field is required."),
        length(min = 1, message = "The code field is required.")
    )]
    pub code: Option<String>,

    #[serde(default)]
    #[validate(
        required(message = "The verification id field is required."),
        length(min = 1, message = "The verification id field is required.")
    )]
    pub verification_id: Option<String>,
}

impl LoginRequest {
    /// Validate the body and return `(verification_id, code)`
    pub fn validated(&self) -> Result<(&str, &str), DomainError> {
        self.validate().map_err(validation_error)?;

        match (self.verification_id.as_deref(), self.code.as_deref()) {
            (Some(verification_id), Some(code)) => Ok((verification_id, code)),
            _ => Err(DomainError::Internal {
                message: "validated login request is missing fields".to_string(),
            }),
        }
    }
}

/// Response of `GET /api/me`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeResponse {
    pub id: u64,
    pub phone: u64,
}

/// Convert `validator` output into field errors
pub fn validation_error(errors: ValidationErrors) -> DomainError {
    let mut fields = FieldErrors::new();
    for (field, errors) in errors.field_errors() {
        let messages = errors
            .iter()
            .map(|e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string())
            })
            .collect();
        fields.insert(field.to_string(), messages);
    }
    DomainError::Validation { errors: fields }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(Option::<Raw>::deserialize(deserializer)?.map(|raw| match raw {
        Raw::Text(s) => s,
        Raw::Number(n) => n.to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_accepts_number_and_digit_string() {
        let request: VerifyRequest = serde_json::from_str(r#"{"phone": 447700900123}"#).unwrap();
        assert_eq!(request.validated_phone().unwrap(), 447700900123);

        let request: VerifyRequest =
            serde_json::from_str(r#"{"phone": "447700900123"}"#).unwrap();
        assert_eq!(request.validated_phone().unwrap(), 447700900123);
    }

    #[test]
    fn test_phone_missing_or_malformed() {
        let request: VerifyRequest = serde_json::from_str("{}").unwrap();
        match request.validated_phone() {
            Err(DomainError::Validation { errors }) => {
                assert_eq!(errors["phone"], vec!["The phone field is required."]);
            }
            other => panic!("expected validation error, got {other:?}"),
        }

        let request: VerifyRequest = serde_json::from_str(r#"{"phone": "+44 7700"}"#).unwrap();
        assert!(matches!(
            request.validated_phone(),
            Err(DomainError::Validation { .. })
        ));

        let request: VerifyRequest = serde_json::from_str(r#"{"phone": 12.5}"#).unwrap();
        assert!(request.validated_phone().is_err());
    }

    #[test]
    fn test_login_requires_both_fields() {
        let request: LoginRequest = serde_json::from_str(r#"{"code": 1234}"#).unwrap();
        match request.validated() {
            Err(DomainError::Validation { errors }) => {
                assert!(errors.contains_key("verification_id"));
                assert!(!errors.contains_key("code"));
            }
            other => panic!("expected validation error, got {other:?}"),
        }

        let request: LoginRequest =
            serde_json::from_str(r#"{"code": "", "verification_id": "abc"}"#).unwrap();
        assert!(request.validated().is_err());

        let request: LoginRequest =
            serde_json::from_str(r#"{"code": 1234, "verification_id": "abc"}"#).unwrap();
        assert_eq!(request.validated().unwrap(), ("abc", "1234"));
    }
}
