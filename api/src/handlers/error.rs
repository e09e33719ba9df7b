use actix_web::{
    error::{InternalError, JsonPayloadError},
    http::StatusCode,
    HttpRequest, HttpResponse,
};
use pa_core::errors::{DomainError, FieldErrors, TokenError};

use crate::dto::ErrorResponse;

const INTERNAL_MESSAGE: &str = "An internal error occurred";

/// Map a domain error onto the HTTP response clients see
///
/// Server-side failures are logged in full but answered with a generic
/// message.
pub fn handle_domain_error(error: DomainError) -> HttpResponse {
    match error {
        DomainError::Validation { errors } => {
            log::debug!("Validation failed: {:?}", errors);
            ErrorResponse::new("validation_error", "The given data was invalid.")
                .with_details(errors)
                .to_response(StatusCode::UNPROCESSABLE_ENTITY)
        }
        DomainError::NotFound { .. } => {
            ErrorResponse::new("not_found", error.to_string()).to_response(StatusCode::NOT_FOUND)
        }
        DomainError::Provider(provider_error) => {
            log::warn!(
                "Verification provider error (status {:?}): {}",
                provider_error.status,
                provider_error.message
            );
            ErrorResponse::new("verification_failed", provider_error.message)
                .to_response(StatusCode::BAD_REQUEST)
        }
        DomainError::Token(TokenError::GenerationFailed) => {
            log::error!("Token generation failed");
            ErrorResponse::new("internal_error", INTERNAL_MESSAGE)
                .to_response(StatusCode::INTERNAL_SERVER_ERROR)
        }
        DomainError::Token(token_error) => {
            ErrorResponse::new("invalid_token", token_error.to_string())
                .to_response(StatusCode::UNAUTHORIZED)
        }
        DomainError::Database(_) | DomainError::Internal { .. } => {
            log::error!("Request failed: {}", error);
            ErrorResponse::new("internal_error", INTERNAL_MESSAGE)
                .to_response(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Error handler for `web::JsonConfig`
///
/// Malformed or mistyped bodies get the same 422 envelope as failed
/// validation.
pub fn handle_json_error(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let response = match &err {
        JsonPayloadError::Overflow { .. } | JsonPayloadError::OverflowKnownLength { .. } => {
            ErrorResponse::new("payload_too_large", err.to_string())
                .to_response(StatusCode::PAYLOAD_TOO_LARGE)
        }
        _ => {
            let mut details = FieldErrors::new();
            details.insert("body".to_string(), vec![err.to_string()]);
            ErrorResponse::new("validation_error", "The given data was invalid.")
                .with_details(details)
                .to_response(StatusCode::UNPROCESSABLE_ENTITY)
        }
    };
    InternalError::from_response(err, response).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pa_core::errors::ProviderError;

    #[test]
    fn test_status_mapping() {
        let cases = vec![
            (DomainError::validation("phone", "required"), StatusCode::UNPROCESSABLE_ENTITY),
            (DomainError::not_found("User"), StatusCode::NOT_FOUND),
            (
                DomainError::Provider(ProviderError::new("Throttled")),
                StatusCode::BAD_REQUEST,
            ),
            (DomainError::Token(TokenError::Expired), StatusCode::UNAUTHORIZED),
            (
                DomainError::Token(TokenError::GenerationFailed),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                DomainError::Database("connection reset".to_string()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected) in cases {
            assert_eq!(handle_domain_error(error).status(), expected);
        }
    }
}
