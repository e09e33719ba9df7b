//! Domain-specific error types and error handling.
//!
//! Every failure of the authentication flow is one of these variants; the
//! presentation layer maps each one to a single HTTP status.

use std::collections::BTreeMap;

use thiserror::Error;


/// Field name to human-readable messages, ordered for stable output
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// Core domain errors
#[derive(Error, Debug)]
pub enum DomainError {
    /// Missing or malformed request input
    #[error("Validation failed: {}", summarize(.errors))]
    Validation { errors: FieldErrors },

    /// Unknown phone, verification id or token subject
    #[error("{resource} not found")]
    NotFound { resource: String },

    /// The verification provider refused or failed the call
    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error(transparent)]
    Token(#[from] TokenError),

    /// The user store failed
    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainError {
    /// Shorthand for a single-field validation failure
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut errors = FieldErrors::new();
        errors.insert(field.into(), vec![message.into()]);
        DomainError::Validation { errors }
    }

    /// Shorthand for a missing resource
    pub fn not_found(resource: impl Into<String>) -> Self {
        DomainError::NotFound {
            resource: resource.into(),
        }
    }
}

fn summarize(errors: &FieldErrors) -> String {
    errors
        .iter()
        .map(|(field, messages)| format!("{}: {}", field, messages.join(", ")))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Failure reported by the phone verification provider
///
/// `message` is the provider's own text and is surfaced to clients verbatim.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ProviderError {
    /// Provider error text
    pub message: String,
    /// Provider status code, when the provider returned one
    pub status: Option<String>,
}

impl ProviderError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: None,
        }
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }
}

/// Token-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token generation failed")]
    GenerationFailed,

    #[error("Token expired")]
    Expired,

    #[error("Token not yet valid")]
    NotYetValid,

    #[error("Invalid token signature")]
    InvalidSignature,

    #[error("Invalid token format")]
    InvalidFormat,

    #[error("Invalid token claims")]
    InvalidClaims,
}

pub type DomainResult<T> = Result<T, DomainError>;
