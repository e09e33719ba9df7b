//! # Phone Auth Core
//!
//! Core business logic and domain layer for the phone auth backend.
//! This crate contains domain entities, the authentication service, the
//! repository/provider/token-issuer interfaces it depends on, and the error
//! taxonomy that the API layer maps onto HTTP responses.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::entities::{
    Claims, User, DEFAULT_TTL_MINUTES, JWT_AUDIENCE, JWT_ISSUER, TOKEN_TYPE,
};
pub use domain::value_objects::{AccessToken, Challenge};
pub use errors::{DomainError, DomainResult, FieldErrors, ProviderError, TokenError};
pub use repositories::{MockUserRepository, UserRepository};
pub use services::{
    AuthService, AuthServiceConfig, JwtTokenIssuer, TokenIssuer, TokenServiceConfig,
    VerificationProvider,
};
