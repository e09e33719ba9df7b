//! # Infrastructure Layer
//!
//! Concrete implementations of the ports defined in `pa_core`:
//!
//! - **Database**: MySQL connection pool and `UserRepository` using SQLx
//! - **Verify**: Vonage Verify HTTP client and a local mock provider
//!
//! Everything here is wired together by the `pa_api` binary.

// Re-export core types for convenience
pub use pa_core::errors::*;

/// Database module - MySQL implementations using SQLx
pub mod database;

/// Verification provider module - hosted and mock implementations
pub mod verify;

pub use database::{DatabasePool, MySqlUserRepository};
pub use verify::{
    create_verification_provider, ConfiguredVerificationProvider, MockVerificationProvider,
    VonageVerifyClient,
};

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Schema migration error
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// HTTP client error for external services
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
