//! Shared utilities and common types for the phone auth server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types and the layered loader
//! - Utility functions (phone masking and validation)

pub mod config;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, ConfigError, CorsConfig, DatabaseConfig, Environment, JwtConfig, LoggingConfig,
    ServerConfig, VerifyConfig, VerifyProvider, MAX_TTL_MINUTES,
};
pub use utils::phone;
