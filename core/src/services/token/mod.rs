//! Token service module for JWT management
//!
//! This module handles bearer token issuance and verification:
//! - [`TokenIssuer`] is the seam the authentication service and the API guard depend on
//! - [`JwtTokenIssuer`] signs and validates HMAC JWTs with `jsonwebtoken`

mod config;
mod service;


pub use config::TokenServiceConfig;
pub use service::{JwtTokenIssuer, TokenIssuer};
