//! Authentication service module
//!
//! Phone login in two steps:
//! - `start_verification`: ask the provider to text a code to a registered phone
//! - `login`: exchange the challenge id and code for a bearer token

mod config;
mod service;

#[cfg(test)]
mod tests;

pub use config::AuthServiceConfig;
pub use service::AuthService;
