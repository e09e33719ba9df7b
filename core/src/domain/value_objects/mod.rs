//! Value objects representing immutable domain concepts.

pub mod access_token;
pub mod challenge;

// Re-export commonly used types
pub use access_token::AccessToken;
pub use challenge::Challenge;
