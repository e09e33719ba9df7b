//! Domain entities representing core business objects.

pub mod token;
pub mod user;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use token::{Claims, DEFAULT_TTL_MINUTES, JWT_AUDIENCE, JWT_ISSUER, TOKEN_TYPE};
pub use user::User;
