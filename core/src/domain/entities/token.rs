//! Token entities for JWT-based authentication.

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::user::User;

/// Default bearer token lifetime (60 minutes)
pub const DEFAULT_TTL_MINUTES: i64 = 60;

/// JWT issuer
pub const JWT_ISSUER: &str = "phone-auth";

/// JWT audience
pub const JWT_AUDIENCE: &str = "phone-auth-api";

/// Token type reported alongside every issued token
pub const TOKEN_TYPE: &str = "bearer";

/// Claims structure for JWT payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,

    /// Phone number the token was issued for
    pub phone: u64,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,

    /// Not before timestamp
    pub nbf: i64,

    /// Issuer
    pub iss: String,

    /// Audience
    pub aud: String,

    /// JWT ID (unique identifier for the token)
    pub jti: String,
}

impl Claims {
    /// Creates claims for a bearer token bound to `user`
    ///
    /// # Arguments
    ///
    /// * `user` - The authenticated user
    /// * `ttl_minutes` - Token lifetime
    /// * `issuer` - `iss` claim
    /// * `audience` - `aud` claim
    pub fn for_user(user: &User, ttl_minutes: i64, issuer: &str, audience: &str) -> Self {
        let now = Utc::now();
        let expiry = now + Duration::minutes(ttl_minutes);

        Self {
            sub: user.id.to_string(),
            phone: user.phone,
            iat: now.timestamp(),
            exp: expiry.timestamp(),
            nbf: now.timestamp(),
            iss: issuer.to_string(),
            aud: audience.to_string(),
            jti: Uuid::new_v4().to_string(),
        }
    }

    /// Gets the user ID from the subject claim
    pub fn user_id(&self) -> Result<u64, std::num::ParseIntError> {
        self.sub.parse()
    }
}
