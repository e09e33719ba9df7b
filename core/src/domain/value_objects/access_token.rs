//! Bearer token envelope returned after a successful login.

use serde::{Deserialize, Serialize};

use crate::domain::entities::token::TOKEN_TYPE;

/// Issued token with its type and lifetime
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AccessToken {
    /// Signed JWT
    pub access_token: String,

    /// Always `"bearer"`
    pub token_type: String,

    /// Token lifetime in seconds
    pub expires_in: i64,
}

impl AccessToken {
    /// Wraps a signed token whose lifetime is `ttl_minutes`
    pub fn bearer(access_token: String, ttl_minutes: i64) -> Self {
        Self {
            access_token,
            token_type: TOKEN_TYPE.to_string(),
            expires_in: ttl_minutes * 60,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bearer_envelope() {
        let token = AccessToken::bearer("abc.def.ghi".to_string(), 60);
        assert_eq!(token.token_type, "bearer");
        assert_eq!(token.expires_in, 3600);

        let json = serde_json::to_value(&token).unwrap();
        assert_eq!(json["access_token"], "abc.def.ghi");
        assert_eq!(json["token_type"], "bearer");
        assert_eq!(json["expires_in"], 3600);
    }
}
