//! JWT token issuer implementation

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use pa_shared::config::MAX_TTL_MINUTES;

use crate::domain::entities::token::Claims;
use crate::domain::entities::user::User;
use crate::errors::{DomainError, TokenError};

use super::config::TokenServiceConfig;

/// Issues and validates bearer tokens bound to a user identity
pub trait TokenIssuer: Send + Sync {
    /// Sign a new token for `user`
    fn issue(&self, user: &User) -> Result<String, DomainError>;

    /// Validate a token and return its claims
    fn verify(&self, token: &str) -> Result<Claims, DomainError>;

    /// Configured token lifetime in minutes
    fn ttl_minutes(&self) -> i64;
}

/// HMAC-signed JWT issuer
pub struct JwtTokenIssuer {
    config: TokenServiceConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtTokenIssuer {
    /// Creates a new issuer
    ///
    /// # Returns
    ///
    /// `Err(DomainError::Internal)` when the secret is empty or the lifetime
    /// is outside `1..=MAX_TTL_MINUTES`
    pub fn new(config: TokenServiceConfig) -> Result<Self, DomainError> {
        if config.jwt_secret.is_empty() {
            return Err(DomainError::Internal {
                message: "JWT secret must not be empty".to_string(),
            });
        }
        if !(1..=MAX_TTL_MINUTES).contains(&config.ttl_minutes) {
            return Err(DomainError::Internal {
                message: format!("JWT ttl must be between 1 and {} minutes", MAX_TTL_MINUTES),
            });
        }

        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

        let mut validation = Validation::new(config.algorithm);
        validation.set_issuer(&[config.issuer.as_str()]);
        validation.set_audience(&[config.audience.as_str()]);
        validation.validate_exp = true;
        validation.validate_nbf = true;
        validation.leeway = 0;

        Ok(Self {
            config,
            encoding_key,
            decoding_key,
            validation,
        })
    }

    /// Encodes claims into a JWT
    pub(crate) fn encode_jwt(&self, claims: &Claims) -> Result<String, DomainError> {
        let header = Header::new(self.config.algorithm);
        encode(&header, claims, &self.encoding_key).map_err(|e| {
            tracing::error!("Failed to sign token: {}", e);
            DomainError::Token(TokenError::GenerationFailed)
        })
    }
}

impl TokenIssuer for JwtTokenIssuer {
    fn issue(&self, user: &User) -> Result<String, DomainError> {
        let claims = Claims::for_user(
            user,
            self.config.ttl_minutes,
            &self.config.issuer,
            &self.config.audience,
        );
        self.encode_jwt(&claims)
    }

    fn verify(&self, token: &str) -> Result<Claims, DomainError> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| {
                let error = match e.kind() {
                    ErrorKind::ExpiredSignature => TokenError::Expired,
                    ErrorKind::ImmatureSignature => TokenError::NotYetValid,
                    ErrorKind::InvalidSignature => TokenError::InvalidSignature,
                    ErrorKind::InvalidIssuer
                    | ErrorKind::InvalidAudience
                    | ErrorKind::MissingRequiredClaim(_) => TokenError::InvalidClaims,
                    _ => TokenError::InvalidFormat,
                };
                DomainError::Token(error)
            })?;

        Ok(token_data.claims)
    }

    fn ttl_minutes(&self) -> i64 {
        self.config.ttl_minutes
    }
}
