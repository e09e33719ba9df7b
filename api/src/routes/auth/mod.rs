//! Authentication route handlers
//!
//! - `POST /api/verify` starts a phone verification
//! - `POST /api/login` exchanges a verification id and code for a token
//! - `GET /api/me` returns the authenticated user

pub mod login;
pub mod me;
pub mod verify;

use std::sync::Arc;

use pa_core::repositories::UserRepository;
use pa_core::services::auth::AuthService;
use pa_core::services::token::TokenIssuer;
use pa_core::services::verification::VerificationProvider;

pub use login::login;
pub use me::me;
pub use verify::verify;

/// Application state that holds shared services
pub struct AppState<U, P, T>
where
    U: UserRepository,
    P: VerificationProvider,
    T: TokenIssuer,
{
    pub auth_service: Arc<AuthService<U, P, T>>,
}

impl<U, P, T> AppState<U, P, T>
where
    U: UserRepository,
    P: VerificationProvider,
    T: TokenIssuer,
{
    pub fn new(auth_service: AuthService<U, P, T>) -> Self {
        Self {
            auth_service: Arc::new(auth_service),
        }
    }
}
