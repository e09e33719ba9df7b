use actix_web::{web, HttpResponse};

use pa_core::repositories::UserRepository;
use pa_core::services::token::TokenIssuer;
use pa_core::services::verification::VerificationProvider;

use super::AppState;
use crate::dto::auth::MeResponse;
use crate::handlers::error::handle_domain_error;
use crate::middleware::auth::AuthContext;

/// Handler for GET /api/me (requires a bearer token)
pub async fn me<U, P, T>(state: web::Data<AppState<U, P, T>>, auth: AuthContext) -> HttpResponse
where
    U: UserRepository + 'static,
    P: VerificationProvider + 'static,
    T: TokenIssuer + 'static,
{
    match state.auth_service.current_user(auth.user_id).await {
        Ok(user) => HttpResponse::Ok().json(MeResponse {
            id: user.id,
            phone: user.phone,
        }),
        Err(e) => handle_domain_error(e),
    }
}
