use actix_web::{web, Either, HttpResponse};

use pa_core::repositories::UserRepository;
use pa_core::services::token::TokenIssuer;
use pa_core::services::verification::VerificationProvider;

use super::AppState;
use crate::dto::auth::LoginRequest;
use crate::handlers::error::handle_domain_error;

/// Handler for POST /api/login
///
/// # Request Body
///
/// JSON or `application/x-www-form-urlencoded`.
///
/// ```json
/// { "verification_id": "a1b2c3...", "code": "1234" }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// { "access_token": "eyJ...", "token_type": "bearer", "expires_in": 3600 }
/// ```
///
/// ## Errors
/// - 422 missing code or verification id
/// - 404 verification id unknown or already used
/// - 400 the provider rejected the code, with its message
pub async fn login<U, P, T>(
    state: web::Data<AppState<U, P, T>>,
    request: Either<web::Json<LoginRequest>, web::Form<LoginRequest>>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    P: VerificationProvider + 'static,
    T: TokenIssuer + 'static,
{
    let request = request.into_inner();

    let (verification_id, code) = match request.validated() {
        Ok(fields) => fields,
        Err(e) => return handle_domain_error(e),
    };

    match state.auth_service.login(verification_id, code).await {
        Ok(token) => HttpResponse::Ok().json(token),
        Err(e) => handle_domain_error(e),
    }
}
