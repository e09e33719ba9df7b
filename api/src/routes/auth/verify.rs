use actix_web::{web, Either, HttpResponse};

use pa_core::repositories::UserRepository;
use pa_core::services::token::TokenIssuer;
use pa_core::services::verification::VerificationProvider;

use super::AppState;
use crate::dto::auth::{VerifyRequest, VerifyResponse};
use crate::handlers::error::handle_domain_error;

/// Handler for POST /api/verify
///
/// Asks the verification provider to text a code to a registered phone.
///
/// # Request Body
///
/// JSON or `application/x-www-form-urlencoded`.
///
/// ```json
/// { "phone": 447700900123 }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// { "verification_id": "a1b2c3..." }
/// ```
///
/// ## Errors
/// - 422 missing or non-integer phone
/// - 404 no user with this phone
/// - 400 the provider refused, with its message
pub async fn verify<U, P, T>(
    state: web::Data<AppState<U, P, T>>,
    request: Either<web::Json<VerifyRequest>, web::Form<VerifyRequest>>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    P: VerificationProvider + 'static,
    T: TokenIssuer + 'static,
{
    let request = request.into_inner();

    let phone = match request.validated_phone() {
        Ok(phone) => phone,
        Err(e) => return handle_domain_error(e),
    };

    match state.auth_service.start_verification(phone).await {
        Ok(challenge) => HttpResponse::Ok().json(VerifyResponse {
            verification_id: challenge.into_inner(),
        }),
        Err(e) => handle_domain_error(e),
    }
}
