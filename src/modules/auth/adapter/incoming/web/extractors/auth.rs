use actix_web::{dev::Payload, web, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use std::{
    future::{ready, Ready},
    sync::Arc,
};
use tracing::debug;

use crate::modules::auth::application::domain::entities::AdminSession;
use crate::modules::auth::application::ports::incoming::CredentialGate;
use crate::modules::auth::application::ports::outgoing::TokenError;
use crate::shared::api::ApiResponse;

/// A request that carried a bearer token accepted by the credential gate.
///
/// Handlers for mutating routes take this extractor and hand
/// `admin.session()` to their use case; a request without a valid token is
/// answered with 401 before the handler body runs.
#[derive(Debug, Clone)]
pub struct AdminUser(AdminSession);

impl AdminUser {
    pub fn session(&self) -> &AdminSession {
        &self.0
    }

    pub fn username(&self) -> &str {
        self.0.username()
    }
}

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

impl FromRequest for AdminUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let gate = match req.app_data::<web::Data<Arc<dyn CredentialGate + Send + Sync>>>() {
            Some(gate) => gate,
            None => {
                tracing::error!("Credential gate missing from app data");
                return ready(Err(create_api_error(ApiResponse::internal_error())));
            }
        };

        let token = match extract_token_from_header(req) {
            Some(t) => t,
            None => {
                return ready(Err(create_api_error(ApiResponse::unauthorized(
                    "MISSING_AUTH_HEADER",
                    "Missing or invalid authorization header",
                ))));
            }
        };

        match gate.verify_token(&token) {
            Ok(session) => ready(Ok(AdminUser(session))),
            Err(TokenError::Expired) => {
                debug!("Rejected expired token");
                ready(Err(create_api_error(ApiResponse::unauthorized(
                    "TOKEN_EXPIRED",
                    "Token has expired",
                ))))
            }
            Err(e) => {
                debug!(error = %e, "Rejected token");
                ready(Err(create_api_error(ApiResponse::unauthorized(
                    "INVALID_TOKEN",
                    "Invalid token",
                ))))
            }
        }
    }
}

fn extract_token_from_header(req: &HttpRequest) -> Option<String> {
    let value = req.headers().get("Authorization")?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;

    if !scheme.eq_ignore_ascii_case("bearer") || token.trim().is_empty() {
        return None;
    }
    Some(token.trim().to_string())
}
