use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::AdminUser;
use crate::shared::api::ApiResponse;
use actix_web::{get, Responder};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct CurrentAdminResponse {
    #[schema(example = "admin")]
    pub username: String,
}

/// Current admin
///
/// Returns the username bound to the presented bearer token.
#[utoipa::path(
    get,
    path = "/api/auth/me",
    tag = "auth",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Token is valid", body = inline(SuccessResponse<CurrentAdminResponse>)),
        (status = 401, description = "Missing, invalid or expired token", body = ErrorResponse),
    )
)]
#[get("/api/auth/me")]
pub async fn current_admin_handler(admin: AdminUser) -> impl Responder {
    ApiResponse::success(CurrentAdminResponse {
        username: admin.username().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::auth_helper::{bearer, test_gate};
    use actix_web::{test, web, App};

    #[actix_web::test]
    async fn test_me_returns_token_subject() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_gate()))
                .service(current_admin_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/auth/me")
            .insert_header(bearer("admin"))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["username"], "admin");
    }

    #[actix_web::test]
    async fn test_me_without_token_is_401() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_gate()))
                .service(current_admin_handler),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/auth/me").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 401);
    }
}
