use actix_web::{post, web, Responder};

use crate::modules::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::skill::application::domain::entities::NewSkill;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[post("/api/skills")]
pub async fn create_skill_handler(
    admin: AdminUser,
    req: web::Json<NewSkill>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .skill_use_cases
        .create(admin.session(), req.into_inner())
        .await
    {
        Ok(created) => ApiResponse::created(created),
        Err(e) => ApiResponse::from_content_error("Skill", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{bearer, gate_data};
    use actix_web::{test, App};
    use serde_json::json;

    #[actix_web::test]
    async fn test_create_skill() {
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().build())
                .app_data(gate_data())
                .service(create_skill_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/skills")
            .insert_header(bearer("admin"))
            .set_json(json!({ "name": "Rust", "category": "Languages", "proficiency": 90 }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 201);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["proficiency"], 90);
        assert!(body["data"]["icon"].is_null());
    }

    #[actix_web::test]
    async fn test_proficiency_out_of_range_is_400() {
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().build())
                .app_data(gate_data())
                .service(create_skill_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/skills")
            .insert_header(bearer("admin"))
            .set_json(json!({ "name": "Rust", "category": "Languages", "proficiency": 101 }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }
}
