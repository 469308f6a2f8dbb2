use actix_web::{get, web, Responder};

use crate::modules::skill::application::domain::entities::SkillFilter;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// `GET /api/skills?category=...`
#[get("/api/skills")]
pub async fn get_skills_handler(
    query: web::Query<SkillFilter>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.skill_use_cases.list(query.into_inner()).await {
        Ok(skills) => ApiResponse::success(skills),
        Err(e) => ApiResponse::from_content_error("Skill", e),
    }
}

/// Skills bucketed by category, as `{category, skills: [{id, name, level}]}`.
#[get("/api/skills/grouped")]
pub async fn get_skills_grouped_handler(data: web::Data<AppState>) -> impl Responder {
    match data.skill_use_cases.grouped().await {
        Ok(groups) => ApiResponse::success(groups),
        Err(e) => ApiResponse::from_content_error("Skill", e),
    }
}

#[get("/api/skills/categories")]
pub async fn get_skill_categories_handler(data: web::Data<AppState>) -> impl Responder {
    match data.skill_use_cases.categories().await {
        Ok(categories) => ApiResponse::success(categories),
        Err(e) => ApiResponse::from_content_error("Skill", e),
    }
}

// Registered after the literal paths above so "grouped" never parses as an id.
#[get("/api/skills/{id}")]
pub async fn get_skill_handler(path: web::Path<i32>, data: web::Data<AppState>) -> impl Responder {
    match data.skill_use_cases.get(path.into_inner()).await {
        Ok(skill) => ApiResponse::success(skill),
        Err(e) => ApiResponse::from_content_error("Skill", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::auth::application::domain::entities::AdminSession;
    use crate::modules::skill::adapter::outgoing::SkillRepositoryMemory;
    use crate::modules::skill::application::domain::entities::NewSkill;
    use crate::modules::skill::application::ports::incoming::SkillUseCases;
    use crate::modules::skill::application::service::SkillService;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use actix_web::{test, App};
    use serde_json::json;
    use std::sync::Arc;
    use std::time::Duration;

    async fn seeded() -> Arc<SkillService<SkillRepositoryMemory>> {
        let service = Arc::new(SkillService::new(SkillRepositoryMemory::new(
            Duration::from_secs(1),
        )));
        let session = AdminSession::for_tests("admin");
        for (name, category, level) in [
            ("Rust", "Languages", 90),
            ("Docker", "DevOps", 80),
            ("Python", "Languages", 85),
        ] {
            service
                .create(
                    &session,
                    NewSkill {
                        name: name.to_string(),
                        category: category.to_string(),
                        proficiency: level,
                        icon: None,
                        order_index: 0,
                    },
                )
                .await
                .unwrap();
        }
        service
    }

    macro_rules! skills_app {
        () => {
            test::init_service(
                App::new()
                    .app_data(
                        TestAppStateBuilder::default()
                            .with_skill(seeded().await)
                            .build(),
                    )
                    .service(get_skills_handler)
                    .service(get_skills_grouped_handler)
                    .service(get_skill_categories_handler)
                    .service(get_skill_handler),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn test_list_filters_by_category() {
        let app = skills_app!();

        let req = test::TestRequest::get()
            .uri("/api/skills?category=Languages")
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        let names: Vec<_> = body["data"]
            .as_array()
            .unwrap()
            .iter()
            .map(|s| s["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["Python", "Rust"]);
    }

    #[actix_web::test]
    async fn test_grouped_uses_level_and_first_seen_category_order() {
        let app = skills_app!();

        let req = test::TestRequest::get()
            .uri("/api/skills/grouped")
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(
            body["data"],
            json!([
                { "category": "DevOps", "skills": [{ "id": 2, "name": "Docker", "level": 80 }] },
                { "category": "Languages", "skills": [
                    { "id": 3, "name": "Python", "level": 85 },
                    { "id": 1, "name": "Rust", "level": 90 }
                ]}
            ])
        );
    }

    #[actix_web::test]
    async fn test_categories_are_distinct() {
        let app = skills_app!();

        let req = test::TestRequest::get()
            .uri("/api/skills/categories")
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"], json!(["DevOps", "Languages"]));
    }

    #[actix_web::test]
    async fn test_get_by_id_and_missing() {
        let app = skills_app!();

        let req = test::TestRequest::get().uri("/api/skills/2").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["name"], "Docker");

        let req = test::TestRequest::get().uri("/api/skills/99").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 404);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "SKILL_NOT_FOUND");
    }
}
