use actix_web::{get, web, Responder};

use crate::modules::project::application::domain::entities::ProjectFilter;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// `GET /api/projects?featured=true|false`
#[get("/api/projects")]
pub async fn get_projects_handler(
    query: web::Query<ProjectFilter>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.project_use_cases.list(query.into_inner()).await {
        Ok(projects) => ApiResponse::success(projects),
        Err(e) => ApiResponse::from_content_error("Project", e),
    }
}

#[get("/api/projects/{id}")]
pub async fn get_project_handler(
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.project_use_cases.get(path.into_inner()).await {
        Ok(project) => ApiResponse::success(project),
        Err(e) => ApiResponse::from_content_error("Project", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::auth::application::domain::entities::AdminSession;
    use crate::modules::project::adapter::outgoing::ProjectRepositoryMemory;
    use crate::modules::project::application::domain::entities::NewProject;
    use crate::modules::project::application::ports::incoming::ProjectUseCases;
    use crate::modules::project::application::service::ProjectService;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use actix_web::{test, App};
    use std::sync::Arc;
    use std::time::Duration;

    fn new_project(title: &str, order_index: i32, is_featured: bool) -> NewProject {
        NewProject {
            title: title.to_string(),
            description: "Portfolio piece".to_string(),
            image: None,
            github_url: None,
            live_url: None,
            order_index,
            is_featured,
            technologies: vec![],
            features: vec![],
            metrics: vec![],
        }
    }

    async fn seeded() -> Arc<ProjectService<ProjectRepositoryMemory>> {
        let service = Arc::new(ProjectService::new(ProjectRepositoryMemory::new(
            Duration::from_secs(1),
        )));
        let session = AdminSession::for_tests("admin");
        for (title, order, featured) in [("Gamma", 3, true), ("Beta", 2, false), ("Alpha", 1, true)]
        {
            service
                .create(&session, new_project(title, order, featured))
                .await
                .unwrap();
        }
        service
    }

    async fn titles(uri: &str) -> Vec<String> {
        let app_state = TestAppStateBuilder::default()
            .with_project(seeded().await)
            .build();
        let app =
            test::init_service(App::new().app_data(app_state).service(get_projects_handler))
                .await;

        let req = test::TestRequest::get().uri(uri).to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        body["data"]
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["title"].as_str().unwrap().to_string())
            .collect()
    }

    #[actix_web::test]
    async fn test_featured_query_filters_and_keeps_order() {
        assert_eq!(titles("/api/projects?featured=true").await, vec!["Alpha", "Gamma"]);
        assert_eq!(titles("/api/projects?featured=false").await, vec!["Beta"]);
        assert_eq!(titles("/api/projects").await, vec!["Alpha", "Beta", "Gamma"]);
    }

    #[actix_web::test]
    async fn test_bad_featured_value_is_400() {
        let app_state = TestAppStateBuilder::default().build();
        let app =
            test::init_service(App::new().app_data(app_state).service(get_projects_handler))
                .await;

        let req = test::TestRequest::get()
            .uri("/api/projects?featured=maybe")
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), 400);
    }

    #[actix_web::test]
    async fn test_get_missing_project() {
        let app_state = TestAppStateBuilder::default().build();
        let app =
            test::init_service(App::new().app_data(app_state).service(get_project_handler))
                .await;

        let req = test::TestRequest::get().uri("/api/projects/12").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 404);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "PROJECT_NOT_FOUND");
    }
}
