use actix_web::{delete, get, post, put, web, Responder};

use crate::modules::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::contact::application::domain::entities::{MessageQuery, NewContactMessage};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Public contact form endpoint.
#[post("/api/contact/messages")]
pub async fn submit_message_handler(
    req: web::Json<NewContactMessage>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.contact_use_cases.submit_message(req.into_inner()).await {
        Ok(stored) => ApiResponse::created(stored),
        Err(e) => ApiResponse::from_content_error("Message", e),
    }
}

/// `GET /api/contact/messages?unread_only=&skip=&limit=`
#[get("/api/contact/messages")]
pub async fn get_messages_handler(
    admin: AdminUser,
    query: web::Query<MessageQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .contact_use_cases
        .list_messages(admin.session(), query.into_inner())
        .await
    {
        Ok(messages) => ApiResponse::success(messages),
        Err(e) => ApiResponse::from_content_error("Message", e),
    }
}

#[put("/api/contact/messages/{id}/read")]
pub async fn mark_message_read_handler(
    admin: AdminUser,
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .contact_use_cases
        .mark_read(admin.session(), path.into_inner())
        .await
    {
        Ok(message) => ApiResponse::success(message),
        Err(e) => ApiResponse::from_content_error("Message", e),
    }
}

#[delete("/api/contact/messages/{id}")]
pub async fn delete_message_handler(
    admin: AdminUser,
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .contact_use_cases
        .delete_message(admin.session(), path.into_inner())
        .await
    {
        Ok(()) => ApiResponse::no_content(),
        Err(e) => ApiResponse::from_content_error("Message", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::modules::contact::adapter::outgoing::ContactRepositoryMemory;
    use crate::modules::contact::application::ports::incoming::ContactUseCases;
    use crate::modules::contact::application::service::ContactService;
    use crate::tests::support::auth_helper::{bearer, gate_data};
    use actix_web::{test, App};
    use serde_json::json;
    use std::sync::Arc;
    use std::time::Duration;

    #[actix_web::test]
    async fn test_visitor_submits_admin_reads_inbox() {
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().build())
                .app_data(gate_data())
                .service(submit_message_handler)
                .service(get_messages_handler)
                .service(mark_message_read_handler)
                .service(delete_message_handler),
        )
        .await;

        for subject in ["first", "second"] {
            let req = test::TestRequest::post()
                .uri("/api/contact/messages")
                .set_json(json!({
                    "name": "Visitor",
                    "email": "visitor@example.com",
                    "subject": subject,
                    "message": "Hello there"
                }))
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), 201);
            let body: serde_json::Value = test::read_body_json(resp).await;
            assert_eq!(body["data"]["is_read"], false);
        }

        let anonymous = test::TestRequest::get()
            .uri("/api/contact/messages")
            .to_request();
        assert_eq!(test::call_service(&app, anonymous).await.status(), 401);

        let req = test::TestRequest::put()
            .uri("/api/contact/messages/1/read")
            .insert_header(bearer("admin"))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["is_read"], true);

        let req = test::TestRequest::get()
            .uri("/api/contact/messages?unread_only=true")
            .insert_header(bearer("admin"))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        let inbox = body["data"].as_array().unwrap();
        assert_eq!(inbox.len(), 1);
        assert_eq!(inbox[0]["subject"], "second");

        let req = test::TestRequest::get()
            .uri("/api/contact/messages?limit=1")
            .insert_header(bearer("admin"))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"].as_array().unwrap().len(), 1);
        assert_eq!(body["data"][0]["subject"], "second");

        let req = test::TestRequest::delete()
            .uri("/api/contact/messages/2")
            .insert_header(bearer("admin"))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), 204);
    }

    #[actix_web::test]
    async fn test_submit_rejects_blank_message() {
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().build())
                .service(submit_message_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/contact/messages")
            .set_json(json!({ "name": "V", "email": "v@example.com", "message": "  " }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);
    }

    #[actix_web::test]
    async fn test_mark_missing_message_is_404() {
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().build())
                .app_data(gate_data())
                .service(mark_message_read_handler),
        )
        .await;

        let req = test::TestRequest::put()
            .uri("/api/contact/messages/77/read")
            .insert_header(bearer("admin"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 404);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "MESSAGE_NOT_FOUND");
    }

    #[actix_web::test]
    async fn test_inbox_paging_out_of_range_is_400() {
        let contact = ContactService::new(ContactRepositoryMemory::new(Duration::from_secs(1)));
        contact
            .submit_message(NewContactMessage {
                name: "Visitor".to_string(),
                email: "visitor@example.com".to_string(),
                subject: None,
                message: "Hello".to_string(),
            })
            .await
            .unwrap();

        let state = TestAppStateBuilder::default()
            .with_contact(Arc::new(contact))
            .build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(gate_data())
                .service(get_messages_handler),
        )
        .await;

        for uri in [
            "/api/contact/messages?skip=18446744073709551615",
            "/api/contact/messages?limit=5000",
        ] {
            let req = test::TestRequest::get()
                .uri(uri)
                .insert_header(bearer("admin"))
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), 400, "{uri}");

            let body: serde_json::Value = test::read_body_json(resp).await;
            assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        }

        let req = test::TestRequest::get()
            .uri("/api/contact/messages?limit=1000")
            .insert_header(bearer("admin"))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"].as_array().unwrap().len(), 1);
    }
}
