use actix_web::{put, web, Responder};

use crate::modules::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::skill::application::domain::entities::SkillChanges;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[put("/api/skills/{id}")]
pub async fn update_skill_handler(
    admin: AdminUser,
    path: web::Path<i32>,
    req: web::Json<SkillChanges>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .skill_use_cases
        .update(admin.session(), path.into_inner(), req.into_inner())
        .await
    {
        Ok(updated) => ApiResponse::success(updated),
        Err(e) => ApiResponse::from_content_error("Skill", e),
    }
}
