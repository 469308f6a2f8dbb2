// src/shared/api/response.rs
use actix_web::{http::StatusCode, HttpResponse};
use serde::Serialize;
use tracing::{error, warn};

use crate::shared::error::ContentError;

#[derive(Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiError>,
}

#[derive(Serialize, Clone)]
pub struct ApiError {
    pub code: String,
    pub message: String,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> HttpResponse {
        HttpResponse::Ok().json(ApiResponse {
            success: true,
            data: Some(data),
            error: None,
        })
    }

    pub fn created(data: T) -> HttpResponse {
        HttpResponse::Created().json(ApiResponse {
            success: true,
            data: Some(data),
            error: None,
        })
    }
}

impl ApiResponse<()> {
    pub fn no_content() -> HttpResponse {
        HttpResponse::NoContent().finish()
    }

    pub fn error(status: StatusCode, code: &str, message: &str) -> HttpResponse {
        HttpResponse::build(status).json(ApiResponse::<()> {
            success: false,
            data: None,
            error: Some(ApiError {
                code: code.to_string(),
                message: message.to_string(),
            }),
        })
    }

    pub fn not_found(code: &str, message: &str) -> HttpResponse {
        Self::error(StatusCode::NOT_FOUND, code, message)
    }

    pub fn bad_request(code: &str, message: &str) -> HttpResponse {
        Self::error(StatusCode::BAD_REQUEST, code, message)
    }

    pub fn unauthorized(code: &str, message: &str) -> HttpResponse {
        Self::error(StatusCode::UNAUTHORIZED, code, message)
    }

    pub fn conflict(code: &str, message: &str) -> HttpResponse {
        Self::error(StatusCode::CONFLICT, code, message)
    }

    pub fn service_unavailable(code: &str, message: &str) -> HttpResponse {
        Self::error(StatusCode::SERVICE_UNAVAILABLE, code, message)
    }

    pub fn internal_error() -> HttpResponse {
        Self::error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "INTERNAL_ERROR",
            "An unexpected error occurred",
        )
    }

    /// Maps a use-case failure for `resource` (e.g. "PROJECT", "Project")
    /// onto the envelope.
    pub fn from_content_error(resource: &str, err: ContentError) -> HttpResponse {
        let code_prefix = resource.to_uppercase().replace(' ', "_");

        match err {
            ContentError::NotFound => Self::not_found(
                &format!("{code_prefix}_NOT_FOUND"),
                &format!("{resource} not found"),
            ),
            ContentError::AlreadyExists => Self::conflict(
                &format!("{code_prefix}_ALREADY_EXISTS"),
                &format!("{resource} already exists"),
            ),
            ContentError::Validation(e) => Self::bad_request("VALIDATION_ERROR", &e.to_string()),
            ContentError::Contention => {
                warn!(resource, "Storage contention, asking client to retry");
                Self::service_unavailable("STORAGE_BUSY", "Storage is busy, retry later")
            }
            ContentError::Repository(msg) => {
                error!(resource, error = %msg, "Repository failure");
                Self::internal_error()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::validation::ValidationError;
    use actix_web::body::to_bytes;

    async fn body_json(resp: HttpResponse) -> serde_json::Value {
        let bytes = to_bytes(resp.into_body()).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[actix_web::test]
    async fn test_not_found_code_uses_resource_name() {
        let resp = ApiResponse::from_content_error("About info", ContentError::NotFound);
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body = body_json(resp).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["error"]["code"], "ABOUT_INFO_NOT_FOUND");
        assert_eq!(body["error"]["message"], "About info not found");
    }

    #[actix_web::test]
    async fn test_status_mapping() {
        let cases = vec![
            (ContentError::AlreadyExists, StatusCode::CONFLICT),
            (
                ContentError::Validation(ValidationError::new("title", "must not be blank")),
                StatusCode::BAD_REQUEST,
            ),
            (ContentError::Contention, StatusCode::SERVICE_UNAVAILABLE),
            (
                ContentError::Repository("boom".to_string()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, status) in cases {
            assert_eq!(ApiResponse::from_content_error("Project", err).status(), status);
        }
    }

    #[actix_web::test]
    async fn test_success_envelope_omits_error() {
        let body = body_json(ApiResponse::success(vec![1, 2])).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["data"], serde_json::json!([1, 2]));
        assert!(body.get("error").is_none());
    }
}
