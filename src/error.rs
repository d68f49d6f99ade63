//! # 에러 처리 모듈
//!
//! API가 클라이언트에게 돌려주는 에러는 두 종류뿐입니다.
//! - 필수 필드 누락 → `400 { "error": "..." }`
//! - 존재하지 않는 게시물/태그/카테고리 → `404 { "message": "..." }`
//!
//! 그 외(DB 장애, 예상하지 못한 제약 조건 위반 등)는 모두 500으로 응답하고,
//! 실제 원인은 서버 로그에만 남깁니다.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// 애플리케이션에서 발생할 수 있는 모든 에러 종류
///
/// 핸들러가 `Result<T, AppError>`를 반환하면 Axum이 `IntoResponse`를 호출하여
/// HTTP 응답으로 변환합니다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 요청한 리소스를 찾을 수 없음 (HTTP 404)
    /// 메시지는 그대로 `message` 필드에 담깁니다. (예: "Post not found")
    #[error("{0}")]
    NotFound(String),

    /// 필수 필드가 빠진 요청 (HTTP 400)
    #[error("{0}")]
    BadRequest(String),

    /// 서버 내부 오류 (HTTP 500)
    #[error("Internal error: {0}")]
    Internal(String),

    /// 데이터베이스 오류 (HTTP 500)
    /// #[from] 덕분에 sqlx 호출 뒤의 `?`가 자동으로 이 variant로 변환됩니다.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// 시작 시 스키마 적용 실패
    #[error("Migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
}

impl AppError {
    pub fn post_not_found() -> Self {
        AppError::NotFound("Post not found".to_string())
    }

    pub fn tag_not_found() -> Self {
        AppError::NotFound("Tag not found".to_string())
    }

    pub fn category_not_found() -> Self {
        AppError::NotFound("Category not found".to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // 400과 404는 본문의 키가 서로 다릅니다 ("error" / "message").
        let (status, body) = match self {
            AppError::BadRequest(ref msg) => {
                (StatusCode::BAD_REQUEST, json!({ "error": msg }))
            }
            AppError::NotFound(ref msg) => {
                (StatusCode::NOT_FOUND, json!({ "message": msg }))
            }
            AppError::Internal(ref msg) => {
                tracing::error!("Internal error: {}", msg);
                internal_error()
            }
            AppError::Database(ref e) => {
                tracing::error!("Database error: {}", e);
                internal_error()
            }
            AppError::Migrate(ref e) => {
                tracing::error!("Migration error: {}", e);
                internal_error()
            }
        };

        (status, Json(body)).into_response()
    }
}

// 내부 구현은 노출하지 않고 일반적인 메시지만 돌려줍니다.
fn internal_error() -> (StatusCode, serde_json::Value) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        json!({ "error": "Internal server error" }),
    )
}
