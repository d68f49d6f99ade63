//! # 파일 메타데이터 업로드 핸들러
//!
//! `POST /api/posts/:id/upload` + `{ "filename": "...", "file_url": "..." }` → `201 File`
//!
//! 파일 내용은 받지 않습니다. 이름과 URL만 게시물에 연결해 둡니다.

use super::posts::{require_post, AppState};
use crate::{db, error::AppError, models::*};
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};

/// 게시물 존재 여부를 먼저 확인하고(404), 그 다음 본문을 검사합니다(400).
pub async fn upload_file(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UploadFileRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<File>), AppError> {
    let post = require_post(&state.pool, &id).await?;

    let req = payload.map(|Json(req)| req).unwrap_or_default();
    let (Some(filename), Some(file_url)) = (req.filename, req.file_url) else {
        return Err(AppError::BadRequest(
            "Missing filename or file_url".to_string(),
        ));
    };

    let file = db::create_file(&state.pool, post.id, &filename, &file_url).await?;
    tracing::debug!(post_id = post.id, file_id = file.id, "Attached file metadata");
    Ok((StatusCode::CREATED, Json(file)))
}
