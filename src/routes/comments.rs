//! # 댓글 API 라우트 핸들러
//!
//! | 메서드 | 경로 | 핸들러 | 설명 |
//! |--------|------|--------|------|
//! | POST | /api/posts/:id/comments | `add_comment` | 댓글 작성 (201) |
//! | GET | /api/posts/:id/comments | `list_comments` | 게시물의 댓글 목록 |
//!
//! 두 핸들러 모두 게시물이 없으면 404를 반환합니다.

use super::posts::{require_post, AppState};
use crate::{db, error::AppError, models::*};
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};

/// 댓글을 작성합니다. 작성 시각(timestamp)은 서버가 기록합니다.
pub async fn add_comment(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<CreateCommentRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Comment>), AppError> {
    let post = require_post(&state.pool, &id).await?;

    let req = payload.map(|Json(req)| req).unwrap_or_default();
    let (Some(content), Some(author)) = (req.content, req.author) else {
        return Err(AppError::BadRequest(
            "Missing comment content or author".to_string(),
        ));
    };

    let comment = db::create_comment(&state.pool, post.id, &content, &author).await?;
    tracing::debug!(post_id = post.id, comment_id = comment.id, "Added comment");
    Ok((StatusCode::CREATED, Json(comment)))
}

/// 게시물의 댓글을 작성 순서대로 반환합니다.
pub async fn list_comments(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Comment>>, AppError> {
    let post = require_post(&state.pool, &id).await?;
    let comments = db::list_comments_for_post(&state.pool, post.id).await?;
    Ok(Json(comments))
}
