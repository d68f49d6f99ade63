//! # 태그 API 라우트 핸들러
//!
//! ## 엔드포인트 목록
//! | 메서드 | 경로 | 핸들러 | 설명 |
//! |--------|------|--------|------|
//! | GET | /api/tags | `list_tags` | 전체 태그 이름 목록 (`["rust", "web"]`) |
//! | GET | /api/tags/:name/posts | `list_posts_by_tag` | 태그가 붙은 게시물 목록 |
//!
//! 태그는 게시물 생성 시 자동으로 만들어지므로 별도의 생성/수정/삭제 API는 없습니다.

use super::posts::AppState;
use crate::{db, error::AppError, models::*};
use axum::{
    extract::{Path, State},
    Json,
};

/// `GET /api/tags` → 태그 이름 문자열 배열
pub async fn list_tags(State(state): State<AppState>) -> Result<Json<Vec<String>>, AppError> {
    let names = db::list_tag_names(&state.pool).await?;
    Ok(Json(names))
}

/// `GET /api/tags/:name/posts`
///
/// 경로의 태그 이름은 대소문자를 구분하지 않습니다. (`/api/tags/Rust/posts` == `/api/tags/rust/posts`)
/// 태그가 없으면 `404 { "message": "Tag not found" }`
pub async fn list_posts_by_tag(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Vec<PostDetail>>, AppError> {
    let tag = db::find_tag_by_name(&state.pool, &name)
        .await?
        .ok_or_else(AppError::tag_not_found)?;

    let posts = db::list_posts_for_tag(&state.pool, tag.id).await?;
    let details = db::load_post_details(&state.pool, posts).await?;
    Ok(Json(details))
}
