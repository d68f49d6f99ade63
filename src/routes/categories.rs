//! # 카테고리 API 라우트 핸들러
//!
//! | 메서드 | 경로 | 핸들러 | 설명 |
//! |--------|------|--------|------|
//! | GET | /api/categories | `list_categories` | 전체 카테고리 이름 목록 |
//! | GET | /api/categories/:name/posts | `list_posts_by_category` | 카테고리에 속한 게시물 목록 |

use super::posts::AppState;
use crate::{db, error::AppError, models::*};
use axum::{
    extract::{Path, State},
    Json,
};

/// `GET /api/categories` → 카테고리 이름 문자열 배열
pub async fn list_categories(
    State(state): State<AppState>,
) -> Result<Json<Vec<String>>, AppError> {
    let names = db::list_category_names(&state.pool).await?;
    Ok(Json(names))
}

/// `GET /api/categories/:name/posts`: 없으면 `404 { "message": "Category not found" }`
pub async fn list_posts_by_category(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Vec<PostDetail>>, AppError> {
    let category = db::find_category_by_name(&state.pool, &name)
        .await?
        .ok_or_else(AppError::category_not_found)?;

    let posts = db::list_posts_for_category(&state.pool, category.id).await?;
    let details = db::load_post_details(&state.pool, posts).await?;
    Ok(Json(details))
}
