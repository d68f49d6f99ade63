//! # 게시물(Post) 라우트 핸들러
//!
//! ## 엔드포인트
//! - `POST /api/posts`            → 새 게시물 생성 (201)
//! - `GET  /api/posts`            → 전체 게시물 목록
//! - `GET  /api/posts/:id`        → 단일 게시물 조회
//! - `POST /api/posts/:id/like`   → 좋아요 수 +1
//! - `POST /api/posts/:id/view`   → 조회 수 +1
//!
//! ## Axum 핸들러 패턴
//! - `State(state)`: 앱 공유 상태 (DB 풀)
//! - `Path(id)`: URL 경로 파라미터
//! - `Json(body)`: 요청 본문 JSON
//!
//! 모든 응답 본문은 `PostDetail`: 게시물 행에 태그/카테고리/파일/댓글이 채워진 형태입니다.

use crate::{db, error::AppError, models::*};
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use sqlx::SqlitePool;

/// 애플리케이션 공유 상태
///
/// 서버 시작 시 한 번 만들어져 모든 핸들러에 `State<AppState>`로 주입됩니다.
/// 전역 변수 없이 DB 풀을 전달하는 Axum의 의존성 주입(Dependency Injection) 방식입니다.
#[derive(Clone)]
pub struct AppState {
    /// SQLite 연결 풀 (내부적으로 Arc로 공유되므로 clone 비용이 작음)
    pub pool: SqlitePool,
}

/// URL 경로의 게시물 id를 정수로 해석합니다.
///
/// 정수가 아닌 값(`/api/posts/abc`)은 해당 게시물이 없는 것과 같게 취급하여 404를 돌려줍니다.
pub fn parse_post_id(raw: &str) -> Result<i64, AppError> {
    raw.parse().map_err(|_| AppError::post_not_found())
}

/// id로 게시물을 찾고, 없으면 `404 Post not found` 에러를 반환합니다.
pub async fn require_post(pool: &SqlitePool, raw_id: &str) -> Result<Post, AppError> {
    let id = parse_post_id(raw_id)?;
    db::find_post_by_id(pool, id)
        .await?
        .ok_or_else(AppError::post_not_found)
}

/// `POST /api/posts`: 새 게시물을 생성합니다.
///
/// 본문이 없거나 JSON으로 해석되지 않으면 필수 필드 누락과 같은 400으로 응답합니다.
pub async fn create_post(
    State(state): State<AppState>,
    payload: Result<Json<CreatePostRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<PostDetail>), AppError> {
    let new_post = payload
        .ok()
        .and_then(|Json(req)| req.into_new_post())
        .ok_or_else(|| AppError::BadRequest("Missing title or content".to_string()))?;

    let post = db::create_post(&state.pool, &new_post).await?;
    Ok((StatusCode::CREATED, Json(post)))
}

/// `GET /api/posts`: 전체 게시물 목록 (필터/페이지네이션 없음)
pub async fn list_posts(
    State(state): State<AppState>,
) -> Result<Json<Vec<PostDetail>>, AppError> {
    let posts = db::list_posts(&state.pool).await?;
    let details = db::load_post_details(&state.pool, posts).await?;
    Ok(Json(details))
}

/// `GET /api/posts/:id`: 단일 게시물 조회
pub async fn get_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PostDetail>, AppError> {
    let post = require_post(&state.pool, &id).await?;
    let detail = db::load_post_detail(&state.pool, post).await?;
    Ok(Json(detail))
}

/// `POST /api/posts/:id/like`: 좋아요 수를 1 증가시키고 갱신된 게시물을 반환합니다.
pub async fn like_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PostDetail>, AppError> {
    let id = parse_post_id(&id)?;
    // UPDATE가 0행이면 게시물이 없는 것
    if !db::increment_likes(&state.pool, id).await? {
        return Err(AppError::post_not_found());
    }
    reload(&state.pool, id).await.map(Json)
}

/// `POST /api/posts/:id/view`: 조회 수를 1 증가시키고 갱신된 게시물을 반환합니다.
pub async fn view_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PostDetail>, AppError> {
    let id = parse_post_id(&id)?;
    if !db::increment_views(&state.pool, id).await? {
        return Err(AppError::post_not_found());
    }
    reload(&state.pool, id).await.map(Json)
}

async fn reload(pool: &SqlitePool, id: i64) -> Result<PostDetail, AppError> {
    let post = db::find_post_by_id(pool, id)
        .await?
        .ok_or_else(AppError::post_not_found)?;
    db::load_post_detail(pool, post).await
}

#[cfg(test)]
mod tests {
    use crate::routes::test_support::*;
    use axum::http::StatusCode;
    use serde_json::json;

    #[tokio::test]
    async fn create_returns_full_post_with_defaults() {
        let app = test_app().await;
        let (status, body) = send(
            &app,
            "POST",
            "/api/posts",
            Some(json!({
                "title": "Hello",
                "content": "World",
                "tags": ["Rust", "Web"],
                "categories": ["Tech"]
            })),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["title"], "Hello");
        assert_eq!(body["content"], "World");
        assert_eq!(body["feather_type"], "Text");
        assert_eq!(body["link_url"], json!(null));
        assert_eq!(body["media_url"], json!(null));
        assert_eq!(body["attribution"], json!(null));
        assert_eq!(body["copyright_info"], json!(null));
        assert_eq!(body["likes_count"], 0);
        assert_eq!(body["views_count"], 0);
        assert_eq!(body["tags"], json!(["rust", "web"]));
        assert_eq!(body["categories"], json!(["tech"]));
        assert_eq!(body["files"], json!([]));
        assert_eq!(body["comments"], json!([]));
    }

    #[tokio::test]
    async fn create_keeps_optional_fields() {
        let app = test_app().await;
        let (status, body) = send(
            &app,
            "POST",
            "/api/posts",
            Some(json!({
                "title": "Sunset",
                "content": "photo post",
                "feather_type": "Photo",
                "media_url": "https://cdn.example.com/sunset.jpg",
                "attribution": "Jane",
                "copyright_info": "CC-BY-4.0"
            })),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["feather_type"], "Photo");
        assert_eq!(body["media_url"], "https://cdn.example.com/sunset.jpg");
        assert_eq!(body["attribution"], "Jane");
        assert_eq!(body["copyright_info"], "CC-BY-4.0");
    }

    #[tokio::test]
    async fn create_without_content_is_bad_request() {
        let app = test_app().await;
        let (status, body) = send(&app, "POST", "/api/posts", Some(json!({ "title": "T" }))).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "Missing title or content" }));
    }

    #[tokio::test]
    async fn create_without_body_is_bad_request() {
        let app = test_app().await;
        let (status, body) = send(&app, "POST", "/api/posts", None).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "Missing title or content" }));
    }

    #[tokio::test]
    async fn non_list_tags_and_categories_are_ignored() {
        let app = test_app().await;
        let (status, body) = send(
            &app,
            "POST",
            "/api/posts",
            Some(json!({ "title": "T", "content": "C", "tags": "news" })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["tags"], json!([]));

        let (status, body) = send(
            &app,
            "POST",
            "/api/posts",
            Some(json!({ "title": "T", "content": "C", "categories": { "a": 1 } })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["categories"], json!([]));

        let (_, tags) = send(&app, "GET", "/api/tags", None).await;
        assert_eq!(tags, json!([]));
    }

    #[tokio::test]
    async fn duplicate_tags_in_one_request_collapse() {
        let app = test_app().await;
        let (_, body) = send(
            &app,
            "POST",
            "/api/posts",
            Some(json!({ "title": "T", "content": "C", "tags": ["Go", "go"] })),
        )
        .await;
        assert_eq!(body["tags"], json!(["go"]));

        let (_, tags) = send(&app, "GET", "/api/tags", None).await;
        assert_eq!(tags, json!(["go"]));
    }

    #[tokio::test]
    async fn list_and_get_posts() {
        let app = test_app().await;
        let id = create_post(&app, "first").await;
        create_post(&app, "second").await;

        let (status, list) = send(&app, "GET", "/api/posts", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(list.as_array().unwrap().len(), 2);
        assert_eq!(list[0]["title"], "first");

        let (status, post) = send(&app, "GET", &format!("/api/posts/{id}"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(post["id"], id);
        assert_eq!(post["title"], "first");
    }

    #[tokio::test]
    async fn missing_post_is_not_found() {
        let app = test_app().await;
        for uri in ["/api/posts/9999", "/api/posts/not-a-number"] {
            let (status, body) = send(&app, "GET", uri, None).await;
            assert_eq!(status, StatusCode::NOT_FOUND);
            assert_eq!(body, json!({ "message": "Post not found" }));
        }
    }

    #[tokio::test]
    async fn like_and_view_count_every_call() {
        let app = test_app().await;
        let id = create_post(&app, "counted").await;

        for _ in 0..5 {
            let (status, _) = send(&app, "POST", &format!("/api/posts/{id}/like"), None).await;
            assert_eq!(status, StatusCode::OK);
        }
        for _ in 0..2 {
            send(&app, "POST", &format!("/api/posts/{id}/view"), None).await;
        }

        let (_, body) = send(&app, "POST", &format!("/api/posts/{id}/view"), None).await;
        assert_eq!(body["likes_count"], 5);
        assert_eq!(body["views_count"], 3);
    }

    #[tokio::test]
    async fn like_missing_post_is_not_found() {
        let app = test_app().await;
        let (status, body) = send(&app, "POST", "/api/posts/9999/like", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "message": "Post not found" }));

        let (status, _) = send(&app, "POST", "/api/posts/9999/view", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
