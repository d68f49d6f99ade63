//! # 라우트 핸들러 모듈
//!
//! HTTP 요청을 처리하는 핸들러 함수들과 전체 라우터 구성을 모아둔 모듈입니다.
//!
//! 각 하위 모듈:
//! - `posts`: 게시물 생성/조회, 좋아요·조회수 (+ 공유 상태 `AppState`)
//! - `files`: 게시물 첨부 파일 메타데이터
//! - `comments`: 댓글 작성/조회
//! - `tags`: 태그 목록, 태그별 게시물
//! - `categories`: 카테고리 목록, 카테고리별 게시물

pub mod categories;
pub mod comments;
pub mod files;
pub mod posts;
pub mod tags;

pub use categories::*;
pub use comments::*;
pub use files::*;
pub use posts::*;
pub use tags::*;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// 전체 API 라우터를 구성합니다.
///
/// 모든 경로는 `/api` 아래에 있고, 모든 출처(origin)의 CORS 요청을 허용합니다.
/// `main()`과 테스트가 같은 라우터를 사용합니다.
pub fn router(state: AppState) -> Router {
    let api_routes = Router::new()
        // 게시물
        .route("/posts", get(list_posts).post(create_post))
        .route("/posts/{id}", get(get_post))
        .route("/posts/{id}/like", post(like_post))
        .route("/posts/{id}/view", post(view_post))
        // 첨부 파일 메타데이터
        .route("/posts/{id}/upload", post(upload_file))
        // 댓글
        .route("/posts/{id}/comments", get(list_comments).post(add_comment))
        // 태그 / 카테고리 디렉토리
        .route("/tags", get(list_tags))
        .route("/tags/{name}/posts", get(list_posts_by_tag))
        .route("/categories", get(list_categories))
        .route("/categories/{name}/posts", get(list_posts_by_category))
        .with_state(state);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .nest("/api", api_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
