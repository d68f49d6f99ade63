use serde::{Deserialize, Serialize};

/// 댓글 엔티티: `comments` 테이블 한 행.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Comment {
    pub id: i64,
    pub content: String,
    pub author: String,
    /// 작성 시각 (UTC, ISO 8601, 끝에 "Z"). 클라이언트가 아닌 서버가 기록합니다.
    pub timestamp: String,
    pub post_id: i64,
}

/// 댓글 작성 요청: `POST /api/posts/:id/comments`의 요청 본문
#[derive(Debug, Default, Deserialize)]
pub struct CreateCommentRequest {
    pub content: Option<String>,
    pub author: Option<String>,
}
