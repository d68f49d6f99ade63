//! # 댓글 쿼리 모듈
//!
//! 댓글의 작성 시각은 서버가 정합니다. `chrono::Utc::now()`를 마이크로초 정밀도의
//! RFC 3339 문자열(끝에 "Z")로 저장하므로, 문자열 정렬이 곧 시간순 정렬입니다.

use crate::error::AppError;
use crate::models::*;
use chrono::{SecondsFormat, Utc};
use sqlx::SqlitePool;

/// 현재 UTC 시각을 댓글 timestamp 형식으로 만듭니다. (예: "2024-05-01T09:30:00.123456Z")
pub fn comment_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// 게시물에 댓글을 추가하고 생성된 댓글을 반환합니다.
pub async fn create_comment(
    pool: &SqlitePool,
    post_id: i64,
    content: &str,
    author: &str,
) -> Result<Comment, AppError> {
    let timestamp = comment_timestamp();

    let result = sqlx::query(
        "INSERT INTO comments (content, author, timestamp, post_id) VALUES (?, ?, ?, ?)",
    )
    .bind(content)
    .bind(author)
    .bind(&timestamp)
    .bind(post_id)
    .execute(pool)
    .await?;

    Ok(Comment {
        id: result.last_insert_rowid(),
        content: content.to_string(),
        author: author.to_string(),
        timestamp,
        post_id,
    })
}

/// 게시물의 댓글을 작성된 순서대로 조회합니다.
pub async fn list_comments_for_post(
    pool: &SqlitePool,
    post_id: i64,
) -> Result<Vec<Comment>, AppError> {
    let comments = sqlx::query_as::<_, Comment>(
        r#"
        SELECT id, content, author, timestamp, post_id
        FROM comments
        WHERE post_id = ?
        ORDER BY id
        "#,
    )
    .bind(post_id)
    .fetch_all(pool)
    .await?;

    Ok(comments)
}
