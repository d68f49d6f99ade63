//! # 파일 메타데이터 쿼리 모듈
//!
//! `files` 테이블은 게시물에 첨부된 파일의 이름과 URL만 저장합니다.
//! `post_id`는 외래키이므로 존재하지 않는 게시물에 연결하려 하면 SQLite가 거부합니다.

use crate::error::AppError;
use crate::models::*;
use sqlx::SqlitePool;

/// 게시물에 파일 메타데이터를 추가하고 생성된 행을 반환합니다.
pub async fn create_file(
    pool: &SqlitePool,
    post_id: i64,
    filename: &str,
    file_url: &str,
) -> Result<File, AppError> {
    let result = sqlx::query("INSERT INTO files (filename, file_url, post_id) VALUES (?, ?, ?)")
        .bind(filename)
        .bind(file_url)
        .bind(post_id)
        .execute(pool)
        .await?;

    Ok(File {
        id: result.last_insert_rowid(),
        filename: filename.to_string(),
        file_url: file_url.to_string(),
        post_id,
    })
}

/// 게시물에 첨부된 파일들을 추가된 순서대로 조회합니다.
pub async fn list_files_for_post(pool: &SqlitePool, post_id: i64) -> Result<Vec<File>, AppError> {
    let files = sqlx::query_as::<_, File>(
        "SELECT id, filename, file_url, post_id FROM files WHERE post_id = ? ORDER BY id",
    )
    .bind(post_id)
    .fetch_all(pool)
    .await?;

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_pool;

    #[tokio::test]
    async fn file_requires_existing_post() {
        let pool = test_pool().await;
        let err = create_file(&pool, 42, "a.png", "https://cdn/a.png")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Database(_)));
    }
}
