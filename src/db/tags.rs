//! # 태그 데이터베이스 쿼리 모듈
//!
//! 태그 lookup-or-create와 게시물-태그 관계를 관리하는 SQL 쿼리 함수들입니다.
//!
//! ## 테이블 구조
//! - `tags`: 태그 엔티티 (id, name): name에 UNIQUE 제약
//! - `post_tags`: 게시물과 태그의 다대다(N:M) 관계 테이블
//!
//! ```sql
//! tags ←── post_tags ──→ posts
//!  (1)       (N:M)        (1)
//! ```
//!
//! 이름을 받는 함수는 모두 내부에서 `normalize_name()`을 거친 값으로 비교/저장합니다.

use crate::error::AppError;
use crate::models::*;
use sqlx::{SqliteConnection, SqlitePool};

/// 이름으로 태그를 찾고, 없으면 새로 만들어 반환합니다.
///
/// `INSERT ... ON CONFLICT(name) DO NOTHING` 뒤에 이름으로 다시 조회합니다.
/// 같은 새 이름으로 두 요청이 동시에 들어와도 UNIQUE 제약 덕분에 행은 하나만 생기고,
/// 두 요청 모두 그 행을 받게 됩니다.
///
/// 게시물 생성 트랜잭션 안에서 호출되므로 풀 대신 연결을 받습니다.
pub async fn get_or_create_tag(conn: &mut SqliteConnection, name: &str) -> Result<Tag, AppError> {
    let name = normalize_name(name);

    sqlx::query("INSERT INTO tags (name) VALUES (?) ON CONFLICT(name) DO NOTHING")
        .bind(&name)
        .execute(&mut *conn)
        .await?;

    let tag = sqlx::query_as::<_, Tag>("SELECT id, name FROM tags WHERE name = ?")
        .bind(&name)
        .fetch_one(&mut *conn)
        .await?;

    Ok(tag)
}

/// 게시물에 태그를 연결합니다.
///
/// `INSERT OR IGNORE`: 이미 같은 (post_id, tag_id) 조합이 있으면 조용히 넘어갑니다.
pub async fn link_tag_to_post(
    conn: &mut SqliteConnection,
    post_id: i64,
    tag_id: i64,
) -> Result<(), AppError> {
    sqlx::query("INSERT OR IGNORE INTO post_tags (post_id, tag_id) VALUES (?, ?)")
        .bind(post_id)
        .bind(tag_id)
        .execute(&mut *conn)
        .await?;

    Ok(())
}

/// 이름으로 태그를 조회합니다. (대소문자 무시)
pub async fn find_tag_by_name(pool: &SqlitePool, name: &str) -> Result<Option<Tag>, AppError> {
    let tag = sqlx::query_as::<_, Tag>("SELECT id, name FROM tags WHERE name = ?")
        .bind(normalize_name(name))
        .fetch_optional(pool)
        .await?;

    Ok(tag)
}

/// 모든 태그 이름을 생성 순서대로 조회합니다.
pub async fn list_tag_names(pool: &SqlitePool) -> Result<Vec<String>, AppError> {
    let names = sqlx::query_scalar::<_, String>("SELECT name FROM tags ORDER BY id")
        .fetch_all(pool)
        .await?;

    Ok(names)
}

/// 특정 게시물에 연결된 태그 이름들을 연결된 순서대로 조회합니다.
///
/// `post_tags`는 일반 rowid 테이블이므로 `pt.rowid` 순서가 곧 연결 순서입니다.
pub async fn list_tags_for_post(pool: &SqlitePool, post_id: i64) -> Result<Vec<String>, AppError> {
    let names = sqlx::query_scalar::<_, String>(
        r#"
        SELECT t.name
        FROM tags t
        JOIN post_tags pt ON pt.tag_id = t.id
        WHERE pt.post_id = ?
        ORDER BY pt.rowid
        "#,
    )
    .bind(post_id)
    .fetch_all(pool)
    .await?;

    Ok(names)
}

/// 특정 태그가 붙은 게시물들을 조회합니다.
pub async fn list_posts_for_tag(pool: &SqlitePool, tag_id: i64) -> Result<Vec<Post>, AppError> {
    let posts = sqlx::query_as::<_, Post>(
        r#"
        SELECT p.id, p.title, p.content, p.feather_type, p.link_url, p.media_url,
               p.likes_count, p.views_count, p.attribution, p.copyright_info
        FROM posts p
        JOIN post_tags pt ON pt.post_id = p.id
        WHERE pt.tag_id = ?
        ORDER BY p.id
        "#,
    )
    .bind(tag_id)
    .fetch_all(pool)
    .await?;

    Ok(posts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_pool;

    #[tokio::test]
    async fn get_or_create_is_idempotent() {
        let pool = test_pool().await;
        let mut conn = pool.acquire().await.unwrap();

        let first = get_or_create_tag(&mut *conn, "Rust").await.unwrap();
        let second = get_or_create_tag(&mut *conn, "rust").await.unwrap();
        let third = get_or_create_tag(&mut *conn, "RUST").await.unwrap();
        drop(conn);

        assert_eq!(first, second);
        assert_eq!(second, third);
        assert_eq!(first.name, "rust");
        assert_eq!(list_tag_names(&pool).await.unwrap(), vec!["rust"]);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_get_or_create_yields_one_row() {
        let (_dir, pool) = crate::db::file_test_pool(4).await;

        let mut tasks = tokio::task::JoinSet::new();
        for i in 0..8 {
            let pool = pool.clone();
            let name = if i % 2 == 0 { "Breaking" } else { "breaking" };
            tasks.spawn(async move {
                let mut conn = pool.acquire().await?;
                get_or_create_tag(&mut *conn, name).await
            });
        }

        let mut ids = Vec::new();
        while let Some(result) = tasks.join_next().await {
            ids.push(result.unwrap().unwrap().id);
        }
        ids.dedup();
        assert_eq!(ids.len(), 1);

        let rows: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM tags")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(rows, 1);
        assert_eq!(list_tag_names(&pool).await.unwrap(), vec!["breaking"]);
    }

    #[tokio::test]
    async fn find_by_name_ignores_case() {
        let pool = test_pool().await;
        let mut conn = pool.acquire().await.unwrap();
        let created = get_or_create_tag(&mut *conn, "news").await.unwrap();
        drop(conn);

        let found = find_tag_by_name(&pool, "NeWs").await.unwrap();
        assert_eq!(found, Some(created));
        assert!(find_tag_by_name(&pool, "unknown").await.unwrap().is_none());
    }
}
