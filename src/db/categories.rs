//! # 카테고리 데이터베이스 쿼리 모듈
//!
//! 구조는 `tags` 모듈과 같습니다.
//!
//! ## 테이블 구조
//! - `categories`: 카테고리 엔티티 (id, name): name에 UNIQUE 제약
//! - `post_categories`: 게시물과 카테고리의 다대다(N:M) 관계 테이블

use crate::error::AppError;
use crate::models::*;
use sqlx::{SqliteConnection, SqlitePool};

/// 카테고리 lookup-or-create. 동작은 `get_or_create_tag()`와 같습니다.
pub async fn get_or_create_category(
    conn: &mut SqliteConnection,
    name: &str,
) -> Result<Category, AppError> {
    let name = normalize_name(name);

    sqlx::query("INSERT INTO categories (name) VALUES (?) ON CONFLICT(name) DO NOTHING")
        .bind(&name)
        .execute(&mut *conn)
        .await?;

    let category = sqlx::query_as::<_, Category>("SELECT id, name FROM categories WHERE name = ?")
        .bind(&name)
        .fetch_one(&mut *conn)
        .await?;

    Ok(category)
}

/// 게시물에 카테고리를 연결합니다. 이미 연결되어 있으면 무시합니다.
pub async fn link_category_to_post(
    conn: &mut SqliteConnection,
    post_id: i64,
    category_id: i64,
) -> Result<(), AppError> {
    sqlx::query("INSERT OR IGNORE INTO post_categories (post_id, category_id) VALUES (?, ?)")
        .bind(post_id)
        .bind(category_id)
        .execute(&mut *conn)
        .await?;

    Ok(())
}

/// 이름으로 카테고리를 조회합니다. (대소문자 무시)
pub async fn find_category_by_name(
    pool: &SqlitePool,
    name: &str,
) -> Result<Option<Category>, AppError> {
    let category = sqlx::query_as::<_, Category>("SELECT id, name FROM categories WHERE name = ?")
        .bind(normalize_name(name))
        .fetch_optional(pool)
        .await?;

    Ok(category)
}

/// 모든 카테고리 이름을 생성 순서대로 조회합니다.
pub async fn list_category_names(pool: &SqlitePool) -> Result<Vec<String>, AppError> {
    let names = sqlx::query_scalar::<_, String>("SELECT name FROM categories ORDER BY id")
        .fetch_all(pool)
        .await?;

    Ok(names)
}

/// 특정 게시물에 연결된 카테고리 이름들 (연결된 순서)
pub async fn list_categories_for_post(
    pool: &SqlitePool,
    post_id: i64,
) -> Result<Vec<String>, AppError> {
    let names = sqlx::query_scalar::<_, String>(
        r#"
        SELECT c.name
        FROM categories c
        JOIN post_categories pc ON pc.category_id = c.id
        WHERE pc.post_id = ?
        ORDER BY pc.rowid
        "#,
    )
    .bind(post_id)
    .fetch_all(pool)
    .await?;

    Ok(names)
}

/// 특정 카테고리에 속한 게시물들을 조회합니다.
pub async fn list_posts_for_category(
    pool: &SqlitePool,
    category_id: i64,
) -> Result<Vec<Post>, AppError> {
    let posts = sqlx::query_as::<_, Post>(
        r#"
        SELECT p.id, p.title, p.content, p.feather_type, p.link_url, p.media_url,
               p.likes_count, p.views_count, p.attribution, p.copyright_info
        FROM posts p
        JOIN post_categories pc ON pc.post_id = p.id
        WHERE pc.category_id = ?
        ORDER BY p.id
        "#,
    )
    .bind(category_id)
    .fetch_all(pool)
    .await?;

    Ok(posts)
}
