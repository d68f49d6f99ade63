//! # 게시물 데이터베이스 쿼리 모듈
//!
//! `posts` 테이블에 대한 쿼리와, 게시물 하나에 딸린 태그/카테고리/파일/댓글을
//! 한꺼번에 읽어 `PostDetail`로 만드는 함수들입니다.
//!
//! 연관 데이터는 지연 로딩하지 않습니다. `load_post_detail()`이 필요한 쿼리를 모두 실행해
//! 완전히 채워진 값을 돌려줍니다.

use super::{
    get_or_create_category, get_or_create_tag, link_category_to_post, link_tag_to_post,
    list_categories_for_post, list_comments_for_post, list_files_for_post, list_tags_for_post,
};
use crate::error::AppError;
use crate::models::*;
use sqlx::{SqliteConnection, SqlitePool};

/// 증가시킬 카운터 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Counter {
    Likes,
    Views,
}

/// 모든 게시물을 생성 순서(id)대로 조회합니다. 페이지네이션은 없습니다.
pub async fn list_posts(pool: &SqlitePool) -> Result<Vec<Post>, AppError> {
    let posts = sqlx::query_as::<_, Post>(
        r#"
        SELECT id, title, content, feather_type, link_url, media_url,
               likes_count, views_count, attribution, copyright_info
        FROM posts
        ORDER BY id
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(posts)
}

/// ID로 게시물 하나를 조회합니다.
///
/// - `Ok(Some(Post))`: 게시물을 찾은 경우
/// - `Ok(None)`: 없는 경우 (404 처리는 라우트 핸들러에 위임)
pub async fn find_post_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Post>, AppError> {
    let post = sqlx::query_as::<_, Post>(
        r#"
        SELECT id, title, content, feather_type, link_url, media_url,
               likes_count, views_count, attribution, copyright_info
        FROM posts
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(post)
}

/// `posts` 행 하나를 삽입하고 새 id를 반환합니다.
///
/// 태그/카테고리 연결과 같은 트랜잭션에서 실행되도록 연결(`SqliteConnection`)을 받습니다.
/// 카운터는 스키마 기본값(0)으로 시작합니다.
pub async fn insert_post(conn: &mut SqliteConnection, new_post: &NewPost) -> Result<i64, AppError> {
    let result = sqlx::query(
        r#"
        INSERT INTO posts (title, content, feather_type, link_url, media_url,
                           attribution, copyright_info)
        VALUES (?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&new_post.title)
    .bind(&new_post.content)
    .bind(&new_post.feather_type)
    .bind(&new_post.link_url) // None이면 SQL NULL
    .bind(&new_post.media_url)
    .bind(&new_post.attribution)
    .bind(&new_post.copyright_info)
    .execute(&mut *conn)
    .await?;

    Ok(result.last_insert_rowid())
}

/// 게시물을 태그/카테고리와 함께 생성합니다.
///
/// ## 처리 흐름
/// 1. 트랜잭션 시작
/// 2. `posts` 행 삽입
/// 3. 태그 이름마다 lookup-or-create 후 `post_tags`에 연결 (카테고리도 동일)
/// 4. 커밋. 중간에 실패하면 트랜잭션이 drop되면서 전부 롤백됩니다
/// 5. 연관 데이터까지 채운 `PostDetail` 반환
///
/// 같은 요청 안에서 이름이 반복되면 (`["Go", "go"]`) 같은 행에 다시 연결될 뿐 에러는 없습니다.
pub async fn create_post(pool: &SqlitePool, new_post: &NewPost) -> Result<PostDetail, AppError> {
    let mut tx = pool.begin().await?;

    let post_id = insert_post(&mut *tx, new_post).await?;

    for name in &new_post.tags {
        let tag = get_or_create_tag(&mut *tx, name).await?;
        link_tag_to_post(&mut *tx, post_id, tag.id).await?;
    }

    for name in &new_post.categories {
        let category = get_or_create_category(&mut *tx, name).await?;
        link_category_to_post(&mut *tx, post_id, category.id).await?;
    }

    tx.commit().await?;

    tracing::debug!(
        post_id,
        tags = new_post.tags.len(),
        categories = new_post.categories.len(),
        "Created post"
    );

    let post = find_post_by_id(pool, post_id)
        .await?
        .ok_or(AppError::Internal("Failed to retrieve created post".to_string()))?;
    load_post_detail(pool, post).await
}

/// 카운터를 정확히 1 증가시킵니다.
///
/// 읽고-더하고-쓰는 방식이 아니라 `SET x = x + 1` 한 문장으로 처리하므로
/// 동시 요청이 와도 증가분이 사라지지 않습니다.
///
/// ## 반환값
/// - `true`: 증가 성공
/// - `false`: 해당 ID의 게시물이 없음
pub async fn increment_counter(
    pool: &SqlitePool,
    id: i64,
    counter: Counter,
) -> Result<bool, AppError> {
    let sql = match counter {
        Counter::Likes => "UPDATE posts SET likes_count = likes_count + 1 WHERE id = ?",
        Counter::Views => "UPDATE posts SET views_count = views_count + 1 WHERE id = ?",
    };

    let result = sqlx::query(sql).bind(id).execute(pool).await?;
    let updated = result.rows_affected() > 0;
    if updated {
        tracing::debug!(post_id = id, ?counter, "Incremented counter");
    }
    Ok(updated)
}

pub async fn increment_likes(pool: &SqlitePool, id: i64) -> Result<bool, AppError> {
    increment_counter(pool, id, Counter::Likes).await
}

pub async fn increment_views(pool: &SqlitePool, id: i64) -> Result<bool, AppError> {
    increment_counter(pool, id, Counter::Views).await
}

/// 게시물 행에 태그/카테고리/파일/댓글을 모두 채워 `PostDetail`을 만듭니다.
pub async fn load_post_detail(pool: &SqlitePool, post: Post) -> Result<PostDetail, AppError> {
    let tags = list_tags_for_post(pool, post.id).await?;
    let categories = list_categories_for_post(pool, post.id).await?;
    let files = list_files_for_post(pool, post.id).await?;
    let comments = list_comments_for_post(pool, post.id).await?;

    Ok(PostDetail {
        post,
        tags,
        categories,
        files,
        comments,
    })
}

/// 여러 게시물을 순서를 유지한 채 `PostDetail` 목록으로 만듭니다.
pub async fn load_post_details(
    pool: &SqlitePool,
    posts: Vec<Post>,
) -> Result<Vec<PostDetail>, AppError> {
    let mut details = Vec::with_capacity(posts.len());
    for post in posts {
        details.push(load_post_detail(pool, post).await?);
    }
    Ok(details)
}
