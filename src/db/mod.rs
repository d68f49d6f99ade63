//! # 데이터베이스 접근 계층 (Data Access Layer)
//!
//! 데이터베이스와 직접 상호작용하는 함수들을 모아둔 모듈입니다.
//! 라우트 핸들러(routes/)는 SQL을 직접 쓰지 않고 이 모듈의 함수만 호출합니다.
//!
//! 각 하위 모듈:
//! - `posts`: 게시물 조회/생성, 좋아요·조회수 증가, 연관 데이터까지 채운 `PostDetail` 구성
//! - `tags`: 태그 lookup-or-create, 게시물-태그 관계, 태그별 게시물
//! - `categories`: 카테고리 (태그와 같은 구조)
//! - `files`: 게시물 첨부 파일 메타데이터
//! - `comments`: 게시물 댓글

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

use crate::{config::Config, error::AppError};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::path::PathBuf;
use std::str::FromStr;

/// 설정값으로 SQLite 연결 풀을 생성합니다.
///
/// - `create_if_missing`: DB 파일이 없으면 새로 만듭니다.
/// - `foreign_keys`: 파일/댓글/관계 테이블의 참조 무결성을 SQLite가 직접 검사합니다.
pub async fn connect(config: &Config) -> Result<SqlitePool, AppError> {
    let options = SqliteConnectOptions::from_str(&config.database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(options)
        .await?;

    Ok(pool)
}

/// `./migrations`의 스키마를 적용합니다. 이미 적용된 파일은 건너뜁니다.
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), AppError> {
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}

/// 파일 기반 SQLite URL에서 DB 파일 경로를 꺼냅니다.
///
/// 인메모리 DB(`sqlite::memory:`)이면 `None`을 반환합니다.
/// 서버 시작 시 이 경로의 부모 디렉토리를 미리 만들어 두기 위해 사용합니다.
pub fn database_file_path(database_url: &str) -> Option<PathBuf> {
    let rest = database_url
        .strip_prefix("sqlite://")
        .or_else(|| database_url.strip_prefix("sqlite:"))?;
    // 쿼리 문자열(?mode=rwc 등)은 경로가 아닙니다
    let path = rest.split('?').next().unwrap_or_default();

    if path.is_empty() || path == ":memory:" {
        return None;
    }
    Some(PathBuf::from(path))
}

/// 테스트용 인메모리 DB 풀
///
/// 인메모리 SQLite는 연결마다 별개의 DB이므로 연결을 1개로 고정하고,
/// 그 연결이 유휴 상태로 닫히지 않게 타임아웃을 끕니다.
#[cfg(test)]
pub async fn test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .unwrap()
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
        .unwrap();

    run_migrations(&pool).await.unwrap();
    pool
}

/// 테스트용 파일 기반 DB 풀 (연결 여러 개)
///
/// 동시 요청을 흉내 내려면 연결마다 같은 DB를 봐야 하므로 임시 디렉토리의 파일을 씁니다.
/// 반환된 `TempDir`이 drop되면 파일도 지워지므로 테스트가 끝날 때까지 들고 있어야 합니다.
#[cfg(test)]
pub async fn file_test_pool(max_connections: u32) -> (tempfile::TempDir, SqlitePool) {
    use sqlx::sqlite::SqliteJournalMode;
    use std::time::Duration;

    let dir = tempfile::tempdir().unwrap();
    let options = SqliteConnectOptions::new()
        .filename(dir.path().join("blog.db"))
        .create_if_missing(true)
        .foreign_keys(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(Duration::from_secs(10));

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await
        .unwrap();

    run_migrations(&pool).await.unwrap();
    (dir, pool)
}
