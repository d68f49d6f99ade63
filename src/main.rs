//! # Featherpress 웹 서버 진입점
//!
//! 게시물, 태그, 카테고리, 댓글, 첨부 파일 메타데이터를 다루는 블로그 백엔드입니다.
//!
//! 이 파일이 수행하는 작업:
//! 1. 환경변수(.env) 로딩
//! 2. 로깅(tracing) 초기화
//! 3. SQLite 데이터베이스 연결 풀 생성
//! 4. 스키마 적용 (테이블이 없으면 생성)
//! 5. API 라우터 설정
//! 6. HTTP 서버 시작

mod config;
mod db;
mod error;
mod models;
mod routes;

use anyhow::Result;
use config::Config;
use routes::AppState;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // ── 1단계: 환경변수 로딩 ──
    // .env 파일이 없어도 에러 없이 넘어갑니다.
    dotenvy::dotenv().ok();

    // ── 2단계: 로깅 초기화 ──
    // RUST_LOG가 없으면 featherpress, tower_http, axum을 debug 레벨로 출력합니다.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "featherpress=debug,tower_http=debug,axum=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // ── 3단계: 설정 로딩 ──
    let config = Config::from_env()?;
    tracing::info!("Starting Featherpress server on {}", config.bind_addr());

    // DB 파일이 들어갈 디렉토리가 없으면 만들어 둡니다.
    if let Some(db_path) = db::database_file_path(&config.database_url) {
        if let Some(parent) = db_path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                tokio::fs::create_dir_all(parent).await?;
                tracing::info!("Created database directory: {}", parent.display());
            }
        }
    }

    // ── 4단계: 연결 풀 생성 및 스키마 적용 ──
    let pool = db::connect(&config).await?;

    tracing::info!("Applying database schema...");
    db::run_migrations(&pool).await?;

    // ── 5단계: 라우터 구성 ──
    // 전역 상태 대신 AppState를 만들어 라우터에 주입합니다.
    let app = routes::router(AppState { pool });

    // ── 6단계: 서버 시작 ──
    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
