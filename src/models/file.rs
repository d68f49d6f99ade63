//! # 파일 메타데이터 모델
//!
//! 실제 파일 바이트는 받지도 저장하지도 않습니다.
//! 클라이언트가 알려준 파일 이름과 URL(불투명한 참조)만 게시물에 연결해 둡니다.

use serde::{Deserialize, Serialize};

/// 파일 엔티티: `files` 테이블 한 행. 반드시 하나의 게시물에 속합니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct File {
    pub id: i64,
    pub filename: String,
    pub file_url: String,
    pub post_id: i64,
}

/// 파일 업로드 요청: `POST /api/posts/:id/upload`의 요청 본문
///
/// 두 필드 모두 필수이지만, 누락 시 400 응답을 직접 만들기 위해 Option으로 받습니다.
#[derive(Debug, Default, Deserialize)]
pub struct UploadFileRequest {
    pub filename: Option<String>,
    pub file_url: Option<String>,
}
