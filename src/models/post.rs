//! # 게시물 모델 정의
//!
//! ## 구조체 역할
//! - `Post`: DB의 `posts` 테이블 한 행
//! - `PostDetail`: API 응답 형태. 행 데이터에 태그/카테고리/파일/댓글을 붙인 것
//! - `CreatePostRequest`: `POST /api/posts` 요청 본문
//! - `NewPost`: 검증을 통과한 생성 요청 (DB 계층은 이 타입만 받습니다)
//!
//! `feather_type`은 게시물의 종류("Text", "Link", "Photo" 등)를 나타내는 문자열입니다.
//! 종류에 따라 의미 있는 필드(link_url, media_url)가 달라지지만 스키마에서 강제하지는 않습니다.

use super::{Comment, File};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// feather_type이 주어지지 않았을 때 사용하는 값
pub const DEFAULT_FEATHER_TYPE: &str = "Text";

/// 게시물 엔티티: `posts` 테이블 한 행
///
/// 필드 순서가 곧 JSON 응답의 키 순서입니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub feather_type: String,
    pub link_url: Option<String>,
    pub media_url: Option<String>,
    /// 좋아요 수. `POST /like` 한 번에 정확히 1씩만 증가합니다.
    pub likes_count: i64,
    /// 조회 수. `POST /view` 한 번에 정확히 1씩만 증가합니다.
    pub views_count: i64,
    /// 저작권 관련 필드 (선택)
    pub attribution: Option<String>,
    pub copyright_info: Option<String>,
}

/// 클라이언트에게 돌려주는 게시물 전체 모습
///
/// `#[serde(flatten)]`: `post`의 필드를 중첩 객체가 아닌 같은 레벨의 키로 펼칩니다.
/// 결과: `{ "id": 1, "title": "...", ..., "tags": [...], "comments": [...] }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostDetail {
    #[serde(flatten)]
    pub post: Post,
    /// 태그 이름 목록 (연결된 순서)
    pub tags: Vec<String>,
    /// 카테고리 이름 목록 (연결된 순서)
    pub categories: Vec<String>,
    pub files: Vec<File>,
    pub comments: Vec<Comment>,
}

/// 게시물 생성 요청: `POST /api/posts`의 요청 본문
///
/// 필수 필드(title, content)도 Option으로 받고, 검사는 `into_new_post()`에서 합니다.
///
/// `tags`/`categories`는 `Value`로 받습니다. 배열이 아닌 값(`"tags": "news"`)은
/// 본문 전체를 거부하지 않고 빈 목록으로 취급합니다.
#[derive(Debug, Default, Deserialize)]
pub struct CreatePostRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub feather_type: Option<String>,
    pub link_url: Option<String>,
    pub media_url: Option<String>,
    pub attribution: Option<String>,
    pub copyright_info: Option<String>,
    pub tags: Option<Value>,
    pub categories: Option<Value>,
}

/// 검증된 게시물 생성 데이터
#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub feather_type: String,
    pub link_url: Option<String>,
    pub media_url: Option<String>,
    pub attribution: Option<String>,
    pub copyright_info: Option<String>,
    /// 요청에 들어온 그대로의 태그 이름 (정규화는 DB 계층에서 수행)
    pub tags: Vec<String>,
    pub categories: Vec<String>,
}

impl CreatePostRequest {
    /// 필수 필드를 확인하고 기본값을 채워 `NewPost`로 변환합니다.
    ///
    /// title 또는 content가 없거나 빈 문자열이면 `None`을 반환합니다.
    pub fn into_new_post(self) -> Option<NewPost> {
        let title = self.title.filter(|t| !t.is_empty())?;
        let content = self.content.filter(|c| !c.is_empty())?;

        Some(NewPost {
            title,
            content,
            feather_type: self
                .feather_type
                .unwrap_or_else(|| DEFAULT_FEATHER_TYPE.to_string()),
            link_url: self.link_url,
            media_url: self.media_url,
            attribution: self.attribution,
            copyright_info: self.copyright_info,
            tags: name_list(self.tags),
            categories: name_list(self.categories),
        })
    }
}

/// JSON 배열에서 문자열 원소만 골라냅니다. 배열이 아니면 빈 목록입니다.
fn name_list(value: Option<Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(name) => Some(name),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    }
}
