//! # 태그 모델 정의
//!
//! 태그는 게시물을 분류하는 라벨이며 게시물과 다대다(N:M) 관계입니다.
//! 이름은 시스템 전체에서 유일하고, 비교와 저장 모두 소문자로 정규화한 값을 사용합니다.
//! (`"Rust"`, `"RUST"`, `"rust"`는 모두 같은 태그)

use serde::{Deserialize, Serialize};

/// 태그 엔티티: DB의 `tags` 테이블 한 행(row)에 대응합니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Tag {
    pub id: i64,
    /// 소문자로 정규화된 태그 이름
    pub name: String,
}

/// 태그/카테고리 이름을 저장·조회용 형태로 정규화합니다.
///
/// 조회와 삽입 전에 반드시 이 함수를 거쳐야 대소문자만 다른 중복 행이 생기지 않습니다.
pub fn normalize_name(name: &str) -> String {
    name.to_lowercase()
}
