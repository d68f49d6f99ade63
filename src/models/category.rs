use serde::{Deserialize, Serialize};

/// 카테고리 엔티티: `categories` 테이블 한 행.
///
/// 태그와 같은 규칙을 따릅니다: 이름은 유일하며 `normalize_name()`으로 소문자화한 값을 저장합니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Category {
    pub id: i64,
    pub name: String,
}
