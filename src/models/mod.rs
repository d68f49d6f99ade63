//! # 데이터 모델 모듈
//!
//! 블로그에서 사용하는 데이터 구조체(struct)들을 정의합니다.
//! - `post`: 게시물(Post)과 API 응답 형태(PostDetail), 생성 요청
//! - `tag`: 태그(Tag)와 이름 정규화 규칙
//! - `category`: 카테고리(Category)
//! - `file`: 게시물에 첨부된 파일 메타데이터(File)
//! - `comment`: 댓글(Comment)
//!
//! `pub use X::*;`로 재공개하므로 `crate::models::Post`처럼 짧게 접근할 수 있습니다.

pub mod category;
pub mod comment;
pub mod file;
pub mod post;
pub mod tag;

pub use category::*;
pub use comment::*;
pub use file::*;
pub use post::*;
pub use tag::*;
