//! 사용자 엔티티 모듈
//!
//! [`User`](user::User) 엔티티와 로그인 정규화 규칙을 제공합니다.

pub mod user;

pub use user::*;
