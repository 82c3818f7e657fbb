//! # Domain Entities
//!
//! 저장소에 영속되는 핵심 엔티티들입니다.
//! 인증 코어가 다루는 엔티티는 사용자(principal) 하나뿐이며,
//! 대여/구매/리뷰 등 마켓플레이스 엔티티는 이 크레이트의 범위 밖입니다.

pub mod users;

pub use users::*;
