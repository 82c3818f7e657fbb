//! # Domain Layer Module
//!
//! 인증 코어의 도메인 계층입니다.
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── entities  - 저장소에 영속되는 사용자(principal) 엔티티
//! ├── dto       - HTTP 요청/응답 계약
//! └── models    - 토큰 클레임, 외부 신원 토큰, JWKS 등 값 객체
//!      │
//!      ▼
//! Application Layer (services)
//!      │
//!      ▼
//! Infrastructure Layer (repositories, db, caching)
//! ```

pub mod entities;
pub mod dto;
pub mod models;

pub use entities::*;
pub use models::*;
