//! 도메인 모델 모듈
//!
//! 영속되지 않는 값 객체와 외부 시스템 연동 모델들입니다.
//!
//! - [`auth`] - 요청 파이프라인에 첨부되는 인증 주체
//! - [`oauth`] - 외부 신원 제공자(OIDC) 연동 모델
//! - [`token`] - 애플리케이션 토큰 클레임

pub mod auth;
pub mod oauth;
pub mod token;

pub use auth::*;
pub use oauth::*;
pub use token::*;
