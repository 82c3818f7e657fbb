//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 생성자로 의존성을 주입받으며, 조립은 [`crate::core::registry`]에서 한 번 이루어집니다.
//!
//! - [`auth`] - 애플리케이션 토큰, 외부 신원 로그인, 요청 인증
//! - [`users`] - 외부 신원 프로비저닝

pub mod users;
pub mod auth;
