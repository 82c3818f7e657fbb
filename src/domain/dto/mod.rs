//! 데이터 전송 객체(DTO) 모듈
//!
//! HTTP 요청/응답 계약을 정의합니다. 인증 코어가 노출하는 계약은
//! 외부 신원 로그인 콜백과 로그인 시작 URL 두 가지입니다.

pub mod auth;

pub use auth::*;
