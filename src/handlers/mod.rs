//! # HTTP Request Handlers Module
//!
//! 인증 코어를 HTTP로 노출하는 핸들러 함수들입니다.
//! 핸들러는 요청 파싱과 응답 변환만 담당하고, 로직은 서비스 계층에 위임합니다.
//!
//! ```text
//! Client
//!   │ HTTP Request
//!   ▼
//! AuthMiddleware   ← Bearer 토큰이 유효하면 AuthenticatedUser 첨부
//!   ▼
//! Handlers         ← 이 모듈
//!   ▼
//! Services         ← FederatedLoginService 등
//!   ▼
//! UserStore        ← MongoDB / 메모리
//! ```
//!
//! 모든 핸들러는 `Result<HttpResponse, AppError>`를 반환하며,
//! 에러는 `AppError`의 `ResponseError` 구현을 통해 `{"message", "time", "status"}`
//! 형식의 응답으로 변환됩니다.

pub mod auth;
