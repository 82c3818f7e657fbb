//! 인증 및 신원 연동 서비스 모듈
//!
//! 애플리케이션 토큰 발급/검증과 Google OpenID Connect 로그인 흐름을 담당합니다.
//!
//! - [`token_service`] - HMAC 서명 애플리케이션 토큰
//! - [`key_set_cache`] - 프로바이더 JWKS 조회 및 프로세스 수명 캐시
//! - [`token_verifier`] - 외부 ID 토큰 서명 검증, anti-forgery state 확인
//! - [`exchange_client`] - Authorization Code 교환, 신원 클레임 추출
//! - [`federated_login_service`] - 위 단계를 순서대로 묶은 로그인 흐름
//! - [`request_authenticator`] - 요청별 Bearer 토큰 인증
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::auth::FederatedLoginService;
//!
//! let token = login_service.login(&query.auth_code, &query.state).await?;
//! ```

pub mod token_service;
pub mod key_set_cache;
pub mod token_verifier;
pub mod exchange_client;
pub mod federated_login_service;
pub mod request_authenticator;

pub use token_service::*;
pub use key_set_cache::*;
pub use token_verifier::*;
pub use exchange_client::*;
pub use federated_login_service::*;
pub use request_authenticator::*;
