//! # Application Error Handling System
//!
//! 인증 코어와 이를 감싸는 HTTP 계층이 공유하는 통합 에러 처리 시스템입니다.
//! 각 단계는 예외 대신 `AppError` 값을 반환하고, 호출자는 `?`로 첫 실패에서
//! 즉시 중단합니다.
//!
//! ## 에러 분류
//!
//! ### 인증/연동 에러
//! - **StateInvalid**: 콜백의 anti-forgery state 불일치
//! - **IdentityProviderError**: 프로바이더 네트워크/응답 상태 오류 (원본 응답 본문 포함)
//! - **TokenExchangeInvalid**: 토큰 엔드포인트 응답 형식 오류 (`id_token` 없음 등)
//! - **TokenMalformed**: 토큰 구조(헤더/클레임) 파싱 실패
//! - **KeySetUnavailable**: JWKS 조회 실패 또는 빈 키 셋
//! - **TokenInvalid**: 서명 불일치, kid 불일치, 클레임 검증 실패
//! - **ClaimMissing**: 필수 클레임 누락
//! - **TokenExpired**: 애플리케이션 토큰 만료
//!
//! ### 인프라 에러
//! - 데이터베이스, Redis, 입력 검증, 충돌, 내부 오류
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status |
//! |----------|-------------|
//! | `StateInvalid`, `TokenMalformed`, `TokenInvalid`, `ClaimMissing`, `ValidationError` | 400 Bad Request |
//! | `TokenExpired`, `AuthenticationError` | 401 Unauthorized |
//! | `NotFound` | 404 Not Found |
//! | `ConflictError` | 409 Conflict |
//! | `IdentityProviderError`, `TokenExchangeInvalid`, `KeySetUnavailable`, 인프라 에러 | 500 Internal Server Error |
//!
//! 응답 본문은 항상 `{"message", "time", "status"}` 형식입니다.
//!
//! ```rust,ignore
//! use crate::core::errors::{AppError, AppResult};
//!
//! fn check_state(received: &str, expected: &str) -> AppResult<()> {
//!     if received != expected {
//!         return Err(AppError::StateInvalid("state 값이 일치하지 않습니다".to_string()));
//!     }
//!     Ok(())
//! }
//! ```

use actix_web::http::StatusCode;
use chrono::Utc;
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AppError {
    #[error("Invalid state: {0}")]
    StateInvalid(String),

    #[error("Identity provider error: {0}")]
    IdentityProviderError(String),

    #[error("Invalid token exchange response: {0}")]
    TokenExchangeInvalid(String),

    #[error("Malformed token: {0}")]
    TokenMalformed(String),

    #[error("Key set unavailable: {0}")]
    KeySetUnavailable(String),

    #[error("Invalid token: {0}")]
    TokenInvalid(String),

    /// 누락된 클레임 이름
    #[error("Required claim is missing: {0}")]
    ClaimMissing(String),

    #[error("Token expired: {0}")]
    TokenExpired(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict error: {0}")]
    ConflictError(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Redis error: {0}")]
    RedisError(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 로그에 남길 짧은 에러 종류 이름
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::StateInvalid(_) => "StateInvalid",
            AppError::IdentityProviderError(_) => "IdentityProviderError",
            AppError::TokenExchangeInvalid(_) => "TokenExchangeInvalid",
            AppError::TokenMalformed(_) => "TokenMalformed",
            AppError::KeySetUnavailable(_) => "KeySetUnavailable",
            AppError::TokenInvalid(_) => "TokenInvalid",
            AppError::ClaimMissing(_) => "ClaimMissing",
            AppError::TokenExpired(_) => "TokenExpired",
            AppError::ValidationError(_) => "ValidationError",
            AppError::AuthenticationError(_) => "AuthenticationError",
            AppError::NotFound(_) => "NotFound",
            AppError::ConflictError(_) => "ConflictError",
            AppError::DatabaseError(_) => "DatabaseError",
            AppError::RedisError(_) => "RedisError",
            AppError::InternalError(_) => "InternalError",
        }
    }
}

/// 에러 응답 본문
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
    pub time: String,
    pub status: u16,
}

impl ErrorResponse {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            time: Utc::now().to_rfc3339(),
            status: status.as_u16(),
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::StateInvalid(_)
            | AppError::TokenMalformed(_)
            | AppError::TokenInvalid(_)
            | AppError::ClaimMissing(_)
            | AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::TokenExpired(_) | AppError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ConflictError(_) => StatusCode::CONFLICT,
            AppError::IdentityProviderError(_)
            | AppError::TokenExchangeInvalid(_)
            | AppError::KeySetUnavailable(_)
            | AppError::DatabaseError(_)
            | AppError::RedisError(_)
            | AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> actix_web::HttpResponse {
        let status = self.status_code();

        actix_web::HttpResponse::build(status).json(ErrorResponse::new(status, self.to_string()))
    }
}

pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    fn context(self, msg: &str) -> AppResult<T>;

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;
    use actix_web::body::MessageBody;

    fn body_json(error: &AppError) -> serde_json::Value {
        let bytes = error.error_response().into_body().try_into_bytes().unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn test_login_failures_map_to_bad_request() {
        let errors = [
            AppError::StateInvalid("mismatch".to_string()),
            AppError::TokenMalformed("bad segments".to_string()),
            AppError::TokenInvalid("bad signature".to_string()),
            AppError::ClaimMissing("email".to_string()),
        ];

        for error in errors {
            assert_eq!(error.status_code(), StatusCode::BAD_REQUEST, "{}", error.kind());
        }
    }

    #[test]
    fn test_provider_failures_map_to_server_error() {
        let errors = [
            AppError::IdentityProviderError("invalid_grant".to_string()),
            AppError::KeySetUnavailable("timeout".to_string()),
            AppError::TokenExchangeInvalid("no id_token".to_string()),
        ];

        for error in errors {
            assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR, "{}", error.kind());
        }
    }

    #[test]
    fn test_expired_token_is_unauthorized() {
        let error = AppError::TokenExpired("expired".to_string());
        assert_eq!(error.status_code(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_error_body_shape() {
        let json = body_json(&AppError::ClaimMissing("email".to_string()));

        assert_eq!(json["status"], 400);
        assert_eq!(json["message"], "Required claim is missing: email");
        assert!(chrono::DateTime::parse_from_rfc3339(json["time"].as_str().unwrap()).is_ok());
    }

    #[test]
    fn test_error_context_trait() {
        let result: Result<(), &str> = Err("original error");
        let app_result = result.context("Additional context");

        if let Err(AppError::InternalError(msg)) = app_result {
            assert!(msg.contains("Additional context"));
            assert!(msg.contains("original error"));
        } else {
            panic!("Expected InternalError");
        }
    }
}
