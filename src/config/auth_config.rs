//! # Authentication Configuration Module
//!
//! 애플리케이션 토큰(JWT)과 Google OpenID Connect 연동에 필요한 설정을 관리합니다.
//!
//! ## 필수 환경 변수 설정
//!
//! ### Google OIDC 설정
//! ```bash
//! export GOOGLE_CLIENT_ID="your-google-client-id"
//! export GOOGLE_CLIENT_SECRET="your-google-client-secret"
//! export GOOGLE_REDIRECT_URI="http://localhost:8080/login/google"
//! export OAUTH_STATE="expected-anti-forgery-state"
//! ```
//!
//! ### 선택적 Google 엔드포인트 설정
//! ```bash
//! export GOOGLE_AUTH_URI="https://accounts.google.com/o/oauth2/v2/auth"
//! export GOOGLE_TOKEN_URI="https://oauth2.googleapis.com/token"
//! export GOOGLE_JWKS_URI="https://www.googleapis.com/oauth2/v3/certs"
//! export GOOGLE_ISSUERS="accounts.google.com,https://accounts.google.com"
//! ```
//!
//! ### JWT 토큰 설정
//! ```bash
//! export JWT_SECRET="your-super-secret-jwt-key"
//! export JWT_EXPIRATION_HOURS="24"
//! ```
//!
//! ### 외부 HTTP 호출
//! ```bash
//! export HTTP_CLIENT_TIMEOUT_SECONDS="10"
//! ```

use std::env;
use std::time::Duration;
use crate::config::Environment;
use crate::core::errors::{AppError, AppResult};

const DEV_JWT_SECRET: &str = "marketplace-dev-secret";

pub struct GoogleOAuthConfig;

impl GoogleOAuthConfig {
    pub fn client_id() -> AppResult<String> {
        required_var("GOOGLE_CLIENT_ID")
    }

    pub fn client_secret() -> AppResult<String> {
        required_var("GOOGLE_CLIENT_SECRET")
    }

    pub fn redirect_uri() -> String {
        env::var("GOOGLE_REDIRECT_URI").unwrap_or_default()
    }

    pub fn auth_uri() -> String {
        env::var("GOOGLE_AUTH_URI")
            .unwrap_or_else(|_| "https://accounts.google.com/o/oauth2/v2/auth".to_string())
    }

    pub fn token_uri() -> String {
        env::var("GOOGLE_TOKEN_URI")
            .unwrap_or_else(|_| "https://oauth2.googleapis.com/token".to_string())
    }

    pub fn jwks_uri() -> String {
        env::var("GOOGLE_JWKS_URI")
            .unwrap_or_else(|_| "https://www.googleapis.com/oauth2/v3/certs".to_string())
    }

    /// 허용되는 `iss` 값 목록 (쉼표 구분)
    pub fn issuers() -> Vec<String> {
        parse_issuers(
            &env::var("GOOGLE_ISSUERS")
                .unwrap_or_else(|_| "accounts.google.com,https://accounts.google.com".to_string()),
        )
    }

    /// 콜백에서 돌아와야 하는 anti-forgery state 값
    pub fn expected_state() -> AppResult<String> {
        required_var("OAUTH_STATE")
    }

    /// 현재 환경 변수로부터 설정 스냅샷을 만듭니다.
    pub fn settings() -> AppResult<GoogleOAuthSettings> {
        Ok(GoogleOAuthSettings {
            client_id: Self::client_id()?,
            client_secret: Self::client_secret()?,
            redirect_uri: Self::redirect_uri(),
            auth_uri: Self::auth_uri(),
            token_uri: Self::token_uri(),
            jwks_uri: Self::jwks_uri(),
            issuers: Self::issuers(),
            expected_state: Self::expected_state()?,
        })
    }
}

/// Google OIDC 연동 설정 값
///
/// 서비스들은 환경 변수를 직접 읽지 않고 이 값을 주입받습니다.
#[derive(Debug, Clone)]
pub struct GoogleOAuthSettings {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
    pub auth_uri: String,
    pub token_uri: String,
    pub jwks_uri: String,
    pub issuers: Vec<String>,
    pub expected_state: String,
}

const DEFAULT_EXPIRATION_HOURS: i64 = 24;

pub struct JwtConfig;

impl JwtConfig {
    /// 애플리케이션 토큰 서명 키
    ///
    /// 운영 환경에서 `JWT_SECRET`이 없으면 에러를 반환합니다.
    pub fn secret() -> AppResult<String> {
        Self::secret_for_env(env::var("JWT_SECRET").ok(), &Environment::current())
    }

    pub fn secret_for_env(value: Option<String>, environment: &Environment) -> AppResult<String> {
        match value.filter(|secret| !secret.trim().is_empty()) {
            Some(secret) => Ok(secret),
            None if *environment == Environment::Production => Err(AppError::InternalError(
                "JWT_SECRET must be set in production".to_string(),
            )),
            None => {
                log::warn!("JWT_SECRET not set, using default (not secure for production!)");
                Ok(DEV_JWT_SECRET.to_string())
            }
        }
    }

    pub fn expiration_hours() -> i64 {
        env::var("JWT_EXPIRATION_HOURS")
            .unwrap_or_else(|_| DEFAULT_EXPIRATION_HOURS.to_string())
            .parse()
            .unwrap_or(DEFAULT_EXPIRATION_HOURS)
    }

    pub fn expiration() -> chrono::Duration {
        Self::expiration_for_hours(Self::expiration_hours())
    }

    /// 표현할 수 없는 시간 값이면 기본값(24시간)으로 대체합니다.
    pub fn expiration_for_hours(hours: i64) -> chrono::Duration {
        chrono::Duration::try_hours(hours).unwrap_or_else(|| {
            log::warn!("JWT_EXPIRATION_HOURS 값이 범위를 벗어났습니다 ({}), 기본값 사용", hours);
            chrono::Duration::hours(DEFAULT_EXPIRATION_HOURS)
        })
    }
}

pub struct HttpClientConfig;

impl HttpClientConfig {
    /// 프로바이더 호출(JWKS 조회, 코드 교환) 타임아웃
    pub fn timeout() -> Duration {
        let seconds = env::var("HTTP_CLIENT_TIMEOUT_SECONDS")
            .unwrap_or_else(|_| "10".to_string())
            .parse()
            .unwrap_or(10);

        Duration::from_secs(seconds)
    }
}

fn required_var(name: &str) -> AppResult<String> {
    env::var(name)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .ok_or_else(|| AppError::InternalError(format!("{} must be set", name)))
}

fn parse_issuers(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|issuer| !issuer.is_empty())
        .map(str::to_string)
        .collect()
}
