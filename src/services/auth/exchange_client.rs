//! 신원 제공자 토큰 엔드포인트 클라이언트
//!
//! Authorization Code를 프로바이더의 ID 토큰으로 교환하고,
//! 검증된 토큰에서 로그인에 필요한 신원 클레임을 꺼냅니다.
//!
//! # OAuth 2.0 Authorization Code 교환
//!
//! ```text
//! POST {token_uri}
//! Content-Type: application/x-www-form-urlencoded
//!
//! client_id=..&client_secret=..&redirect_uri=..&grant_type=authorization_code&code=..
//! ```
//!
//! 재시도는 하지 않습니다. 프로바이더 에러는 해당 로그인 시도의 최종 실패입니다.

use std::time::Duration;
use async_trait::async_trait;
use serde_json::{Map, Value};
use crate::config::GoogleOAuthSettings;
use crate::core::errors::{AppError, AppResult};
use crate::domain::models::oauth::{FederatedIdentityClaims, TokenEndpointResponse, VerifiedIdentityToken};

pub const EMAIL_CLAIM: &str = "email";
pub const GIVEN_NAME_CLAIM: &str = "given_name";
/// 선택 클레임. 없어도 실패하지 않습니다.
pub const FAMILY_NAME_CLAIM: &str = "family_name";

const LOGIN_SCOPE: &str = "openid email profile";

/// 신원 제공자별 코드 교환 클라이언트
#[async_trait]
pub trait IdentityExchangeClient: Send + Sync {
    /// Authorization Code를 원시 ID 토큰 문자열로 교환합니다.
    async fn exchange_code(&self, auth_code: &str) -> AppResult<String>;

    /// 사용자를 보낼 프로바이더 로그인 URL
    fn authorization_url(&self, state: &str) -> String;
}

/// Google 토큰 엔드포인트 클라이언트
pub struct GoogleExchangeClient {
    client: reqwest::Client,
    settings: GoogleOAuthSettings,
}

impl GoogleExchangeClient {
    pub fn new(settings: GoogleOAuthSettings, timeout: Duration) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::InternalError(format!("HTTP 클라이언트 생성 실패: {}", e)))?;

        Ok(Self { client, settings })
    }

    fn form_params<'a>(&'a self, auth_code: &'a str) -> Vec<(&'static str, &'a str)> {
        [
            (true, "client_id", self.settings.client_id.as_str()),
            (true, "client_secret", self.settings.client_secret.as_str()),
            (!self.settings.redirect_uri.is_empty(), "redirect_uri", self.settings.redirect_uri.as_str()),
            (true, "grant_type", "authorization_code"),
            (true, "code", auth_code),
        ]
        .into_iter()
        .filter(|(include, _, _)| *include)
        .map(|(_, key, value)| (key, value))
        .collect()
    }
}

#[async_trait]
impl IdentityExchangeClient for GoogleExchangeClient {
    async fn exchange_code(&self, auth_code: &str) -> AppResult<String> {
        let response = self.client
            .post(&self.settings.token_uri)
            .form(&self.form_params(auth_code))
            .send()
            .await
            .map_err(|e| AppError::IdentityProviderError(format!("Google 토큰 요청 실패: {}", e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| AppError::IdentityProviderError(format!("Google 토큰 응답 읽기 실패: {}", e)))?;

        if !status.is_success() {
            return Err(AppError::IdentityProviderError(format!(
                "Google 토큰 교환 실패 ({}): {}", status, body
            )));
        }

        extract_identity_token(&body)
    }

    fn authorization_url(&self, state: &str) -> String {
        let params = [
            (true, "client_id", self.settings.client_id.as_str()),
            (!self.settings.redirect_uri.is_empty(), "redirect_uri", self.settings.redirect_uri.as_str()),
            (true, "scope", LOGIN_SCOPE),
            (true, "response_type", "code"),
            (true, "state", state),
        ];

        let query_string = params
            .iter()
            .filter(|(include, _, _)| *include)
            .map(|(_, k, v)| format!("{}={}", k, urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");

        format!("{}?{}", self.settings.auth_uri, query_string)
    }
}

/// 토큰 엔드포인트 응답 본문에서 `id_token`을 꺼냅니다.
///
/// # Errors
///
/// * `AppError::TokenExchangeInvalid` - JSON이 아니거나 `id_token`이 없음
pub fn extract_identity_token(body: &str) -> AppResult<String> {
    let response: TokenEndpointResponse = serde_json::from_str(body)
        .map_err(|e| AppError::TokenExchangeInvalid(format!("토큰 응답 파싱 실패: {}", e)))?;

    response
        .id_token
        .filter(|token| !token.is_empty())
        .ok_or_else(|| AppError::TokenExchangeInvalid("응답에 id_token이 없습니다".to_string()))
}

/// 클레임 값을 문자열로 반환합니다.
///
/// 없거나 비어 있으면 클레임 이름을 담은 `ClaimMissing`을 반환합니다.
/// `family_name`만 예외로, 없으면 빈 문자열을 반환합니다.
pub fn extract_claim(claims: &Map<String, Value>, name: &str) -> AppResult<String> {
    let value = match claims.get(name) {
        Some(Value::String(value)) => value.clone(),
        Some(Value::Number(value)) => value.to_string(),
        Some(Value::Bool(value)) => value.to_string(),
        _ => String::new(),
    };

    if value.is_empty() && name != FAMILY_NAME_CLAIM {
        return Err(AppError::ClaimMissing(name.to_string()));
    }

    Ok(value)
}

/// 검증된 토큰에서 로그인에 쓰는 신원 클레임을 추출합니다.
pub fn extract_identity_claims(token: &VerifiedIdentityToken) -> AppResult<FederatedIdentityClaims> {
    let claims = token.claims();

    let email = extract_claim(claims, EMAIL_CLAIM)?;
    let given_name = extract_claim(claims, GIVEN_NAME_CLAIM)?;
    let family_name = extract_claim(claims, FAMILY_NAME_CLAIM)?;

    Ok(FederatedIdentityClaims {
        subject: extract_claim(claims, "sub")?,
        key_id: token.key_id().unwrap_or_default().to_string(),
        issuer: extract_claim(claims, "iss")?,
        expiration: claims.get("exp").and_then(Value::as_i64).unwrap_or_default(),
        email,
        given_name,
        family_name: Some(family_name).filter(|name| !name.is_empty()),
    })
}
