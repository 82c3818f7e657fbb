//! 외부 신원 토큰 검증
//!
//! 프로바이더가 발급한 ID 토큰의 서명을 캐시된 키 셋으로 검증하고,
//! 로그인 콜백의 anti-forgery state를 확인합니다.
//!
//! ## 검증 순서
//!
//! 1. 키 셋 조회. 비어 있거나 가져올 수 없으면 `KeySetUnavailable`
//! 2. 검증되지 않은 헤더의 `kid`와 일치하는 키 선택. `kid`가 없거나, 일치하는 키가 없거나,
//!    RS256용 RSA 키가 아니면 `TokenInvalid` (다른 키로 재시도하지 않음)
//! 3. RS256 서명 및 `aud`/`iss`/`exp` 검증. 라이브러리 에러를 포함한 모든 실패는 `TokenInvalid`

use std::sync::Arc;
use async_trait::async_trait;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde_json::{Map, Value};
use sha2::{Digest, Sha256};
use crate::config::GoogleOAuthSettings;
use crate::core::errors::{AppError, AppResult};
use crate::domain::models::oauth::{find_key, is_rs256_key, IdentityToken, VerifiedIdentityToken};
use crate::services::auth::key_set_cache::KeySetCache;

/// 콜백으로 돌아온 state가 기대값과 정확히 같은지 확인합니다.
///
/// 두 값의 SHA-256 다이제스트를 비교하므로 비교 시간이 공통 접두사 길이에 좌우되지 않습니다.
/// 빈 state는 항상 거부됩니다.
pub fn validate_state(received: &str, expected: &str) -> AppResult<()> {
    if received.is_empty() {
        return Err(AppError::StateInvalid("state 값이 비어 있습니다".to_string()));
    }

    if Sha256::digest(received.as_bytes()) != Sha256::digest(expected.as_bytes()) {
        return Err(AppError::StateInvalid("state 값이 일치하지 않습니다".to_string()));
    }

    Ok(())
}

/// 신원 제공자별 토큰 검증기
#[async_trait]
pub trait FederatedTokenVerifier: Send + Sync {
    fn validate_state(&self, received: &str, expected: &str) -> AppResult<()> {
        validate_state(received, expected)
    }

    /// 구조만 확인된 토큰을 검증하여 신뢰 가능한 토큰으로 전환합니다.
    async fn verify(&self, token: IdentityToken) -> AppResult<VerifiedIdentityToken>;
}

/// Google ID 토큰 검증기
pub struct GoogleTokenVerifier {
    key_set_cache: Arc<KeySetCache>,
    audience: String,
    issuers: Vec<String>,
}

impl GoogleTokenVerifier {
    pub fn new(key_set_cache: Arc<KeySetCache>, audience: impl Into<String>, issuers: Vec<String>) -> Self {
        Self {
            key_set_cache,
            audience: audience.into(),
            issuers,
        }
    }

    pub fn from_settings(settings: &GoogleOAuthSettings, key_set_cache: Arc<KeySetCache>) -> Self {
        Self::new(key_set_cache, settings.client_id.clone(), settings.issuers.clone())
    }

    fn validation(&self) -> Validation {
        let mut validation = Validation::new(Algorithm::RS256);
        validation.set_audience(&[self.audience.as_str()]);
        validation.set_issuer(self.issuers.as_slice());
        validation.set_required_spec_claims(&["exp", "aud", "iss"]);
        validation
    }
}

#[async_trait]
impl FederatedTokenVerifier for GoogleTokenVerifier {
    async fn verify(&self, token: IdentityToken) -> AppResult<VerifiedIdentityToken> {
        let key_set = self.key_set_cache.get_key_set().await?;

        let kid = token
            .key_id()
            .ok_or_else(|| AppError::TokenInvalid("토큰 헤더에 kid가 없습니다".to_string()))?;

        let key = find_key(&key_set, kid).ok_or_else(|| {
            log::debug!("키 셋에 없는 kid: {}", kid);
            AppError::TokenInvalid("서명 키를 찾을 수 없습니다".to_string())
        })?;

        if !is_rs256_key(key) {
            log::debug!("RS256에 사용할 수 없는 키 (kid={})", kid);
            return Err(AppError::TokenInvalid("서명 키 타입이 일치하지 않습니다".to_string()));
        }

        let decoding_key = DecodingKey::from_jwk(key)
            .map_err(|e| AppError::TokenInvalid(format!("서명 키를 사용할 수 없습니다: {}", e)))?;

        decode::<Map<String, Value>>(token.raw(), &decoding_key, &self.validation()).map_err(|e| {
            log::debug!("ID 토큰 검증 실패 (kid={}): {}", kid, e);
            AppError::TokenInvalid("토큰이 유효하지 않습니다".to_string())
        })?;

        Ok(token.into_verified())
    }
}
