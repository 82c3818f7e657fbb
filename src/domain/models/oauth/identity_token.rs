//! 외부 신원 토큰 (OIDC `id_token`)
//!
//! 서명 검증 전후의 토큰을 서로 다른 타입으로 구분합니다.
//!
//! - [`IdentityToken`]: 구조만 확인된 토큰. 헤더의 `kid`는 키 선택에만 쓰이고,
//!   클레임은 외부에 노출되지 않습니다.
//! - [`VerifiedIdentityToken`]: 서명과 클레임 검증을 통과한 토큰.
//!   검증기만 만들 수 있으며, 신원 클레임은 이 타입에서만 읽을 수 있습니다.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use jsonwebtoken::decode_header;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use crate::core::errors::{AppError, AppResult};

/// 구조 파싱만 끝난(서명 미검증) 신원 토큰
#[derive(Debug, Clone)]
pub struct IdentityToken {
    raw: String,
    key_id: Option<String>,
    claims: Map<String, Value>,
}

impl IdentityToken {
    /// `header.payload.signature` 형식의 compact 토큰을 파싱합니다.
    ///
    /// 서명은 확인하지 않습니다. 세그먼트 수, Base64URL 인코딩, JOSE 헤더, JSON 형식 중
    /// 하나라도 맞지 않으면 `TokenMalformed`를 반환합니다.
    pub fn parse(raw: &str) -> AppResult<Self> {
        let raw = raw.trim();
        let segments: Vec<&str> = raw.split('.').collect();

        if segments.len() != 3 || segments.iter().any(|segment| segment.is_empty()) {
            return Err(AppError::TokenMalformed(
                "토큰은 header.payload.signature 세 부분으로 구성되어야 합니다".to_string(),
            ));
        }

        let header = decode_header(raw)
            .map_err(|e| AppError::TokenMalformed(format!("토큰 header 파싱 실패: {}", e)))?;
        let claims: Map<String, Value> = decode_segment(segments[1], "payload")?;

        Ok(Self {
            raw: raw.to_string(),
            key_id: header.kid,
            claims,
        })
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// 서명 키 식별자 (검증되지 않은 헤더 값)
    pub fn key_id(&self) -> Option<&str> {
        self.key_id.as_deref()
    }

    /// 서명 검증을 통과한 토큰으로 전환합니다. 검증기에서만 호출합니다.
    pub(crate) fn into_verified(self) -> VerifiedIdentityToken {
        VerifiedIdentityToken {
            key_id: self.key_id,
            claims: self.claims,
        }
    }
}

/// 서명 및 클레임 검증을 통과한 신원 토큰
#[derive(Debug, Clone)]
pub struct VerifiedIdentityToken {
    key_id: Option<String>,
    claims: Map<String, Value>,
}

impl VerifiedIdentityToken {
    pub fn key_id(&self) -> Option<&str> {
        self.key_id.as_deref()
    }

    pub fn claims(&self) -> &Map<String, Value> {
        &self.claims
    }
}

fn decode_segment<T: DeserializeOwned>(segment: &str, name: &str) -> AppResult<T> {
    let bytes = URL_SAFE_NO_PAD
        .decode(segment)
        .map_err(|e| AppError::TokenMalformed(format!("토큰 {} 디코딩 실패: {}", name, e)))?;

    serde_json::from_slice(&bytes)
        .map_err(|e| AppError::TokenMalformed(format!("토큰 {} 파싱 실패: {}", name, e)))
}
