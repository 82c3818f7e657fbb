//! 애플리케이션 토큰 관리 서비스 구현
//!
//! HMAC-SHA256으로 서명된 자기 완결적 Bearer 토큰을 발급하고 검증합니다.
//! 서버 측 세션 상태는 없으며, 서비스는 시크릿과 입력값만으로 동작합니다.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use jsonwebtoken::errors::ErrorKind;
use serde_json::{Map, Value};
use uuid::Uuid;
use crate::{
    config::JwtConfig,
    core::errors::{AppError, AppResult},
    domain::entities::users::user::User,
    domain::models::token::{ApplicationClaims, RESERVED_CLAIMS},
};

const BEARER_PREFIX: &str = "Bearer ";

/// 애플리케이션 토큰 서비스
///
/// 발급(`issue`), 서명 검증 후 클레임 추출(`parse_claims`),
/// 주체 일치 검증(`verify`)을 제공합니다.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    default_ttl: Duration,
}

impl TokenService {
    pub fn new(secret: &str, default_ttl: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            default_ttl,
        }
    }

    /// `JWT_SECRET`, `JWT_EXPIRATION_HOURS` 설정으로 서비스를 만듭니다.
    pub fn from_config() -> AppResult<Self> {
        Ok(Self::new(&JwtConfig::secret()?, JwtConfig::expiration()))
    }

    /// 서명된 토큰을 발급합니다.
    ///
    /// `sub`, `iat = now`, `exp = now + ttl`, 무작위 `jti`를 채우고 `extra_claims`를 병합합니다.
    /// 추가 클레임은 예약 클레임(`sub`, `iat`, `exp`, `jti`)을 덮어쓸 수 없으며, 겹치는 키는 무시됩니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 만료 시각을 표현할 수 없는 `ttl` 또는 서명 라이브러리 실패
    pub fn issue(&self, subject: &str, extra_claims: Map<String, Value>, ttl: Duration) -> AppResult<String> {
        let now = Utc::now();
        let expires_at = now
            .checked_add_signed(ttl)
            .ok_or_else(|| AppError::InternalError(format!("토큰 만료 시각 계산 실패: ttl={}", ttl)))?;

        let extra = extra_claims
            .into_iter()
            .filter(|(key, _)| {
                let reserved = RESERVED_CLAIMS.contains(&key.as_str());
                if reserved {
                    log::debug!("예약 클레임은 추가 클레임으로 덮어쓸 수 없습니다: {}", key);
                }
                !reserved
            })
            .collect();

        let claims = ApplicationClaims {
            sub: subject.to_string(),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
            jti: Uuid::new_v4().to_string(),
            extra,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AppError::InternalError(format!("토큰 생성 실패: {}", e)))
    }

    /// 사용자에게 기본 유효 기간의 토큰을 발급합니다. `role` 클레임이 포함됩니다.
    pub fn issue_for_user(&self, user: &User) -> AppResult<String> {
        let mut extra = Map::new();
        extra.insert("role".to_string(), Value::String(user.role.as_str().to_string()));

        self.issue(&user.login, extra, self.default_ttl)
    }

    /// 서명을 검증하고 클레임을 반환합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::TokenExpired` - 만료 시각이 현재 이전이거나 같음
    /// * `AppError::TokenInvalid` - 형식 오류, 서명 불일치 등 그 외 모든 실패
    pub fn parse_claims(&self, token: &str) -> AppResult<ApplicationClaims> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        let claims = decode::<ApplicationClaims>(token, &self.decoding_key, &validation)
            .map(|token_data| token_data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => AppError::TokenExpired("토큰이 만료되었습니다".to_string()),
                _ => AppError::TokenInvalid(format!("유효하지 않은 토큰입니다: {}", e)),
            })?;

        // 라이브러리는 exp == now를 허용하므로 경계를 직접 확인
        if claims.exp <= Utc::now().timestamp() {
            return Err(AppError::TokenExpired("토큰이 만료되었습니다".to_string()));
        }

        Ok(claims)
    }

    /// 토큰이 유효하고 주체가 `expected_subject`와 같은지 확인합니다.
    ///
    /// 주체가 다르면 `Ok(false)`를 반환합니다. 만료와 서명 오류는
    /// 호출자가 구분할 수 있도록 각각 `TokenExpired`, `TokenInvalid`로 반환됩니다.
    pub fn verify(&self, token: &str, expected_subject: &str) -> AppResult<bool> {
        let claims = self.parse_claims(token)?;
        Ok(claims.sub == expected_subject)
    }

    /// [`verify`](Self::verify)의 모든 실패를 `false`로 접습니다.
    pub fn is_valid(&self, token: &str, expected_subject: &str) -> bool {
        self.verify(token, expected_subject).unwrap_or(false)
    }

    /// `Authorization: Bearer {token}` 헤더 값에서 토큰 부분을 추출합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - 접두사가 없거나 토큰이 비어 있음
    pub fn extract_bearer_token(auth_header: &str) -> AppResult<&str> {
        match auth_header.strip_prefix(BEARER_PREFIX) {
            Some(token) if !token.trim().is_empty() => Ok(token.trim()),
            _ => Err(AppError::AuthenticationError("유효하지 않은 인증 헤더 형식입니다".to_string())),
        }
    }
}
