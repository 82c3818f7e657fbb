//! 테스트 전용 픽스처와 테스트 더블
//!
//! RSA 서명 키(PEM)는 `keys/`에 있으며, JWKS 구성요소(n, e)는 공개 키에서 직접 계산합니다.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use async_trait::async_trait;
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use chrono::Utc;
use jsonwebtoken::jwk::{
    AlgorithmParameters, CommonParameters, KeyAlgorithm, PublicKeyUse, RSAKeyParameters, RSAKeyType,
};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use once_cell::sync::Lazy;
use rsa::{pkcs1::DecodeRsaPrivateKey, traits::PublicKeyParts, RsaPrivateKey};
use serde_json::{json, Value};
use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::users::user::User;
use crate::domain::models::oauth::{RemoteKey, RemoteKeySet};
use crate::repositories::users::{InMemoryUserRepository, UserStore};
use crate::services::auth::{IdentityExchangeClient, JwksFetcher};

pub const SIGNING_KEY_PEM: &str = include_str!("keys/signing_key.pem");
/// 키 셋에 없는 키. 위조 서명 테스트에 사용합니다.
pub const FOREIGN_KEY_PEM: &str = include_str!("keys/foreign_key.pem");

pub const TEST_KID: &str = "test-key-1";
pub const TEST_CLIENT_ID: &str = "marketplace-test.apps.googleusercontent.com";
pub const TEST_ISSUER: &str = "https://accounts.google.com";
pub const TEST_STATE: &str = "expected-state";

static SIGNING_KEY: Lazy<RemoteKey> = Lazy::new(|| remote_key(TEST_KID, SIGNING_KEY_PEM));

/// PEM 개인 키의 공개 부분을 JWKS 키로 변환합니다.
pub fn remote_key(kid: &str, pem: &str) -> RemoteKey {
    let private_key = RsaPrivateKey::from_pkcs1_pem(pem).unwrap();

    RemoteKey {
        common: CommonParameters {
            public_key_use: Some(PublicKeyUse::Signature),
            key_algorithm: Some(KeyAlgorithm::RS256),
            key_id: Some(kid.to_string()),
            ..Default::default()
        },
        algorithm: AlgorithmParameters::RSA(RSAKeyParameters {
            key_type: RSAKeyType::RSA,
            n: URL_SAFE_NO_PAD.encode(private_key.n().to_bytes_be()),
            e: URL_SAFE_NO_PAD.encode(private_key.e().to_bytes_be()),
        }),
    }
}

/// 테스트 서명 키 하나를 담은 키 셋
pub fn rsa_key_set() -> RemoteKeySet {
    RemoteKeySet {
        keys: vec![SIGNING_KEY.clone()],
    }
}

/// 키가 하나도 없는 키 셋
pub fn empty_key_set() -> RemoteKeySet {
    RemoteKeySet { keys: Vec::new() }
}

/// 테스트 서명 키와 kid가 다른 키만 담은 키 셋
pub fn key_set_without_test_kid() -> RemoteKeySet {
    let mut other = SIGNING_KEY.clone();
    other.common.key_id = Some("rotated-key".to_string());
    RemoteKeySet { keys: vec![other] }
}

/// Google ID 토큰 형태의 유효한 클레임
pub fn identity_claims(email: &str) -> Value {
    let now = Utc::now().timestamp();

    json!({
        "iss": TEST_ISSUER,
        "aud": TEST_CLIENT_ID,
        "sub": "108234567890",
        "email": email,
        "email_verified": true,
        "given_name": "A",
        "family_name": "B",
        "iat": now,
        "exp": now + 3600,
    })
}

/// 주어진 키로 RS256 서명한 compact 토큰을 만듭니다.
pub fn mint_identity_token(kid: Option<&str>, pem: &str, claims: &Value) -> String {
    let mut header = Header::new(Algorithm::RS256);
    header.kid = kid.map(str::to_string);

    let key = EncodingKey::from_rsa_pem(pem.as_bytes()).unwrap();
    encode(&header, claims, &key).unwrap()
}

/// 테스트 서명 키와 `TEST_KID`로 서명한 토큰
pub fn signed_identity_token(claims: &Value) -> String {
    mint_identity_token(Some(TEST_KID), SIGNING_KEY_PEM, claims)
}

/// 호출 횟수를 세는 JWKS fetcher
pub struct CountingJwksFetcher {
    result: Result<RemoteKeySet, String>,
    calls: AtomicUsize,
}

impl CountingJwksFetcher {
    pub fn returning(key_set: RemoteKeySet) -> Self {
        Self { result: Ok(key_set), calls: AtomicUsize::new(0) }
    }

    pub fn failing(message: &str) -> Self {
        Self { result: Err(message.to_string()), calls: AtomicUsize::new(0) }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl JwksFetcher for CountingJwksFetcher {
    async fn fetch(&self) -> AppResult<RemoteKeySet> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.result.clone().map_err(AppError::KeySetUnavailable)
    }
}

/// 미리 정한 응답을 돌려주는 코드 교환 클라이언트
pub struct ScriptedExchangeClient {
    response: AppResult<String>,
    calls: AtomicUsize,
    last_code: Mutex<Option<String>>,
}

impl ScriptedExchangeClient {
    pub fn returning(raw_token: impl Into<String>) -> Self {
        Self::with_response(Ok(raw_token.into()))
    }

    pub fn failing(error: AppError) -> Self {
        Self::with_response(Err(error))
    }

    fn with_response(response: AppResult<String>) -> Self {
        Self {
            response,
            calls: AtomicUsize::new(0),
            last_code: Mutex::new(None),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_code(&self) -> Option<String> {
        self.last_code.lock().unwrap().clone()
    }
}

#[async_trait]
impl IdentityExchangeClient for ScriptedExchangeClient {
    async fn exchange_code(&self, auth_code: &str) -> AppResult<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_code.lock().unwrap() = Some(auth_code.to_string());
        self.response.clone()
    }

    fn authorization_url(&self, state: &str) -> String {
        format!("https://idp.test/auth?state={}", state)
    }
}

/// 조회와 저장 사이에 다른 요청이 같은 login을 먼저 저장하는 상황을 재현하는 저장소
///
/// 첫 `find_by_login`은 항상 `None`을 반환하고, `save`는 경쟁 요청의 레코드를 먼저
/// 넣은 뒤 `ConflictError`를 반환합니다. `competitor_wins = false`이면 경쟁 레코드 없이
/// 충돌만 보고합니다.
pub struct RacingUserStore {
    inner: InMemoryUserRepository,
    competitor_wins: bool,
    finds: AtomicUsize,
    saves: AtomicUsize,
}

impl RacingUserStore {
    pub fn new(competitor_wins: bool) -> Self {
        Self {
            inner: InMemoryUserRepository::new(),
            competitor_wins,
            finds: AtomicUsize::new(0),
            saves: AtomicUsize::new(0),
        }
    }

    pub fn saves(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    pub fn stored(&self) -> usize {
        self.inner.len()
    }
}

#[async_trait]
impl UserStore for RacingUserStore {
    async fn find_by_login(&self, login: &str) -> AppResult<Option<User>> {
        if self.finds.fetch_add(1, Ordering::SeqCst) == 0 {
            return Ok(None);
        }
        self.inner.find_by_login(login).await
    }

    async fn save(&self, user: User) -> AppResult<User> {
        self.saves.fetch_add(1, Ordering::SeqCst);

        if self.competitor_wins {
            let competitor = User::new_federated(&user.login, "Competitor".to_string(), String::new());
            self.inner.save(competitor).await?;
        }

        Err(AppError::ConflictError(format!("이미 등록된 login입니다: {}", user.login)))
    }
}
