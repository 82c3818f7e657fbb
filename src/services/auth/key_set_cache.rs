//! 원격 서명 키 셋 캐시
//!
//! 신원 제공자가 공개한 JWKS 문서를 처음 사용할 때 한 번 가져와
//! 프로세스가 끝날 때까지 재사용합니다.
//!
//! - 첫 조회는 single-flight로 동작합니다. 동시에 들어온 첫 요청들은 하나의 fetch 결과를 함께 기다립니다.
//! - fetch/파싱 실패와 빈 키 셋은 캐싱되지 않고 `KeySetUnavailable`로 반환되어 다음 호출이 다시 시도합니다.
//! - 한 번 채워진 뒤에는 무효화하지 않습니다. 프로바이더 키 교체는 프로세스 재시작 전까지 반영되지 않습니다.

use std::sync::Arc;
use std::time::Duration;
use async_trait::async_trait;
use tokio::sync::OnceCell;
use crate::core::errors::{AppError, AppResult};
use crate::domain::models::oauth::RemoteKeySet;

/// JWKS 문서를 가져오는 전송 계층
#[async_trait]
pub trait JwksFetcher: Send + Sync {
    async fn fetch(&self) -> AppResult<RemoteKeySet>;
}

/// HTTP로 JWKS URL을 조회하는 기본 구현
pub struct HttpJwksFetcher {
    client: reqwest::Client,
    jwks_uri: String,
}

impl HttpJwksFetcher {
    pub fn new(jwks_uri: impl Into<String>, timeout: Duration) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::InternalError(format!("HTTP 클라이언트 생성 실패: {}", e)))?;

        Ok(Self {
            client,
            jwks_uri: jwks_uri.into(),
        })
    }
}

#[async_trait]
impl JwksFetcher for HttpJwksFetcher {
    async fn fetch(&self) -> AppResult<RemoteKeySet> {
        let response = self.client
            .get(&self.jwks_uri)
            .send()
            .await
            .map_err(|e| AppError::KeySetUnavailable(format!("JWKS 요청 실패: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::KeySetUnavailable(format!("JWKS 응답 상태 오류: {}", status)));
        }

        response
            .json::<RemoteKeySet>()
            .await
            .map_err(|e| AppError::KeySetUnavailable(format!("JWKS 파싱 실패: {}", e)))
    }
}

/// 한 번 채워지면 프로세스 수명 동안 유지되는 키 셋 캐시
pub struct KeySetCache {
    fetcher: Arc<dyn JwksFetcher>,
    key_set: OnceCell<Arc<RemoteKeySet>>,
}

impl KeySetCache {
    pub fn new(fetcher: Arc<dyn JwksFetcher>) -> Self {
        Self {
            fetcher,
            key_set: OnceCell::new(),
        }
    }

    /// 키 셋을 반환합니다. 첫 성공 이후에는 네트워크 호출이 없습니다.
    ///
    /// # Errors
    ///
    /// * `AppError::KeySetUnavailable` - fetch/파싱 실패 또는 키가 하나도 없는 문서
    pub async fn get_key_set(&self) -> AppResult<Arc<RemoteKeySet>> {
        let key_set = self.key_set
            .get_or_try_init(|| async {
                let key_set = self.fetcher.fetch().await.map_err(|e| match e {
                    AppError::KeySetUnavailable(_) => e,
                    other => AppError::KeySetUnavailable(other.to_string()),
                })?;

                if key_set.keys.is_empty() {
                    return Err(AppError::KeySetUnavailable("키 셋에 키가 없습니다".to_string()));
                }

                log::info!("🔑 JWKS 캐시 초기화: {}개 키", key_set.keys.len());
                Ok(Arc::new(key_set))
            })
            .await?;

        Ok(Arc::clone(key_set))
    }
}
