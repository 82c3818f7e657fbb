//! # 사용자 리포지토리 구현
//!
//! MongoDB를 주 저장소로 사용하고, Redis를 통한 조회 캐싱을 지원합니다.
//!
//! ## 특징
//!
//! - **유일성 보장**: `login` 필드 유니크 인덱스. 동시 생성 경합은 중복 키 에러(11000)로
//!   드러나고 `ConflictError`로 변환됩니다.
//! - **읽기 캐시**: 요청마다 반복되는 login 조회를 Redis에 10분간 캐싱합니다.
//!   인증 코어는 사용자 레코드를 수정하지 않으므로 만료 외의 무효화는 필요 없습니다.

use std::sync::Arc;
use async_trait::async_trait;
use mongodb::{bson::doc, options::IndexOptions, Collection, IndexModel};
use mongodb::error::{ErrorKind, WriteFailure};
use crate::{
    caching::redis::RedisClient,
    core::errors::{AppError, AppResult},
    db::Database,
    domain::entities::users::user::{normalize_login, User},
    repositories::users::user_store::UserStore,
};

const COLLECTION_NAME: &str = "users";
const CACHE_TTL_SECONDS: u64 = 600;
const DUPLICATE_KEY_CODE: i32 = 11000;

pub struct UserRepository {
    db: Arc<Database>,

    redis: Option<Arc<RedisClient>>,
}

impl UserRepository {
    pub fn new(db: Arc<Database>, redis: Option<Arc<RedisClient>>) -> Self {
        Self { db, redis }
    }

    fn collection(&self) -> Collection<User> {
        self.db.get_database().collection::<User>(COLLECTION_NAME)
    }

    fn cache_key(login: &str) -> String {
        format!("user:login:{}", login)
    }

    /// login 유니크 인덱스를 생성합니다. 서버 시작 시 한 번 호출합니다.
    pub async fn create_indexes(&self) -> AppResult<()> {
        let login_index = IndexModel::builder()
            .keys(doc! { "login": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("login_unique".to_string())
                .build())
            .build();

        self.collection()
            .create_indexes([login_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    async fn cached(&self, login: &str) -> Option<User> {
        let redis = self.redis.as_ref()?;

        match redis.get::<User>(&Self::cache_key(login)).await {
            Ok(user) => user,
            Err(e) => {
                log::debug!("사용자 캐시 조회 실패 ({}): {}", login, e);
                None
            }
        }
    }

    async fn cache(&self, user: &User) {
        if let Some(redis) = &self.redis {
            if let Err(e) = redis
                .set_with_expiry(&Self::cache_key(&user.login), user, CACHE_TTL_SECONDS)
                .await
            {
                log::debug!("사용자 캐시 저장 실패 ({}): {}", user.login, e);
            }
        }
    }
}

#[async_trait]
impl UserStore for UserRepository {
    async fn find_by_login(&self, login: &str) -> AppResult<Option<User>> {
        let login = normalize_login(login);

        if let Some(cached) = self.cached(&login).await {
            return Ok(Some(cached));
        }

        let user = self.collection()
            .find_one(doc! { "login": login.as_str() })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if let Some(ref user) = user {
            self.cache(user).await;
        }

        Ok(user)
    }

    async fn save(&self, mut user: User) -> AppResult<User> {
        user.login = normalize_login(&user.login);

        let result = self.collection()
            .insert_one(&user)
            .await
            .map_err(|e| {
                if is_duplicate_key(&e) {
                    AppError::ConflictError(format!("이미 등록된 login입니다: {}", user.login))
                } else {
                    AppError::DatabaseError(e.to_string())
                }
            })?;

        let id = result.inserted_id.as_object_id().ok_or_else(|| {
            AppError::InternalError("저장된 사용자 ID를 읽을 수 없습니다".to_string())
        })?;
        user.id = Some(id);

        Ok(user)
    }
}

fn is_duplicate_key(error: &mongodb::error::Error) -> bool {
    match error.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_error)) => write_error.code == DUPLICATE_KEY_CODE,
        _ => false,
    }
}
