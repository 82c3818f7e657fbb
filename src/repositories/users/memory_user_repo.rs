//! 메모리 기반 사용자 리포지토리
//!
//! MongoDB 없이 로컬 개발(`USER_STORE=memory`)과 테스트에서 쓰는 구현입니다.
//! MongoDB 구현과 같은 login 유일성 규칙을 지킵니다.

use std::collections::HashMap;
use std::sync::RwLock;
use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::users::user::{normalize_login, User};
use crate::repositories::users::user_store::UserStore;

#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<String, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// 저장된 사용자 수
    pub fn len(&self) -> usize {
        self.users.read().map(|users| users.len()).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn lock_poisoned<T>(_: T) -> AppError {
    AppError::InternalError("사용자 저장소 잠금이 손상되었습니다".to_string())
}

#[async_trait]
impl UserStore for InMemoryUserRepository {
    async fn find_by_login(&self, login: &str) -> AppResult<Option<User>> {
        let users = self.users.read().map_err(lock_poisoned)?;
        Ok(users.get(&normalize_login(login)).cloned())
    }

    async fn save(&self, mut user: User) -> AppResult<User> {
        user.login = normalize_login(&user.login);

        let mut users = self.users.write().map_err(lock_poisoned)?;
        if users.contains_key(&user.login) {
            return Err(AppError::ConflictError(format!("이미 등록된 login입니다: {}", user.login)));
        }

        if user.id.is_none() {
            user.id = Some(ObjectId::new());
        }
        users.insert(user.login.clone(), user.clone());

        Ok(user)
    }
}
