//! # 외부 신원 프로비저닝 서비스
//!
//! 검증된 외부 신원(login, 이름)을 내부 사용자 레코드에 연결합니다.
//! 레코드가 없을 때만 한 번 생성하고, 이미 있으면 그대로 반환합니다.
//!
//! ## 동시 첫 로그인
//!
//! 조회 후 생성은 원자적이지 않습니다. 같은 login으로 두 요청이 동시에 처음 로그인하면
//! 저장소의 유일성 제약이 두 번째 저장을 `ConflictError`로 거부하고, 이 서비스는
//! 먼저 저장된 레코드를 다시 읽어 반환합니다.
//!
//! ```text
//! find_by_login ── Some(user) ──────────────────────────▶ user
//!      │
//!      None
//!      ▼
//!    save ── Ok(user) ─────────────────────────────────▶ user
//!      │
//!   ConflictError
//!      ▼
//! find_by_login ── Some(user) ──────────────────────────▶ user
//!      │
//!      None ───────────────────────────────────────────▶ InternalError
//! ```

use std::sync::Arc;
use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::users::user::User;
use crate::repositories::users::UserStore;

pub struct IdentityProvisioningService {
    store: Arc<dyn UserStore>,
}

impl IdentityProvisioningService {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }

    /// login으로 사용자를 찾고, 없으면 기본 역할의 외부 연동 전용 계정을 만듭니다.
    ///
    /// 기존 레코드의 이름은 프로바이더 값으로 덮어쓰지 않습니다.
    ///
    /// # Errors
    ///
    /// * 저장소 에러 (`DatabaseError` 등)
    /// * `AppError::InternalError` - 충돌이 보고됐지만 재조회에서도 레코드가 없음
    pub async fn get_or_create(&self, login: &str, first_name: &str, last_name: &str) -> AppResult<User> {
        if let Some(existing) = self.store.find_by_login(login).await? {
            return Ok(existing);
        }

        let user = User::new_federated(login, first_name.to_string(), last_name.to_string());

        match self.store.save(user).await {
            Ok(created) => {
                log::info!("외부 연동 사용자 생성: {}", created.login);
                Ok(created)
            }
            Err(AppError::ConflictError(_)) => {
                log::debug!("동시 생성 충돌, 기존 레코드 재조회: {}", login);

                self.store.find_by_login(login).await?.ok_or_else(|| {
                    AppError::InternalError(format!(
                        "사용자 생성 충돌 후에도 레코드를 찾을 수 없습니다: {}", login
                    ))
                })
            }
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::users::user::Role;
    use crate::repositories::users::InMemoryUserRepository;
    use crate::test_support::RacingUserStore;

    #[actix_web::test]
    async fn test_get_or_create_is_idempotent() {
        let store = Arc::new(InMemoryUserRepository::new());
        let service = IdentityProvisioningService::new(store.clone());

        let first = service.get_or_create("a@x.com", "A", "B").await.unwrap();
        let second = service.get_or_create("a@x.com", "A", "B").await.unwrap();

        assert!(first.id.is_some());
        assert_eq!(first.id, second.id);
        assert_eq!(store.len(), 1);
    }

    #[actix_web::test]
    async fn test_new_user_is_federated_with_default_role() {
        let service = IdentityProvisioningService::new(Arc::new(InMemoryUserRepository::new()));

        let user = service.get_or_create("A@X.com", "A", "").await.unwrap();

        assert_eq!(user.login, "a@x.com");
        assert_eq!(user.role, Role::User);
        assert!(user.password_hash.is_none());
        assert_eq!(user.last_name, "");
    }

    #[actix_web::test]
    async fn test_existing_names_are_not_overwritten() {
        let store = Arc::new(InMemoryUserRepository::new());
        let service = IdentityProvisioningService::new(store.clone());

        service.get_or_create("a@x.com", "Original", "Name").await.unwrap();
        let again = service.get_or_create("a@x.com", "Changed", "Other").await.unwrap();

        assert_eq!(again.first_name, "Original");
        assert_eq!(again.last_name, "Name");
    }

    #[actix_web::test]
    async fn test_conflict_returns_concurrently_created_record() {
        let store = Arc::new(RacingUserStore::new(true));
        let service = IdentityProvisioningService::new(store.clone());

        let user = service.get_or_create("a@x.com", "A", "B").await.unwrap();

        assert_eq!(user.first_name, "Competitor");
        assert_eq!(store.saves(), 1);
        assert_eq!(store.stored(), 1);
    }

    #[actix_web::test]
    async fn test_conflict_without_record_is_internal_error() {
        let service = IdentityProvisioningService::new(Arc::new(RacingUserStore::new(false)));

        let result = service.get_or_create("a@x.com", "A", "B").await;

        assert!(matches!(result, Err(AppError::InternalError(_))));
    }
}
