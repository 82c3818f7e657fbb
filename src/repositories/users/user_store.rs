//! 사용자 저장소 계약
//!
//! 인증 코어가 사용자 저장소에 요구하는 최소한의 연산입니다.
//! 저장소는 login 유일성을 보장해야 하며, 위반 시 `ConflictError`를 반환합니다.

use async_trait::async_trait;
use crate::core::errors::AppResult;
use crate::domain::entities::users::user::User;

#[async_trait]
pub trait UserStore: Send + Sync {
    /// 정규화된 login으로 사용자를 조회합니다.
    async fn find_by_login(&self, login: &str) -> AppResult<Option<User>>;

    /// 새 사용자를 저장하고 ID가 채워진 레코드를 반환합니다.
    ///
    /// 같은 login이 이미 있으면 `AppError::ConflictError`를 반환합니다.
    async fn save(&self, user: User) -> AppResult<User>;
}
