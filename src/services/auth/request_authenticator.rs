//! 요청 단위 인증
//!
//! `Authorization: Bearer` 헤더의 애플리케이션 토큰으로 요청 주체를 확인합니다.
//! 자격 증명이 없거나 잘못된 경우에도 에러를 내지 않고 `None`을 반환하며,
//! 접근 허용 여부는 라우트 쪽(`AuthenticatedUser` 추출자)에서 결정합니다.

use std::sync::Arc;
use crate::domain::models::auth::AuthenticatedUser;
use crate::repositories::users::UserStore;
use crate::services::auth::token_service::TokenService;

pub struct RequestAuthenticator {
    tokens: Arc<TokenService>,
    users: Arc<dyn UserStore>,
}

impl RequestAuthenticator {
    pub fn new(tokens: Arc<TokenService>, users: Arc<dyn UserStore>) -> Self {
        Self { tokens, users }
    }

    /// Authorization 헤더 값으로 인증 주체를 찾습니다.
    ///
    /// 헤더가 없으면 조용히 `None`을 반환합니다. 헤더가 있지만 형식, 서명, 만료,
    /// 사용자 조회 중 하나라도 실패하면 디버그 로그만 남기고 `None`을 반환합니다.
    /// 토큰 원문은 로그에 남기지 않습니다.
    pub async fn authenticate(&self, auth_header: Option<&str>) -> Option<AuthenticatedUser> {
        let auth_header = auth_header?;

        let token = match TokenService::extract_bearer_token(auth_header) {
            Ok(token) => token,
            Err(_) => {
                log::debug!("Bearer 형식이 아닌 Authorization 헤더, 비인증으로 진행");
                return None;
            }
        };

        let claims = match self.tokens.parse_claims(token) {
            Ok(claims) => claims,
            Err(e) => {
                log::debug!("애플리케이션 토큰 거부 ({}), 비인증으로 진행", e.kind());
                return None;
            }
        };

        let user = match self.users.find_by_login(&claims.sub).await {
            Ok(Some(user)) => user,
            Ok(None) => {
                log::debug!("토큰 주체에 해당하는 사용자가 없습니다: {}", claims.sub);
                return None;
            }
            Err(e) => {
                log::warn!("인증 중 사용자 조회 실패: {}", e);
                return None;
            }
        };

        if !self.tokens.is_valid(token, &user.login) {
            log::debug!("토큰 주체와 사용자 login 불일치: {}", claims.sub);
            return None;
        }

        Some(AuthenticatedUser::from(&user))
    }
}
