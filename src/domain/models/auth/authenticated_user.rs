use std::future::{ready, Ready};
use actix_web::{Error, FromRequest, HttpMessage, HttpRequest};
use serde::{Deserialize, Serialize};
use crate::core::errors::AppError;
use crate::domain::entities::users::user::{Role, User};

/// 요청 파이프라인에 첨부되는 인증된 사용자 정보
///
/// `AuthMiddleware`가 토큰 검증과 사용자 조회에 성공했을 때만 request extensions에
/// 들어갑니다. 핸들러는 추출자로 이 값을 받아 사용합니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    /// 사용자 고유 ID
    pub user_id: String,

    /// 로그인 식별자 (토큰의 subject)
    pub login: String,

    pub first_name: String,

    pub last_name: String,

    pub role: Role,
}

impl From<&User> for AuthenticatedUser {
    fn from(user: &User) -> Self {
        Self {
            user_id: user.id_string().unwrap_or_default(),
            login: user.login.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            role: user.role,
        }
    }
}

/// ActixWeb FromRequest trait 구현
///
/// 인증 주체가 없으면 401 에러 응답을 만듭니다. 접근 제어는 이 지점에서 결정됩니다.
impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Ready<actix_web::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<AuthenticatedUser>() {
            Some(user) => ready(Ok(user.clone())),
            None => ready(Err(AppError::AuthenticationError(
                "인증되지 않은 요청입니다".to_string(),
            )
            .into())),
        }
    }
}

/// 선택적 인증 사용자 추출자
#[derive(Debug, Clone)]
pub struct OptionalUser(pub Option<AuthenticatedUser>);

impl FromRequest for OptionalUser {
    type Error = Error;
    type Future = Ready<actix_web::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        let user = req.extensions().get::<AuthenticatedUser>().cloned();
        ready(Ok(OptionalUser(user)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_user() {
        let mut user = User::new_federated("a@x.com", "A".to_string(), "B".to_string());
        user.id = Some(mongodb::bson::oid::ObjectId::new());

        let principal = AuthenticatedUser::from(&user);

        assert_eq!(principal.login, "a@x.com");
        assert_eq!(principal.user_id, user.id_string().unwrap());
        assert_eq!(principal.role, Role::User);
    }

    #[actix_web::test]
    async fn test_extractor_rejects_anonymous_request() {
        let req = actix_web::test::TestRequest::default().to_http_request();
        let result = AuthenticatedUser::extract(&req).await;

        let error = result.unwrap_err();
        assert_eq!(error.as_response_error().status_code(), actix_web::http::StatusCode::UNAUTHORIZED);

        let optional = OptionalUser::extract(&req).await.unwrap();
        assert!(optional.0.is_none());
    }
}
