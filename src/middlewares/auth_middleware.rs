//! 요청 인증 미들웨어
//!
//! ActixWeb 요청 파이프라인에서 Bearer 토큰으로 요청 주체를 확인하고
//! request extensions에 [`AuthenticatedUser`](crate::domain::models::auth::AuthenticatedUser)를 넣습니다.
//! 인증 실패는 응답을 바꾸지 않습니다. 401은 `AuthenticatedUser` 추출자가 만듭니다.

use std::future::{ready, Ready};
use std::rc::Rc;
use std::sync::Arc;

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
};
use crate::middlewares::auth_inner::AuthMiddlewareService;
use crate::services::auth::RequestAuthenticator;

/// 통과형(pass-through) 인증 미들웨어
pub struct AuthMiddleware {
    authenticator: Arc<RequestAuthenticator>,
}

impl AuthMiddleware {
    pub fn new(authenticator: Arc<RequestAuthenticator>) -> Self {
        Self { authenticator }
    }
}

/// ActixWeb Transform trait 구현
impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
            authenticator: Arc::clone(&self.authenticator),
        }))
    }
}
