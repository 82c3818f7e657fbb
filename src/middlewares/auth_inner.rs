//! AuthMiddleware 인증 로직의 핵심적인 기능
use std::rc::Rc;
use std::sync::Arc;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse};
use actix_web::http::header::AUTHORIZATION;
use actix_web::{Error, HttpMessage};
use futures_util::future::LocalBoxFuture;
use crate::domain::models::auth::AuthenticatedUser;
use crate::services::auth::RequestAuthenticator;

/// 실제 인증 로직을 수행하는 서비스
pub struct AuthMiddlewareService<S> {
    pub service: Rc<S>,
    pub authenticator: Arc<RequestAuthenticator>,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let authenticator = self.authenticator.clone();

        Box::pin(async move {
            // 이미 인증된 요청은 다시 확인하지 않음
            let already_authenticated = req.extensions().contains::<AuthenticatedUser>();

            if !already_authenticated {
                let auth_header = req.headers()
                    .get(AUTHORIZATION)
                    .and_then(|h| h.to_str().ok())
                    .map(str::to_string);

                if let Some(user) = authenticator.authenticate(auth_header.as_deref()).await {
                    log::debug!("인증 성공: {}", user.login);
                    req.extensions_mut().insert(user);
                }
            }

            service.call(req).await
        })
    }
}
