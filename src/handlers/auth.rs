//! Authentication HTTP Handlers
//!
//! 외부 신원(Google) 로그인과 현재 인증 주체 조회 엔드포인트입니다.
//!
//! # Endpoints
//!
//! - `GET /api/v1/auth/google/login-url` - 프로바이더 로그인 페이지 URL
//! - `GET /api/v1/auth/google?authCode=..&state=..` - 로그인, 애플리케이션 토큰을 `text/plain`으로 반환
//! - `GET /api/v1/auth/me` - 현재 인증 주체 (없으면 401)
use actix_web::{get, web, HttpResponse};
use validator::Validate;
use crate::core::errors::AppError;
use crate::domain::dto::auth::FederatedLoginQuery;
use crate::domain::models::auth::AuthenticatedUser;
use crate::services::auth::FederatedLoginService;

/// Google 로그인 URL 생성 핸들러
///
/// # Endpoint
/// `GET /api/v1/auth/google/login-url`
///
/// # Response
/// ```json
/// {
///   "login_url": "https://accounts.google.com/o/oauth2/v2/auth?client_id=...&state=...",
///   "state": "..."
/// }
/// ```
#[get("/google/login-url")]
pub async fn google_login_url(
    login_service: web::Data<FederatedLoginService>,
) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(login_service.login_url()))
}

/// Google 로그인 핸들러
///
/// 프로바이더가 돌려준 Authorization Code와 state로 로그인하고,
/// 발급된 애플리케이션 토큰 원문을 응답 본문으로 반환합니다.
///
/// # Endpoint
/// `GET /api/v1/auth/google?authCode=...&state=...`
///
/// # Errors
///
/// 실패 단계에 따라 400(state, 토큰, 클레임) 또는 500(프로바이더, 키 셋) 에러 본문을 반환합니다.
#[get("/google")]
pub async fn google_login(
    login_service: web::Data<FederatedLoginService>,
    query: web::Query<FederatedLoginQuery>,
) -> Result<HttpResponse, AppError> {
    query.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let token = login_service.login(&query.auth_code, &query.state).await?;

    Ok(HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(token))
}

/// 현재 인증 주체 조회
///
/// # Endpoint
/// `GET /api/v1/auth/me`
///
/// `Authorization: Bearer <token>` 헤더가 필요합니다.
#[get("/me")]
pub async fn get_current_user(user: AuthenticatedUser) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(user))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use actix_web::http::{header, StatusCode};
    use actix_web::{test, App};
    use chrono::Duration;
    use serde_json::Value;
    use crate::middlewares::AuthMiddleware;
    use crate::repositories::users::{InMemoryUserRepository, UserStore};
    use crate::routes::configure_all_routes;
    use crate::services::auth::{
        GoogleTokenVerifier, JwksFetcher, KeySetCache, RequestAuthenticator, TokenService,
    };
    use crate::services::users::IdentityProvisioningService;
    use crate::test_support::*;
    use super::*;

    struct TestState {
        login_service: Arc<FederatedLoginService>,
        authenticator: Arc<RequestAuthenticator>,
        tokens: Arc<TokenService>,
    }

    fn test_state() -> TestState {
        let store: Arc<dyn UserStore> = Arc::new(InMemoryUserRepository::new());
        let tokens = Arc::new(TokenService::new("test-secret", Duration::hours(1)));

        let fetcher: Arc<dyn JwksFetcher> = Arc::new(CountingJwksFetcher::returning(rsa_key_set()));
        let verifier = GoogleTokenVerifier::new(
            Arc::new(KeySetCache::new(fetcher)),
            TEST_CLIENT_ID,
            vec![TEST_ISSUER.to_string()],
        );
        let exchange = ScriptedExchangeClient::returning(signed_identity_token(&identity_claims("a@x.com")));

        let login_service = FederatedLoginService::new(
            Arc::new(exchange),
            Arc::new(verifier),
            Arc::new(IdentityProvisioningService::new(store.clone())),
            tokens.clone(),
            TEST_STATE,
        );

        TestState {
            login_service: Arc::new(login_service),
            authenticator: Arc::new(RequestAuthenticator::new(tokens.clone(), store)),
            tokens,
        }
    }

    #[actix_web::test]
    async fn test_login_url_returns_url_and_state() {
        let state = test_state();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::from(state.login_service.clone()))
                .wrap(AuthMiddleware::new(state.authenticator.clone()))
                .configure(configure_all_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/v1/auth/google/login-url").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["state"], TEST_STATE);
        assert_eq!(body["login_url"], "https://idp.test/auth?state=expected-state");
    }

    #[actix_web::test]
    async fn test_google_login_returns_token_as_plain_text() {
        let state = test_state();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::from(state.login_service.clone()))
                .wrap(AuthMiddleware::new(state.authenticator.clone()))
                .configure(configure_all_routes),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/v1/auth/google?authCode=auth-code&state=expected-state")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let content_type = resp.headers().get(header::CONTENT_TYPE).unwrap().to_str().unwrap().to_string();
        assert!(content_type.starts_with("text/plain"));

        let body = test::read_body(resp).await;
        let token = String::from_utf8(body.to_vec()).unwrap();
        assert_eq!(state.tokens.parse_claims(&token).unwrap().sub, "a@x.com");
    }

    #[actix_web::test]
    async fn test_google_login_with_wrong_state_is_bad_request() {
        let state = test_state();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::from(state.login_service.clone()))
                .wrap(AuthMiddleware::new(state.authenticator.clone()))
                .configure(configure_all_routes),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/v1/auth/google?authCode=auth-code&state=forged")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], 400);
        assert!(body["message"].as_str().unwrap().starts_with("Invalid state"));
        assert!(body["time"].is_string());
    }

    #[actix_web::test]
    async fn test_google_login_rejects_missing_or_empty_parameters() {
        let state = test_state();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::from(state.login_service.clone()))
                .wrap(AuthMiddleware::new(state.authenticator.clone()))
                .configure(configure_all_routes),
        )
        .await;

        for uri in [
            "/api/v1/auth/google?state=expected-state",
            "/api/v1/auth/google?authCode=&state=expected-state",
        ] {
            let req = test::TestRequest::get().uri(uri).to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{}", uri);

            let body: Value = test::read_body_json(resp).await;
            assert!(body["message"].as_str().unwrap().starts_with("Validation error"));
        }
    }

    #[actix_web::test]
    async fn test_me_requires_authentication() {
        let state = test_state();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::from(state.login_service.clone()))
                .wrap(AuthMiddleware::new(state.authenticator.clone()))
                .configure(configure_all_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/v1/auth/me").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        let req = test::TestRequest::get()
            .uri("/api/v1/auth/me")
            .insert_header((header::AUTHORIZATION, "Bearer not-a-token"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_token_from_login_authenticates_me() {
        let state = test_state();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::from(state.login_service.clone()))
                .wrap(AuthMiddleware::new(state.authenticator.clone()))
                .configure(configure_all_routes),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/v1/auth/google?authCode=auth-code&state=expected-state")
            .to_request();
        let token = test::call_and_read_body(&app, req).await;
        let token = String::from_utf8(token.to_vec()).unwrap();

        let req = test::TestRequest::get()
            .uri("/api/v1/auth/me")
            .insert_header((header::AUTHORIZATION, format!("Bearer {}", token)))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["login"], "a@x.com");
        assert_eq!(body["role"], "USER");
    }
}
