//! # Service Registry
//!
//! 서버 시작 시 한 번 실행되는 조립 지점입니다.
//! 설정을 읽어 저장소, 외부 연동 클라이언트, 인증 서비스들을 생성하고
//! 생성자 주입으로 서로 연결합니다.
//!
//! ```text
//! UserStore ───────────────┬──────────────▶ IdentityProvisioningService ─┐
//!                          │                                             │
//!                          └──────────────▶ RequestAuthenticator         │
//!                                                   ▲                    │
//! TokenService ─────────────────────────────────────┤                    │
//!                                                   └──────────────┐     │
//! HttpJwksFetcher ─▶ KeySetCache ─▶ GoogleTokenVerifier ───────────┤     │
//!                                                                  ▼     ▼
//! GoogleExchangeClient ────────────────────────────────────▶ FederatedLoginService
//! ```
//!
//! 런타임 조회나 전역 상태는 없습니다. 핸들러는 `web::Data`로 등록된 인스턴스를 받습니다.

use std::sync::Arc;
use crate::caching::redis::RedisClient;
use crate::config::{DatabaseConfig, GoogleOAuthConfig, HttpClientConfig, UserStoreKind};
use crate::core::errors::AppResult;
use crate::db::Database;
use crate::repositories::users::{InMemoryUserRepository, UserRepository, UserStore};
use crate::services::auth::{
    FederatedLoginService, FederatedTokenVerifier, GoogleExchangeClient, GoogleTokenVerifier,
    HttpJwksFetcher, IdentityExchangeClient, KeySetCache, RequestAuthenticator, TokenService,
};
use crate::services::users::IdentityProvisioningService;
use crate::utils::display_terminal::{
    print_boxed_title, print_final_summary, print_step_complete, print_step_start, print_sub_task,
};

/// 조립이 끝난 애플리케이션 컴포넌트 묶음
#[derive(Clone)]
pub struct ServiceRegistry {
    pub user_store: Arc<dyn UserStore>,
    pub token_service: Arc<TokenService>,
    pub login_service: Arc<FederatedLoginService>,
    pub request_authenticator: Arc<RequestAuthenticator>,
}

impl ServiceRegistry {
    /// 환경 설정으로 모든 컴포넌트를 생성합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 필수 설정 누락, HTTP 클라이언트 생성 실패
    /// * `AppError::DatabaseError` / `AppError::RedisError` - 저장소 연결 실패
    pub async fn initialize() -> AppResult<Self> {
        print_boxed_title("🔧 SERVICE REGISTRY");

        print_step_start(1, "Connecting user store");
        let user_store = build_user_store(DatabaseConfig::user_store()).await?;
        print_step_complete(1, "User store ready", 1);

        print_step_start(2, "Configuring identity federation");
        let settings = GoogleOAuthConfig::settings()?;
        let timeout = HttpClientConfig::timeout();

        let fetcher = HttpJwksFetcher::new(settings.jwks_uri.clone(), timeout)?;
        let key_set_cache = Arc::new(KeySetCache::new(Arc::new(fetcher)));
        print_sub_task("KeySetCache", &settings.jwks_uri);

        let verifier = GoogleTokenVerifier::from_settings(&settings, key_set_cache);
        print_sub_task("GoogleTokenVerifier", &format!("issuers = {}", settings.issuers.join(", ")));

        let expected_state = settings.expected_state.clone();
        let exchange = GoogleExchangeClient::new(settings, timeout)?;
        print_sub_task("GoogleExchangeClient", &format!("timeout = {}s", timeout.as_secs()));
        print_step_complete(2, "Identity federation configured", 3);

        print_step_start(3, "Wiring authentication services");
        let token_service = Arc::new(TokenService::from_config()?);
        let registry = Self::assemble(
            user_store,
            token_service,
            Arc::new(exchange),
            Arc::new(verifier),
            expected_state,
        );
        print_step_complete(3, "Authentication services wired", 4);

        print_final_summary(1, 7);
        Ok(registry)
    }

    /// 이미 만들어진 협력 객체들로 서비스 그래프를 조립합니다.
    pub fn assemble(
        user_store: Arc<dyn UserStore>,
        token_service: Arc<TokenService>,
        exchange_client: Arc<dyn IdentityExchangeClient>,
        verifier: Arc<dyn FederatedTokenVerifier>,
        expected_state: impl Into<String>,
    ) -> Self {
        let provisioning = Arc::new(IdentityProvisioningService::new(user_store.clone()));

        let login_service = Arc::new(FederatedLoginService::new(
            exchange_client,
            verifier,
            provisioning,
            token_service.clone(),
            expected_state,
        ));

        let request_authenticator = Arc::new(RequestAuthenticator::new(
            token_service.clone(),
            user_store.clone(),
        ));

        Self {
            user_store,
            token_service,
            login_service,
            request_authenticator,
        }
    }
}

async fn build_user_store(kind: UserStoreKind) -> AppResult<Arc<dyn UserStore>> {
    match kind {
        UserStoreKind::Memory => {
            log::warn!("⚠️ 메모리 사용자 저장소 사용 중, 재시작 시 데이터가 사라집니다");
            print_sub_task("InMemoryUserRepository", "OK");
            Ok(Arc::new(InMemoryUserRepository::new()))
        }
        UserStoreKind::Mongo => {
            let database = Arc::new(
                Database::connect(&DatabaseConfig::mongodb_uri(), &DatabaseConfig::database_name()).await?,
            );
            print_sub_task("MongoDB", database.database_name());

            let redis = Arc::new(RedisClient::connect(&DatabaseConfig::redis_url()).await?);
            print_sub_task("Redis", "Connected");

            let repository = UserRepository::new(database, Some(redis));
            repository.create_indexes().await?;
            print_sub_task("UserRepository", "Indexes ready");

            Ok(Arc::new(repository))
        }
    }
}
