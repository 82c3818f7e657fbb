//! # 외부 신원 로그인 서비스
//!
//! Authorization Code와 state를 받아 애플리케이션 토큰을 발급하는 전체 흐름입니다.
//!
//! ```text
//! START
//!   │ validate_state             실패 → StateInvalid
//!   ▼
//! STATE_VALIDATED
//!   │ exchange_code              실패 → IdentityProviderError / TokenExchangeInvalid
//!   ▼
//! CODE_EXCHANGED
//!   │ IdentityToken::parse       실패 → TokenMalformed
//!   ▼
//! TOKEN_PARSED
//!   │ verify                     실패 → TokenInvalid / KeySetUnavailable
//!   ▼
//! TOKEN_VERIFIED
//!   │ extract_identity_claims    실패 → ClaimMissing
//!   ▼
//! CLAIMS_EXTRACTED
//!   │ get_or_create
//!   ▼
//! IDENTITY_RESOLVED
//!   │ issue_for_user
//!   ▼
//! TOKEN_ISSUED
//! ```
//!
//! 각 단계는 이전 단계의 결과에 의존하므로 순서대로 실행되며, 첫 실패에서 중단합니다.
//! state는 어떤 원격 호출보다 먼저 확인하고, 사용자 프로비저닝은 서명 검증이 끝난 클레임으로만 합니다.

use std::fmt;
use std::sync::Arc;
use crate::core::errors::AppResult;
use crate::domain::dto::auth::LoginUrlResponse;
use crate::domain::models::oauth::IdentityToken;
use crate::services::auth::exchange_client::{extract_identity_claims, IdentityExchangeClient};
use crate::services::auth::token_service::TokenService;
use crate::services::auth::token_verifier::FederatedTokenVerifier;
use crate::services::users::provisioning_service::IdentityProvisioningService;

/// 로그인 흐름의 진행 단계
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginStage {
    Start,
    StateValidated,
    CodeExchanged,
    TokenParsed,
    TokenVerified,
    ClaimsExtracted,
    IdentityResolved,
    TokenIssued,
}

impl fmt::Display for LoginStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LoginStage::Start => "START",
            LoginStage::StateValidated => "STATE_VALIDATED",
            LoginStage::CodeExchanged => "CODE_EXCHANGED",
            LoginStage::TokenParsed => "TOKEN_PARSED",
            LoginStage::TokenVerified => "TOKEN_VERIFIED",
            LoginStage::ClaimsExtracted => "CLAIMS_EXTRACTED",
            LoginStage::IdentityResolved => "IDENTITY_RESOLVED",
            LoginStage::TokenIssued => "TOKEN_ISSUED",
        };
        f.write_str(name)
    }
}

pub struct FederatedLoginService {
    exchange_client: Arc<dyn IdentityExchangeClient>,
    verifier: Arc<dyn FederatedTokenVerifier>,
    provisioning: Arc<IdentityProvisioningService>,
    tokens: Arc<TokenService>,
    expected_state: String,
}

impl FederatedLoginService {
    pub fn new(
        exchange_client: Arc<dyn IdentityExchangeClient>,
        verifier: Arc<dyn FederatedTokenVerifier>,
        provisioning: Arc<IdentityProvisioningService>,
        tokens: Arc<TokenService>,
        expected_state: impl Into<String>,
    ) -> Self {
        Self {
            exchange_client,
            verifier,
            provisioning,
            tokens,
            expected_state: expected_state.into(),
        }
    }

    /// 프로바이더 로그인 페이지 URL과 콜백에서 돌려받아야 할 state
    pub fn login_url(&self) -> LoginUrlResponse {
        LoginUrlResponse {
            login_url: self.exchange_client.authorization_url(&self.expected_state),
            state: self.expected_state.clone(),
        }
    }

    /// Authorization Code로 로그인하고 애플리케이션 토큰을 반환합니다.
    ///
    /// # Errors
    ///
    /// 실패한 단계에 따라 `StateInvalid`, `IdentityProviderError`, `TokenExchangeInvalid`,
    /// `TokenMalformed`, `KeySetUnavailable`, `TokenInvalid`, `ClaimMissing` 또는 저장소 에러
    pub async fn login(&self, auth_code: &str, state: &str) -> AppResult<String> {
        let mut stage = LoginStage::Start;

        match self.run(auth_code, state, &mut stage).await {
            Ok((login, token)) => {
                log::info!("외부 신원 로그인 성공: {}", login);
                Ok(token)
            }
            Err(e) => {
                log::warn!("외부 신원 로그인 실패 ({} 이후): {} - {}", stage, e.kind(), e);
                Err(e)
            }
        }
    }

    async fn run(&self, auth_code: &str, state: &str, stage: &mut LoginStage) -> AppResult<(String, String)> {
        self.verifier.validate_state(state, &self.expected_state)?;
        advance(stage, LoginStage::StateValidated);

        let raw_token = self.exchange_client.exchange_code(auth_code).await?;
        advance(stage, LoginStage::CodeExchanged);

        let token = IdentityToken::parse(&raw_token)?;
        advance(stage, LoginStage::TokenParsed);

        let verified = self.verifier.verify(token).await?;
        advance(stage, LoginStage::TokenVerified);

        let claims = extract_identity_claims(&verified)?;
        advance(stage, LoginStage::ClaimsExtracted);

        let user = self.provisioning
            .get_or_create(&claims.email, &claims.given_name, &claims.last_name())
            .await?;
        advance(stage, LoginStage::IdentityResolved);

        let app_token = self.tokens.issue_for_user(&user)?;
        advance(stage, LoginStage::TokenIssued);

        Ok((user.login, app_token))
    }
}

fn advance(stage: &mut LoginStage, next: LoginStage) {
    log::debug!("로그인 단계: {} → {}", stage, next);
    *stage = next;
}
