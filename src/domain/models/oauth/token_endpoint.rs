//! 토큰 엔드포인트 응답 모델
//!
//! Authorization Code 교환 시 프로바이더가 돌려주는 JSON 중 필요한 필드만 매핑합니다.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct TokenEndpointResponse {
    /// OIDC 신원 토큰. 없으면 교환 응답이 잘못된 것입니다.
    #[serde(default)]
    pub id_token: Option<String>,
}
