//! 인증 요청 DTO
use serde::Deserialize;
use validator::Validate;

/// 외부 신원 로그인 콜백 쿼리 (`?authCode=..&state=..`)
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct FederatedLoginQuery {
    #[validate(length(min = 1, message = "Authorization code가 필요합니다"))]
    pub auth_code: String,

    #[validate(length(min = 1, message = "State가 필요합니다"))]
    pub state: String,
}
