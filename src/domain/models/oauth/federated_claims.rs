//! 검증된 외부 신원 클레임
//!
//! 로그인 한 번 동안만 쓰이고 사용자 프로비저닝 후 버려지는 값입니다.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FederatedIdentityClaims {
    /// 프로바이더 측 사용자 식별자 (`sub`)
    pub subject: String,
    /// 토큰을 서명한 키 식별자
    pub key_id: String,
    pub issuer: String,
    /// 만료 시각 (Unix timestamp)
    pub expiration: i64,
    /// 항상 비어 있지 않은 이메일
    pub email: String,
    pub given_name: String,
    /// 프로바이더가 성을 주지 않으면 `None`
    pub family_name: Option<String>,
}

impl FederatedIdentityClaims {
    /// 사용자 레코드에 들어갈 성 (없으면 빈 문자열)
    pub fn last_name(&self) -> String {
        self.family_name.clone().unwrap_or_default()
    }
}
