//! 애플리케이션 토큰 클레임
//!
//! RFC 7519 등록 클레임(`sub`, `iat`, `exp`, `jti`)과 호출자가 넣은 추가 클레임을 담습니다.
//! 토큰은 서버 측 세션 상태 없이 이 클레임만으로 자기 완결적입니다.
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// 추가 클레임이 덮어쓸 수 없는 예약 클레임 이름
pub const RESERVED_CLAIMS: [&str; 4] = ["sub", "iat", "exp", "jti"];

/// JWT 토큰의 클레임(Payload) 구조체
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicationClaims {
    /// 토큰의 주체 (사용자 login)
    pub sub: String,
    /// 토큰 발급 시간 (Unix timestamp)
    pub iat: i64,
    /// 토큰 만료 시간 (Unix timestamp)
    pub exp: i64,
    /// 토큰 고유 ID
    pub jti: String,
    /// 호출자가 지정한 추가 클레임
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ApplicationClaims {
    pub fn extra_str(&self, name: &str) -> Option<&str> {
        self.extra.get(name).and_then(Value::as_str)
    }
}
