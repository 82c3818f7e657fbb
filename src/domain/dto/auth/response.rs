//! 인증 응답 DTO
use serde::Serialize;

/// 로그인 시작 URL 응답
///
/// 클라이언트는 `login_url`로 브라우저를 보내고, 콜백에서 받은 `state`를 그대로 돌려줍니다.
#[derive(Debug, Serialize)]
pub struct LoginUrlResponse {
    pub login_url: String,
    pub state: String,
}
