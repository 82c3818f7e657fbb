//! 인증된 요청 주체 모델
pub mod authenticated_user;

pub use authenticated_user::*;
