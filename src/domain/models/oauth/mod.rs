//! 외부 신원 연동(OIDC) 모델
//!
//! - [`key_set`] - 프로바이더가 공개한 서명 키 셋 (JWKS)
//! - [`identity_token`] - 검증 전/후 신원 토큰 타입
//! - [`federated_claims`] - 검증된 토큰에서 추출한 신원 클레임
//! - [`token_endpoint`] - 토큰 엔드포인트 응답

pub mod key_set;
pub mod identity_token;
pub mod federated_claims;
pub mod token_endpoint;

pub use key_set::*;
pub use identity_token::*;
pub use federated_claims::*;
pub use token_endpoint::*;
