//! 캐싱 계층 모듈
//!
//! - [`redis`] - 사용자 조회 결과를 위한 Redis 읽기 캐시
//!
//! 프로바이더 서명 키 셋(JWKS)은 Redis가 아니라 프로세스 메모리에 캐싱됩니다
//! ([`crate::services::auth::key_set_cache`]).

pub mod redis;
