//! 마켓플레이스 인증 서비스 백엔드
//!
//! 마켓플레이스 플랫폼의 인증 코어입니다. 자체 서명한 애플리케이션 토큰을 발급/검증하고,
//! Google OpenID Connect를 통한 외부 신원 로그인을 처리합니다.
//!
//! # Features
//!
//! - **애플리케이션 토큰**: HS256 서명, 주체(login) 바인딩, 만료 검증
//! - **외부 신원 로그인**: Authorization Code 교환, ID 토큰 RS256 서명 검증, 최초 로그인 시 계정 생성
//! - **JWKS 캐시**: 프로세스 수명 동안 한 번만 조회하는 키 셋 캐시
//! - **요청 인증**: Bearer 토큰으로 요청 주체를 첨부하는 pass-through 미들웨어
//! - **MongoDB + Redis**: 사용자 레코드 저장과 조회 캐시
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← /health, /api/v1/auth/*
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ AuthMiddleware  │ ← Bearer 토큰 → AuthenticatedUser
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 로그인 흐름, 토큰, 검증, 프로비저닝
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    UserStore    │ ← MongoDB + Redis / 메모리
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use marketplace_auth_backend::core::registry::ServiceRegistry;
//!
//! let registry = ServiceRegistry::initialize().await?;
//! let token = registry.login_service.login(&auth_code, &state).await?;
//! assert!(registry.token_service.is_valid(&token, "user@example.com"));
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod caching;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod middlewares;

#[cfg(test)]
pub mod test_support;
