//! # Configuration Module
//!
//! 환경 변수 기반 설정값을 중앙에서 관리합니다.
//! 설정 파일은 `PROFILE` 값에 따라 `.env.dev` / `.env.prod` / `.env` 중 하나가 로드됩니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 데이터베이스, 서버, 환경, Rate Limiting 설정
//! - [`auth_config`] - 애플리케이션 토큰, Google OIDC, 외부 HTTP 호출 설정
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::{GoogleOAuthConfig, JwtConfig, ServerConfig};
//!
//! let bind_address = ServerConfig::bind_address();
//! let secret = JwtConfig::secret()?;
//! let google = GoogleOAuthConfig::settings()?;
//! ```
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버
//! export HOST="0.0.0.0"
//! export PORT="8080"
//!
//! # 저장소
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="marketplace"
//! export REDIS_URL="redis://localhost:6379"
//! export USER_STORE="mongo"          # mongo | memory
//!
//! # 환경
//! export ENVIRONMENT="production"    # development, test, staging, production
//! ```

pub mod data_config;
pub mod auth_config;

pub use data_config::*;
pub use auth_config::*;
