//! # Core Module
//!
//! 애플리케이션 전역에서 쓰이는 기반 기능입니다.
//!
//! ## 모듈 구성
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 인증 단계별 에러와 인프라 에러를 담는 단일 타입
//! - **HTTP 통합**: Actix-Web `ResponseError` 구현
//! - **ErrorContext**: 외부 라이브러리 에러를 `InternalError`로 변환
//!
//! ### [`registry`] - 서비스 조립
//! - **ServiceRegistry**: 설정을 읽어 저장소와 서비스를 생성하고 생성자 주입으로 연결
//!
//! ## 애플리케이션 초기화
//!
//! ```rust,ignore
//! use crate::core::registry::ServiceRegistry;
//!
//! let registry = ServiceRegistry::initialize().await?;
//!
//! HttpServer::new(move || {
//!     App::new()
//!         .app_data(web::Data::from(registry.login_service.clone()))
//!         .wrap(AuthMiddleware::new(registry.request_authenticator.clone()))
//!         .configure(configure_all_routes)
//! })
//! ```

pub mod errors;
pub mod registry;

pub use errors::*;
pub use registry::*;
