//! 사용자 서비스 모듈
//!
//! 검증된 외부 신원을 내부 사용자 레코드에 연결하는 프로비저닝을 담당합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::users::IdentityProvisioningService;
//!
//! let user = provisioning.get_or_create("a@x.com", "A", "B").await?;
//! ```

pub mod provisioning_service;

pub use provisioning_service::*;
