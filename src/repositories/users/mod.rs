//! 사용자 데이터 액세스 계층
//!
//! - [`user_store`] - 인증 코어가 의존하는 저장소 계약 ([`UserStore`])
//! - [`user_repo`] - MongoDB + Redis 캐시 구현 ([`UserRepository`])
//! - [`memory_user_repo`] - 메모리 구현 ([`InMemoryUserRepository`])
//!
//! ```rust,ignore
//! use crate::repositories::users::{UserStore, InMemoryUserRepository};
//!
//! let store = InMemoryUserRepository::new();
//! let user = store.find_by_login("user@example.com").await?;
//! ```

pub mod user_store;
pub mod user_repo;
pub mod memory_user_repo;

pub use user_store::UserStore;
pub use user_repo::UserRepository;
pub use memory_user_repo::InMemoryUserRepository;
