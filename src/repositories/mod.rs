//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 인증 코어는 [`users::UserStore`] 계약에만 의존하고,
//! 실제 구현(MongoDB 또는 메모리)은 서버 시작 시 선택됩니다.

pub mod users;
