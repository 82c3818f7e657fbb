//! User Entity Implementation
//!
//! 인증된 요청의 주체(principal)가 되는 사용자 엔티티입니다.
//! 인증 코어는 이 레코드를 조회하거나 새로 만들기만 하고, 기존 필드를 수정하지 않습니다.

use std::fmt;
use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 사용자 역할
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    User,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "USER",
            Role::Admin => "ADMIN",
        }
    }
}

impl Default for Role {
    fn default() -> Self {
        Role::User
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 로그인 식별자 (이메일). 항상 정규화된 소문자로 저장됩니다.
    pub login: String,
    pub first_name: String,
    pub last_name: String,
    /// 외부 연동 전용 계정은 비밀번호가 없습니다.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password_hash: Option<String>,
    pub role: Role,
    pub created_at: DateTime,
}

impl User {
    /// 외부 신원 제공자로 처음 로그인한 사용자를 위한 레코드를 만듭니다.
    pub fn new_federated(login: &str, first_name: String, last_name: String) -> Self {
        Self {
            id: None,
            login: normalize_login(login),
            first_name,
            last_name,
            password_hash: None,
            role: Role::default(),
            created_at: DateTime::now(),
        }
    }

    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }
}

/// 로그인 값을 비교/저장용 형태로 정규화합니다 (앞뒤 공백 제거, 소문자).
pub fn normalize_login(login: &str) -> String {
    login.trim().to_lowercase()
}
