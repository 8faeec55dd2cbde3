//! 用户实体

use chrono::{DateTime, Utc};
use kitting_common::UserId;
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::HashedPassword;

/// 后台用户
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub password_hash: HashedPassword,
    pub display_name: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new(email: impl Into<String>, password_hash: HashedPassword) -> Self {
        Self {
            id: UserId::new(),
            email: email.into(),
            password_hash,
            display_name: None,
            created_at: Utc::now(),
        }
    }
}
