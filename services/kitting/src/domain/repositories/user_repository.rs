//! 用户仓储接口

use async_trait::async_trait;
use kitting_errors::AppResult;

use crate::domain::entities::User;

/// 用户仓储接口
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// 按邮箱查找用户
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;
}
