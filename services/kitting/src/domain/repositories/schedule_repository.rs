//! 日程仓储接口

use async_trait::async_trait;
use kitting_common::{PagedResult, Pagination};
use kitting_errors::AppResult;

use crate::domain::entities::DailySchedule;

/// 日程仓储接口
#[async_trait]
pub trait ScheduleRepository: Send + Sync {
    /// 保存日程及其全部订单行
    ///
    /// 日程记录和订单行记录在同一个事务中写入，要么全部成功要么全部失败。
    async fn insert(&self, schedule: &DailySchedule) -> AppResult<()>;

    /// 分页列出日程，最新的在前
    async fn list(&self, pagination: Pagination) -> AppResult<PagedResult<DailySchedule>>;
}
