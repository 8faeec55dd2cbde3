//! 订单行仓储接口

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use kitting_common::OrderLineId;
use kitting_errors::AppResult;

use crate::domain::entities::OrderLine;

/// 订单行仓储接口
#[async_trait]
pub trait OrderLineRepository: Send + Sync {
    /// 根据 ID 查找订单行
    async fn find_by_id(&self, id: OrderLineId) -> AppResult<Option<OrderLine>>;

    /// 全量列表（仪表盘聚合用）
    async fn list_all(&self) -> AppResult<Vec<OrderLine>>;

    /// 预拣配队列：未完成的行，加上今天创建的行（当天完成的仍然可见）
    ///
    /// 按 prekitted 升序排序，组内最新创建的在前。
    async fn list_prekitting_queue(
        &self,
        today_start: DateTime<Utc>,
    ) -> AppResult<Vec<OrderLine>>;

    /// 拣配核验队列：已预拣配的行，未核验的在前，组内最新创建的在前
    async fn list_kitting_queue(&self) -> AppResult<Vec<OrderLine>>;

    /// 置位预拣配完成标志
    async fn set_prekitted(&self, id: OrderLineId) -> AppResult<()>;

    /// 置位核验标志
    async fn set_verified(&self, id: OrderLineId) -> AppResult<()>;
}
