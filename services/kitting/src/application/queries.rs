//! 查询定义

use kitting_common::{OrderLineId, Pagination};

/// 获取订单行（含组件清单）查询
#[derive(Debug, Clone)]
pub struct GetOrderLineQuery {
    pub line_id: OrderLineId,
}

/// 日程列表查询
#[derive(Debug, Clone, Default)]
pub struct ListSchedulesQuery {
    pub pagination: Pagination,
}
