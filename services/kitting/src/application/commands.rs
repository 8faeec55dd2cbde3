//! 命令定义

use chrono::{DateTime, Utc};
use kitting_common::OrderLineId;
use kitting_errors::{AppError, AppResult};

use crate::domain::entities::OrderLineDraft;
use crate::domain::value_objects::ChecklistSummary;

/// 创建日程命令
#[derive(Debug, Clone)]
pub struct CreateScheduleCommand {
    pub scheduled_date: DateTime<Utc>,
    pub products: Vec<OrderLineDraft>,
}

impl CreateScheduleCommand {
    pub fn validate(&self) -> AppResult<()> {
        if self.products.is_empty() {
            return Err(AppError::validation("Debe agregar al menos un producto"));
        }
        for product in &self.products {
            product.validate()?;
        }
        Ok(())
    }
}

/// 标记预拣配完成命令
///
/// 携带客户端计算的核对清单摘要，写入前只校验摘要完成条件。
#[derive(Debug, Clone)]
pub struct MarkPrekittedCommand {
    pub line_id: OrderLineId,
    pub checklist: ChecklistSummary,
}

/// 标记核验完成命令
#[derive(Debug, Clone)]
pub struct MarkVerifiedCommand {
    pub line_id: OrderLineId,
    pub checklist: ChecklistSummary,
}
