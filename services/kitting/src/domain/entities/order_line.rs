//! 订单行实体
//!
//! 生产日程中的单个制造条目。两个持久化布尔标志决定其所在的工作队列。

use chrono::{DateTime, Utc};
use kitting_common::{OrderLineId, ScheduleId};
use kitting_errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// 工作队列分类
///
/// 完全由 `prekitted` / `verified` 两个标志推导，见 [`WorkQueue::classify`]。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkQueue {
    /// 待预拣配
    PendingPrekitting,
    /// 待核验
    PendingVerification,
    /// 已完结
    Finalized,
}

impl WorkQueue {
    /// 按标志位分类
    ///
    /// `prekitted = false` 时无条件归入待预拣配队列，即使 `verified = true`
    /// （该组合只能由外部直接改库产生）。
    pub fn classify(prekitted: bool, verified: Option<bool>) -> Self {
        match (prekitted, verified) {
            (false, _) => Self::PendingPrekitting,
            (true, Some(true)) => Self::Finalized,
            (true, _) => Self::PendingVerification,
        }
    }
}

/// 订单行草稿
///
/// 创建日程时的输入，尚未持久化、没有数据库 ID。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLineDraft {
    /// 制造订单号 (orden de fabricación)
    pub manufacturing_order: String,
    /// SKU
    pub sku: String,
    /// 描述
    pub description: String,
    /// 数量（件）
    pub quantity: u32,
}

impl OrderLineDraft {
    pub fn validate(&self) -> AppResult<()> {
        if self.manufacturing_order.is_empty() {
            return Err(AppError::validation("La orden de fabricación es requerida"));
        }
        if self.sku.is_empty() {
            return Err(AppError::validation("El SKU es requerido"));
        }
        if self.description.is_empty() {
            return Err(AppError::validation("La descripción es requerida"));
        }
        if self.quantity < 1 {
            return Err(AppError::validation("La cantidad debe ser mayor a 0"));
        }
        Ok(())
    }
}

/// 订单行
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderLine {
    pub id: OrderLineId,
    pub schedule_id: ScheduleId,
    pub sku: String,
    pub description: String,
    pub quantity: u32,
    pub manufacturing_order: String,
    /// 预拣配完成标志
    pub prekitted: bool,
    /// 核验标志（历史数据可能缺列，保持可空）
    pub verified: Option<bool>,
    pub created_at: DateTime<Utc>,
}

impl OrderLine {
    /// 当前所属队列
    pub fn queue(&self) -> WorkQueue {
        WorkQueue::classify(self.prekitted, self.verified)
    }

    pub fn is_finalized(&self) -> bool {
        self.queue() == WorkQueue::Finalized
    }

    /// 标记预拣配完成
    ///
    /// 单向转换，正常流程不回滚。
    pub fn mark_prekitted(&mut self) {
        self.prekitted = true;
    }

    /// 标记核验完成
    ///
    /// 要求预拣配已完成。
    pub fn mark_verified(&mut self) -> AppResult<()> {
        if !self.prekitted {
            return Err(AppError::failed_precondition(
                "El producto no ha completado el prekitting",
            ));
        }
        self.verified = Some(true);
        Ok(())
    }
}
