//! 生产日程聚合根

use chrono::{DateTime, Utc};
use kitting_common::{AuditInfo, ScheduleId};
use kitting_errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

use super::OrderLineDraft;

/// 日程状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScheduleStatus {
    /// 已排程
    Scheduled,
    /// 进行中
    InProgress,
    /// 已完成
    Completed,
    /// 已取消
    Cancelled,
}

impl ScheduleStatus {
    pub fn as_i16(self) -> i16 {
        match self {
            Self::Scheduled => 0,
            Self::InProgress => 1,
            Self::Completed => 2,
            Self::Cancelled => 3,
        }
    }

    pub fn from_i16(value: i16) -> AppResult<Self> {
        match value {
            0 => Ok(Self::Scheduled),
            1 => Ok(Self::InProgress),
            2 => Ok(Self::Completed),
            3 => Ok(Self::Cancelled),
            other => Err(AppError::database(format!(
                "Unknown schedule status: {}",
                other
            ))),
        }
    }
}

/// 生产日程
///
/// 一次性提交的一批订单行。行同时独立持久化为订单行记录，
/// 这里保留一份去规范化的草稿快照。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailySchedule {
    pub id: ScheduleId,
    pub status: ScheduleStatus,
    pub scheduled_date: DateTime<Utc>,
    /// 计划件数（按行计数）
    pub total_pieces: u32,
    /// 已完成件数
    pub completed_pieces: u32,
    /// 订单行快照
    pub lines: Vec<OrderLineDraft>,
    pub audit_info: AuditInfo,
}

impl DailySchedule {
    /// 创建新日程
    pub fn new(scheduled_date: DateTime<Utc>, lines: Vec<OrderLineDraft>) -> Self {
        let total_pieces = lines.len() as u32;
        Self {
            id: ScheduleId::new(),
            status: ScheduleStatus::Scheduled,
            scheduled_date,
            total_pieces,
            completed_pieces: 0,
            lines,
            audit_info: AuditInfo::default(),
        }
    }

    /// 从数据库加载
    pub fn from_parts(
        id: ScheduleId,
        status: ScheduleStatus,
        scheduled_date: DateTime<Utc>,
        total_pieces: u32,
        completed_pieces: u32,
        lines: Vec<OrderLineDraft>,
        audit_info: AuditInfo,
    ) -> Self {
        Self {
            id,
            status,
            scheduled_date,
            total_pieces,
            completed_pieces,
            lines,
            audit_info,
        }
    }
}
