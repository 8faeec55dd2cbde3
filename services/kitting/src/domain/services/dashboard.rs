//! 仪表盘聚合

use serde::{Deserialize, Serialize};

use crate::domain::entities::{OrderLine, WorkQueue};

/// 仪表盘汇总
///
/// 对全量订单行的纯推导。每行恰好落入一个队列，三个队列之和等于总数，
/// 与读取顺序无关。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub total: u64,
    pub pending_prekitting: u64,
    pub to_verify: u64,
    pub finalized: u64,
}

impl DashboardSummary {
    pub fn from_lines(lines: &[OrderLine]) -> Self {
        let mut summary = Self {
            total: lines.len() as u64,
            ..Default::default()
        };
        for line in lines {
            match line.queue() {
                WorkQueue::PendingPrekitting => summary.pending_prekitting += 1,
                WorkQueue::PendingVerification => summary.to_verify += 1,
                WorkQueue::Finalized => summary.finalized += 1,
            }
        }
        summary
    }
}
