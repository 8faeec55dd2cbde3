//! Business logic handler

use std::sync::Arc;

use chrono::{DateTime, Utc};
use kitting_common::{PagedResult, ScheduleId};
use kitting_errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::domain::entities::{ComponentRequirement, DailySchedule, OrderLine};
use crate::domain::repositories::{ManifestRepository, OrderLineRepository, ScheduleRepository};
use crate::domain::services::bulk_import;
use crate::domain::services::dashboard::DashboardSummary;

use super::commands::*;
use super::queries::*;

/// 工作队列视图：队列内容加每队列的完成/待办计数
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueueView {
    pub lines: Vec<OrderLine>,
    pub completed: u64,
    pub pending: u64,
}

/// 核对清单页数据：订单行、组件清单和网格维度
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChecklistSheet {
    pub line: OrderLine,
    pub components: Vec<ComponentRequirement>,
    /// 件数 U（即订单行数量）
    pub units: u32,
    /// 应勾选总数 = 组件数 × 件数
    pub expected_checks: u64,
}

pub struct ServiceHandler {
    order_lines: Arc<dyn OrderLineRepository>,
    schedules: Arc<dyn ScheduleRepository>,
    manifests: Arc<dyn ManifestRepository>,
}

impl ServiceHandler {
    pub fn new(
        order_lines: Arc<dyn OrderLineRepository>,
        schedules: Arc<dyn ScheduleRepository>,
        manifests: Arc<dyn ManifestRepository>,
    ) -> Self {
        Self {
            order_lines,
            schedules,
            manifests,
        }
    }

    // ========== 日程 ==========

    /// 创建生产日程
    ///
    /// 日程与其订单行由仓储在同一事务中写入。
    pub async fn create_schedule(&self, cmd: CreateScheduleCommand) -> AppResult<ScheduleId> {
        cmd.validate()?;

        let schedule = DailySchedule::new(cmd.scheduled_date, cmd.products);
        let schedule_id = schedule.id.clone();

        info!(
            schedule_id = %schedule_id,
            lines = schedule.lines.len(),
            "Creating daily schedule"
        );

        self.schedules.insert(&schedule).await?;

        metrics::counter!("kitting_schedules_created_total").increment(1);
        info!(schedule_id = %schedule_id, "Daily schedule created");
        Ok(schedule_id)
    }

    /// 日程列表
    pub async fn list_schedules(
        &self,
        query: ListSchedulesQuery,
    ) -> AppResult<PagedResult<DailySchedule>> {
        self.schedules.list(query.pagination).await
    }

    /// 解析批量导入文本，返回有序的订单行草稿
    pub fn parse_import(&self, text: &str) -> AppResult<Vec<crate::domain::entities::OrderLineDraft>> {
        bulk_import::parse_products(text)
    }

    // ========== 队列与仪表盘 ==========

    /// 仪表盘汇总：对全量订单行重新推导四个计数
    pub async fn dashboard_summary(&self) -> AppResult<DashboardSummary> {
        let lines = self.order_lines.list_all().await?;
        Ok(DashboardSummary::from_lines(&lines))
    }

    /// 预拣配队列
    pub async fn prekitting_queue(&self, today_start: DateTime<Utc>) -> AppResult<QueueView> {
        let lines = self.order_lines.list_prekitting_queue(today_start).await?;
        let completed = lines.iter().filter(|l| l.prekitted).count() as u64;
        let pending = lines.len() as u64 - completed;
        Ok(QueueView {
            lines,
            completed,
            pending,
        })
    }

    /// 拣配核验队列
    pub async fn kitting_queue(&self) -> AppResult<QueueView> {
        let lines = self.order_lines.list_kitting_queue().await?;
        let completed = lines
            .iter()
            .filter(|l| l.verified == Some(true))
            .count() as u64;
        let pending = lines.len() as u64 - completed;
        Ok(QueueView {
            lines,
            completed,
            pending,
        })
    }

    /// 订单行核对清单页数据
    ///
    /// SKU 没有物料清单视图记录时返回 NotFound。
    pub async fn get_checklist_sheet(&self, query: GetOrderLineQuery) -> AppResult<ChecklistSheet> {
        let line = self
            .order_lines
            .find_by_id(query.line_id)
            .await?
            .ok_or_else(|| AppError::not_found("El producto no existe"))?;

        let components = self.manifests.find_by_sku(&line.sku).await?;
        if components.is_empty() {
            return Err(AppError::not_found(format!(
                "El SKU {} no tiene lista de componentes",
                line.sku
            )));
        }

        let units = line.quantity;
        let expected_checks = components.len() as u64 * units as u64;

        Ok(ChecklistSheet {
            line,
            components,
            units,
            expected_checks,
        })
    }

    // ========== 状态转换 ==========

    /// 标记预拣配完成
    ///
    /// 前置条件：请求携带的核对清单摘要报告完成。不回查物料清单。
    pub async fn mark_prekitted(&self, cmd: MarkPrekittedCommand) -> AppResult<()> {
        if !cmd.checklist.is_complete() {
            return Err(AppError::failed_precondition(
                "Debes marcar todos los componentes para todas las unidades antes de finalizar",
            ));
        }

        self.order_lines
            .find_by_id(cmd.line_id)
            .await?
            .ok_or_else(|| AppError::not_found("El producto no existe"))?;

        self.order_lines.set_prekitted(cmd.line_id).await?;

        metrics::counter!("kitting_prekitted_total").increment(1);
        info!(line_id = %cmd.line_id, "Order line marked as prekitted");
        Ok(())
    }

    /// 标记核验完成
    ///
    /// 除核对清单完成外，还要求该行已完成预拣配。
    pub async fn mark_verified(&self, cmd: MarkVerifiedCommand) -> AppResult<()> {
        if !cmd.checklist.is_complete() {
            return Err(AppError::failed_precondition(
                "Debes revisar todos los componentes para todas las unidades antes de confirmar el kitting",
            ));
        }

        let mut line = self
            .order_lines
            .find_by_id(cmd.line_id)
            .await?
            .ok_or_else(|| AppError::not_found("El producto no existe"))?;

        line.mark_verified()?;
        self.order_lines.set_verified(cmd.line_id).await?;

        metrics::counter!("kitting_verified_total").increment(1);
        info!(line_id = %cmd.line_id, "Order line verified");
        Ok(())
    }
}
