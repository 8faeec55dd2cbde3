//! PostgreSQL repository implementation

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use kitting_common::{OrderLineId, PagedResult, Pagination};
use kitting_errors::{AppError, AppResult};
use sqlx::PgPool;

use crate::domain::entities::{ComponentRequirement, DailySchedule, OrderLine, User};
use crate::domain::repositories::{
    ManifestRepository, OrderLineRepository, ScheduleRepository, UserRepository,
};

use super::rows::{ManifestRow, OrderLineRow, ScheduleRow, UserRow};

// ============================================================================
// OrderLineRepository 实现
// ============================================================================

pub struct PostgresOrderLineRepository {
    pool: PgPool,
}

impl PostgresOrderLineRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const ORDER_LINE_COLUMNS: &str = "id, schedule_id, sku, description, quantity, \
     manufacturing_order, prekitted, verified, created_at";

#[async_trait]
impl OrderLineRepository for PostgresOrderLineRepository {
    async fn find_by_id(&self, id: OrderLineId) -> AppResult<Option<OrderLine>> {
        let row = sqlx::query_as::<_, OrderLineRow>(&format!(
            "SELECT {} FROM order_lines WHERE id = $1",
            ORDER_LINE_COLUMNS
        ))
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to fetch order line: {}", e)))?;

        Ok(row.map(OrderLineRow::into_entity))
    }

    async fn list_all(&self) -> AppResult<Vec<OrderLine>> {
        let rows = sqlx::query_as::<_, OrderLineRow>(&format!(
            "SELECT {} FROM order_lines ORDER BY created_at",
            ORDER_LINE_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to list order lines: {}", e)))?;

        Ok(rows.into_iter().map(OrderLineRow::into_entity).collect())
    }

    async fn list_prekitting_queue(
        &self,
        today_start: DateTime<Utc>,
    ) -> AppResult<Vec<OrderLine>> {
        // 未完成的行，加上今天创建的行（当天完成的仍然可见），组内最新的在前
        let rows = sqlx::query_as::<_, OrderLineRow>(&format!(
            "SELECT {} FROM order_lines \
             WHERE prekitted = FALSE OR created_at >= $1 \
             ORDER BY prekitted ASC, created_at DESC",
            ORDER_LINE_COLUMNS
        ))
        .bind(today_start)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to list prekitting queue: {}", e)))?;

        Ok(rows.into_iter().map(OrderLineRow::into_entity).collect())
    }

    async fn list_kitting_queue(&self) -> AppResult<Vec<OrderLine>> {
        // 未核验的在前（NULL 视同未核验），组内最新的在前
        let rows = sqlx::query_as::<_, OrderLineRow>(&format!(
            "SELECT {} FROM order_lines \
             WHERE prekitted = TRUE \
             ORDER BY COALESCE(verified, FALSE) ASC, created_at DESC",
            ORDER_LINE_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to list kitting queue: {}", e)))?;

        Ok(rows.into_iter().map(OrderLineRow::into_entity).collect())
    }

    async fn set_prekitted(&self, id: OrderLineId) -> AppResult<()> {
        let result = sqlx::query("UPDATE order_lines SET prekitted = TRUE WHERE id = $1")
            .bind(id.0)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to update order line: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("El producto no existe"));
        }
        Ok(())
    }

    async fn set_verified(&self, id: OrderLineId) -> AppResult<()> {
        let result = sqlx::query("UPDATE order_lines SET verified = TRUE WHERE id = $1")
            .bind(id.0)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to update order line: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("El producto no existe"));
        }
        Ok(())
    }
}

// ============================================================================
// ScheduleRepository 实现
// ============================================================================

pub struct PostgresScheduleRepository {
    pool: PgPool,
}

impl PostgresScheduleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ScheduleRepository for PostgresScheduleRepository {
    async fn insert(&self, schedule: &DailySchedule) -> AppResult<()> {
        // 日程记录与订单行在同一事务中写入，避免部分创建的日程
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| AppError::database(format!("Failed to begin transaction: {}", e)))?;

        let lines_snapshot = serde_json::to_value(&schedule.lines)
            .map_err(|e| AppError::internal(format!("Failed to serialize lines: {}", e)))?;

        sqlx::query(
            r#"
            INSERT INTO daily_schedules (
                id, status, scheduled_date, total_pieces, completed_pieces, lines,
                created_at, created_by, updated_at, updated_by
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(schedule.id.0)
        .bind(schedule.status.as_i16())
        .bind(schedule.scheduled_date)
        .bind(schedule.total_pieces as i32)
        .bind(schedule.completed_pieces as i32)
        .bind(lines_snapshot)
        .bind(schedule.audit_info.created_at)
        .bind(schedule.audit_info.created_by.as_ref().map(|u| u.0))
        .bind(schedule.audit_info.updated_at)
        .bind(schedule.audit_info.updated_by.as_ref().map(|u| u.0))
        .execute(&mut *tx)
        .await
        .map_err(|e| AppError::database(format!("Failed to insert schedule: {}", e)))?;

        for line in &schedule.lines {
            sqlx::query(
                r#"
                INSERT INTO order_lines (
                    schedule_id, sku, description, quantity, manufacturing_order, prekitted
                ) VALUES ($1, $2, $3, $4, $5, FALSE)
                "#,
            )
            .bind(schedule.id.0)
            .bind(&line.sku)
            .bind(&line.description)
            .bind(line.quantity as i32)
            .bind(&line.manufacturing_order)
            .execute(&mut *tx)
            .await
            .map_err(|e| AppError::database(format!("Failed to insert order line: {}", e)))?;
        }

        tx.commit()
            .await
            .map_err(|e| AppError::database(format!("Failed to commit schedule: {}", e)))?;

        Ok(())
    }

    async fn list(&self, pagination: Pagination) -> AppResult<PagedResult<DailySchedule>> {
        let total: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM daily_schedules")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to count schedules: {}", e)))?;

        let rows = sqlx::query_as::<_, ScheduleRow>(
            r#"
            SELECT id, status, scheduled_date, total_pieces, completed_pieces, lines,
                   created_at, created_by, updated_at, updated_by
            FROM daily_schedules
            ORDER BY scheduled_date DESC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(pagination.page_size as i64)
        .bind(pagination.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to list schedules: {}", e)))?;

        let items = rows
            .into_iter()
            .map(ScheduleRow::into_entity)
            .collect::<AppResult<Vec<_>>>()?;

        Ok(PagedResult::new(items, total.0 as u64, &pagination))
    }
}

// ============================================================================
// ManifestRepository 实现
// ============================================================================

pub struct PostgresManifestRepository {
    pool: PgPool,
}

impl PostgresManifestRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ManifestRepository for PostgresManifestRepository {
    async fn find_by_sku(&self, sku: &str) -> AppResult<Vec<ComponentRequirement>> {
        let rows = sqlx::query_as::<_, ManifestRow>(
            r#"
            SELECT component_name, quantity_per_unit
            FROM kitting_manifest
            WHERE sku = $1
            ORDER BY component_name
            "#,
        )
        .bind(sku)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to fetch manifest: {}", e)))?;

        Ok(rows.into_iter().map(ManifestRow::into_entity).collect())
    }
}

// ============================================================================
// UserRepository 实现
// ============================================================================

pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, email, password_hash, display_name, created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to fetch user: {}", e)))?;

        Ok(row.map(UserRow::into_entity))
    }
}
