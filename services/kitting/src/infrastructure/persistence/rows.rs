//! 数据库行类型

use chrono::{DateTime, Utc};
use kitting_common::{AuditInfo, OrderLineId, ScheduleId, UserId};
use kitting_errors::{AppError, AppResult};
use uuid::Uuid;

use crate::domain::entities::{
    ComponentRequirement, DailySchedule, OrderLine, OrderLineDraft, ScheduleStatus, User,
};
use crate::domain::value_objects::HashedPassword;

/// order_lines 表行
#[derive(Debug, sqlx::FromRow)]
pub struct OrderLineRow {
    pub id: i64,
    pub schedule_id: Uuid,
    pub sku: String,
    pub description: String,
    pub quantity: i32,
    pub manufacturing_order: String,
    pub prekitted: bool,
    pub verified: Option<bool>,
    pub created_at: DateTime<Utc>,
}

impl OrderLineRow {
    pub fn into_entity(self) -> OrderLine {
        OrderLine {
            id: OrderLineId(self.id),
            schedule_id: ScheduleId::from_uuid(self.schedule_id),
            sku: self.sku,
            description: self.description,
            quantity: self.quantity.max(0) as u32,
            manufacturing_order: self.manufacturing_order,
            prekitted: self.prekitted,
            verified: self.verified,
            created_at: self.created_at,
        }
    }
}

/// daily_schedules 表行
#[derive(Debug, sqlx::FromRow)]
pub struct ScheduleRow {
    pub id: Uuid,
    pub status: i16,
    pub scheduled_date: DateTime<Utc>,
    pub total_pieces: i32,
    pub completed_pieces: i32,
    pub lines: serde_json::Value,
    pub created_at: DateTime<Utc>,
    pub created_by: Option<Uuid>,
    pub updated_at: DateTime<Utc>,
    pub updated_by: Option<Uuid>,
}

impl ScheduleRow {
    pub fn into_entity(self) -> AppResult<DailySchedule> {
        let status = ScheduleStatus::from_i16(self.status)?;
        let lines: Vec<OrderLineDraft> = serde_json::from_value(self.lines)
            .map_err(|e| AppError::database(format!("Invalid schedule lines snapshot: {}", e)))?;

        Ok(DailySchedule::from_parts(
            ScheduleId::from_uuid(self.id),
            status,
            self.scheduled_date,
            self.total_pieces.max(0) as u32,
            self.completed_pieces.max(0) as u32,
            lines,
            AuditInfo {
                created_at: self.created_at,
                created_by: self.created_by.map(UserId::from_uuid),
                updated_at: self.updated_at,
                updated_by: self.updated_by.map(UserId::from_uuid),
            },
        ))
    }
}

/// kitting_manifest 视图行
#[derive(Debug, sqlx::FromRow)]
pub struct ManifestRow {
    pub component_name: String,
    pub quantity_per_unit: i32,
}

impl ManifestRow {
    pub fn into_entity(self) -> ComponentRequirement {
        ComponentRequirement {
            name: self.component_name,
            quantity_per_unit: self.quantity_per_unit.max(0) as u32,
        }
    }
}

/// users 表行
#[derive(Debug, sqlx::FromRow)]
pub struct UserRow {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub display_name: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl UserRow {
    pub fn into_entity(self) -> User {
        User {
            id: UserId::from_uuid(self.id),
            email: self.email,
            password_hash: HashedPassword::from_hash(self.password_hash),
            display_name: self.display_name,
            created_at: self.created_at,
        }
    }
}
