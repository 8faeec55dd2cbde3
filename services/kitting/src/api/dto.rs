//! 请求 / 响应 DTO

use chrono::{DateTime, Utc};
use kitting_common::Pagination;
use serde::{Deserialize, Serialize};

use crate::domain::entities::OrderLineDraft;

/// 批量导入预览最多展示的行数
pub const IMPORT_PREVIEW_LIMIT: usize = 10;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: UserDto,
}

#[derive(Debug, Serialize)]
pub struct UserDto {
    pub id: String,
    pub email: String,
    pub display_name: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        Self {
            success: true,
            message: None,
        }
    }

    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateScheduleRequest {
    pub scheduled_date: DateTime<Utc>,
    pub products: Vec<OrderLineDraft>,
}

#[derive(Debug, Serialize)]
pub struct CreateScheduleResponse {
    pub id: String,
}

/// 批量导入请求：原始 CSV 文本
#[derive(Debug, Deserialize)]
pub struct ImportRequest {
    pub content: String,
}

/// 批量导入预览：完整草稿列表单独确认后才会并入待提交日程，
/// 预览只截取前 [`IMPORT_PREVIEW_LIMIT`] 行
#[derive(Debug, Serialize)]
pub struct ImportPreviewResponse {
    pub total: usize,
    pub preview: Vec<OrderLineDraft>,
    pub products: Vec<OrderLineDraft>,
}

impl ImportPreviewResponse {
    pub fn new(products: Vec<OrderLineDraft>) -> Self {
        let preview = products.iter().take(IMPORT_PREVIEW_LIMIT).cloned().collect();
        Self {
            total: products.len(),
            preview,
            products,
        }
    }
}

/// 日程列表查询参数
#[derive(Debug, Default, Deserialize)]
pub struct ListSchedulesParams {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

impl ListSchedulesParams {
    pub fn pagination(&self) -> Pagination {
        let default = Pagination::default();
        Pagination {
            page: self.page.unwrap_or(default.page).max(1),
            page_size: self.page_size.unwrap_or(default.page_size).clamp(1, 100),
        }
    }
}
