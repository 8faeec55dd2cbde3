//! 路由与业务端点

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::header,
    middleware,
    response::IntoResponse,
    routing::{get, post},
};
use chrono::{NaiveTime, Utc};
use kitting_common::{OrderLineId, PagedResult};
use kitting_errors::AppResult;
use kitting_telemetry::HealthStatus;

use crate::application::commands::{
    CreateScheduleCommand, MarkPrekittedCommand, MarkVerifiedCommand,
};
use crate::application::handler::{ChecklistSheet, QueueView};
use crate::application::queries::{GetOrderLineQuery, ListSchedulesQuery};
use crate::domain::entities::DailySchedule;
use crate::domain::services::bulk_import;
use crate::domain::services::dashboard::DashboardSummary;
use crate::domain::value_objects::ChecklistSummary;
use crate::infrastructure::persistence::check_connection;

use super::auth;
use super::dto::*;
use super::middleware::auth_middleware;
use super::state::AppState;

/// 组装应用路由
pub fn app_router(state: AppState) -> Router {
    let protected = Router::new()
        .route("/api/auth/me", get(auth::me))
        .route("/api/dashboard", get(dashboard))
        .route("/api/prekitting", get(prekitting_queue))
        .route("/api/kitting", get(kitting_queue))
        .route("/api/order-lines/{id}", get(get_checklist_sheet))
        .route("/api/order-lines/{id}/prekitted", post(mark_prekitted))
        .route("/api/order-lines/{id}/verified", post(mark_verified))
        .route("/api/schedules", post(create_schedule).get(list_schedules))
        .route("/api/schedules/import", post(import_preview))
        .route("/api/schedules/import/template", get(import_template))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    Router::new()
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/logout", post(auth::logout))
        .merge(protected)
        .route("/health", get(health))
        .route("/metrics", get(metrics_endpoint))
        .with_state(state)
}

// ========== 仪表盘与队列 ==========

async fn dashboard(State(state): State<AppState>) -> AppResult<Json<DashboardSummary>> {
    let summary = state.handler.dashboard_summary().await?;
    Ok(Json(summary))
}

async fn prekitting_queue(State(state): State<AppState>) -> AppResult<Json<QueueView>> {
    let today_start = Utc::now().date_naive().and_time(NaiveTime::MIN).and_utc();
    let view = state.handler.prekitting_queue(today_start).await?;
    Ok(Json(view))
}

async fn kitting_queue(State(state): State<AppState>) -> AppResult<Json<QueueView>> {
    let view = state.handler.kitting_queue().await?;
    Ok(Json(view))
}

// ========== 核对清单与状态转换 ==========

async fn get_checklist_sheet(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<ChecklistSheet>> {
    let sheet = state
        .handler
        .get_checklist_sheet(GetOrderLineQuery {
            line_id: OrderLineId(id),
        })
        .await?;
    Ok(Json(sheet))
}

async fn mark_prekitted(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(checklist): Json<ChecklistSummary>,
) -> AppResult<Json<SuccessResponse>> {
    state
        .handler
        .mark_prekitted(MarkPrekittedCommand {
            line_id: OrderLineId(id),
            checklist,
        })
        .await?;
    Ok(Json(SuccessResponse::ok()))
}

async fn mark_verified(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(checklist): Json<ChecklistSummary>,
) -> AppResult<Json<SuccessResponse>> {
    state
        .handler
        .mark_verified(MarkVerifiedCommand {
            line_id: OrderLineId(id),
            checklist,
        })
        .await?;
    Ok(Json(SuccessResponse::ok()))
}

// ========== 日程 ==========

async fn create_schedule(
    State(state): State<AppState>,
    Json(req): Json<CreateScheduleRequest>,
) -> AppResult<Json<CreateScheduleResponse>> {
    let id = state
        .handler
        .create_schedule(CreateScheduleCommand {
            scheduled_date: req.scheduled_date,
            products: req.products,
        })
        .await?;
    Ok(Json(CreateScheduleResponse { id: id.to_string() }))
}

async fn list_schedules(
    State(state): State<AppState>,
    Query(params): Query<ListSchedulesParams>,
) -> AppResult<Json<PagedResult<DailySchedule>>> {
    let result = state
        .handler
        .list_schedules(ListSchedulesQuery {
            pagination: params.pagination(),
        })
        .await?;
    Ok(Json(result))
}

async fn import_preview(
    State(state): State<AppState>,
    Json(req): Json<ImportRequest>,
) -> AppResult<Json<ImportPreviewResponse>> {
    let products = state.handler.parse_import(&req.content)?;
    Ok(Json(ImportPreviewResponse::new(products)))
}

async fn import_template() -> impl IntoResponse {
    (
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"plantilla_programacion_kitting.csv\"",
            ),
        ],
        bulk_import::csv_template(),
    )
}

// ========== 运维端点 ==========

async fn health(State(state): State<AppState>) -> Json<HealthStatus> {
    let mut status = HealthStatus::new();
    let db = check_connection(&state.pool).await;
    status.add_check("database", db.is_ok(), db.err().map(|e| e.to_string()));
    Json(status)
}

async fn metrics_endpoint(State(state): State<AppState>) -> String {
    state.metrics.render()
}
