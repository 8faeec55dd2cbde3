//! 应用状态

use std::sync::Arc;

use kitting_auth_core::TokenService;
use metrics_exporter_prometheus::PrometheusHandle;
use sqlx::PgPool;

use crate::application::ServiceHandler;
use crate::domain::repositories::UserRepository;

/// 路由共享状态
#[derive(Clone)]
pub struct AppState {
    pub handler: Arc<ServiceHandler>,
    pub users: Arc<dyn UserRepository>,
    pub tokens: TokenService,
    pub metrics: PrometheusHandle,
    pub pool: PgPool,
}
