//! Kitting Service

use std::net::SocketAddr;
use std::sync::Arc;

use kitting_auth_core::TokenService;
use kitting_config::AppConfig;
use kitting_telemetry::{init_metrics, init_tracing};
use secrecy::ExposeSecret;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use kitting::api::{AppState, app_router};
use kitting::application::ServiceHandler;
use kitting::infrastructure::persistence::{
    PostgresManifestRepository, PostgresOrderLineRepository, PostgresScheduleRepository,
    PostgresUserRepository, create_pool,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    // 加载配置
    let config = AppConfig::load("config")?;

    // 初始化遥测
    init_tracing(&config.telemetry.log_level, config.is_production());
    let metrics_handle = init_metrics();

    info!(app = %config.app_name, env = %config.app_env, "Starting kitting service");

    // 数据库连接池
    let pool = create_pool(
        config.database.url.expose_secret(),
        config.database.max_connections,
    )
    .await?;

    // 仓储与业务处理器
    let order_lines = Arc::new(PostgresOrderLineRepository::new(pool.clone()));
    let schedules = Arc::new(PostgresScheduleRepository::new(pool.clone()));
    let manifests = Arc::new(PostgresManifestRepository::new(pool.clone()));
    let users = Arc::new(PostgresUserRepository::new(pool.clone()));

    let handler = Arc::new(ServiceHandler::new(order_lines, schedules, manifests));

    let tokens = TokenService::new(
        config.jwt.secret.expose_secret(),
        config.jwt.expires_in as i64,
        &config.app_name,
    );

    let state = AppState {
        handler,
        users,
        tokens,
        metrics: metrics_handle,
        pool,
    };

    let app = app_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    info!(%addr, "HTTP server starting");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
