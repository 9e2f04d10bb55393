//! 门店限制时段管理服务
//!
//! 提供限制时段的 REST API。

use std::sync::Arc;

use restriction_admin_service::{AppState, routes};
use restriction_hours::{
    MemoryRestrictionHourRepository, RestrictionHourRepository, RestrictionHourRepositoryTrait,
    RestrictionHourService,
};
use restriction_shared::{
    config::{AppConfig, StorageBackend},
    database::Database,
    observability,
};
use tokio::net::TcpListener;
use tracing::{info, warn};

const SERVICE_NAME: &str = "restriction-admin-service";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load(SERVICE_NAME)?;

    let obs_config = config
        .observability
        .clone()
        .with_service_name(&config.service_name);
    let _guard = observability::init(&obs_config).await?;

    info!(
        environment = %config.environment,
        backend = ?config.storage.backend,
        "Starting {} on {}",
        SERVICE_NAME,
        config.server_addr()
    );

    // 按配置选择存储后端
    let (repo, database): (Arc<dyn RestrictionHourRepositoryTrait>, Option<Database>) =
        match config.storage.backend {
            StorageBackend::Postgres => {
                let db = Database::connect(&config.database).await?;
                if config.database.run_migrations {
                    db.run_migrations(&config.database.migrations_dir).await?;
                }
                (
                    Arc::new(RestrictionHourRepository::new(db.pool().clone())),
                    Some(db),
                )
            }
            StorageBackend::Memory => {
                if config.is_production() {
                    warn!("In-memory storage is not persistent, data is lost on restart");
                }
                (Arc::new(MemoryRestrictionHourRepository::new()), None)
            }
        };

    let service = Arc::new(RestrictionHourService::new(repo));
    let mut state = AppState::new(service);
    if let Some(db) = database.clone() {
        state = state.with_database(db);
    }

    let app = routes::app_router(state).layer(routes::cors_layer(
        &config.cors,
        config.is_production(),
    ));

    let listener = TcpListener::bind(config.server_addr()).await?;
    info!("Listening on {}", config.server_addr());

    // 收到 SIGTERM 或 Ctrl+C 后停止接收新连接，等待已有请求处理完毕
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    if let Some(db) = database {
        db.close().await;
    }

    info!("Server shutdown complete");

    Ok(())
}

/// 监听关闭信号
///
/// 信号处理器注册失败时只记录警告，该信号源不再触发关闭
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C, initiating graceful shutdown..."),
        _ = terminate => info!("Received SIGTERM, initiating graceful shutdown..."),
    }
}
