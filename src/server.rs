//! 服务器组装与启动

use std::{path::Path, sync::Arc};

use anyhow::Context;
use axum::{middleware, routing::get, Router};
use tokio::{net::TcpListener, signal};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
};
use tracing::info;

use crate::app::students::{
    handler::{self, AppState},
    service::StudentService,
};
use crate::core::middleware::request_logging_middleware;
use crate::infrastructure::{
    config::Config,
    store::{self, StudentStore},
};

/// 组装路由：API、健康检查、静态客户端；每个请求由日志中间件记录一次
pub fn build_router(store: Arc<dyn StudentStore>, static_dir: impl AsRef<Path>) -> Router {
    let state = AppState {
        student_service: StudentService::new(store),
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    handler::routes()
        .route("/health", get(handler::health_check))
        .fallback_service(ServeDir::new(static_dir.as_ref()))
        .layer(
            ServiceBuilder::new()
                .layer(middleware::from_fn(request_logging_middleware))
                .layer(cors),
        )
        .with_state(state)
}

/// 打开存储、绑定端口并运行直到收到关闭信号
pub async fn run(config: Config) -> anyhow::Result<()> {
    let store = store::open(&config)
        .await
        .context("failed to open student store")?;

    let app = build_router(store, &config.static_dir);

    let address = config.bind_address();
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("failed to bind {}", address))?;
    let addr = listener.local_addr()?;

    info!("🚀 Student records server running on http://{}", addr);
    info!("📖 API endpoints:");
    info!("   GET    /api/students      - List students (newest first)");
    info!("   POST   /api/students      - Create student");
    info!("   GET    /api/students/:id  - Get student");
    info!("   PUT    /api/students/:id  - Replace student fields");
    info!("   DELETE /api/students/:id  - Delete student");
    info!("   GET    /health            - Health check");
    info!("📁 Serving client from {}", config.static_dir.display());

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(_) => std::future::pending::<()>().await,
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(_) => std::future::pending::<()>().await,
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
