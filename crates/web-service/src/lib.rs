//! Web服务模块
//!
//! 提供 HTTP API 接口和文档服务

use color_eyre::Result;
use database::{CartRepository, ProjectRepository};
use sqlx::{Pool, Postgres};
use std::sync::Arc;
use tokio::sync::watch::Receiver;
use tracing::info;

pub mod models;
pub mod routes;
pub mod services;

use services::{CartService, CartServiceTrait, ProjectService, ProjectServiceTrait};

/// 应用共享状态
pub struct AppState<PS: ProjectServiceTrait, CS: CartServiceTrait> {
    pub project_service: Arc<PS>,
    pub cart_service: Arc<CS>,
}

// 手动实现Clone，避免derive给泛型参数强加Clone约束
impl<PS: ProjectServiceTrait, CS: CartServiceTrait> Clone for AppState<PS, CS> {
    fn clone(&self) -> Self {
        Self {
            project_service: self.project_service.clone(),
            cart_service: self.cart_service.clone(),
        }
    }
}

/// 具体的 AppState 类型别名
pub type ConcreteAppState =
    AppState<ProjectService<ProjectRepository>, CartService<ProjectRepository, CartRepository>>;

/// 启动 Web 服务
///
/// 数据库连接池由调用方创建并注入，服务自身不持有全局单例。
pub async fn start_web_service(
    bind_addr: &str,
    pool: Pool<Postgres>,
    mut shutdown_rx: Receiver<bool>,
) -> Result<()> {
    let project_repository = Arc::new(ProjectRepository::new(pool.clone()));
    let cart_repository = Arc::new(CartRepository::new(pool));

    let shared_state = AppState {
        project_service: Arc::new(ProjectService::new(project_repository.clone())),
        cart_service: Arc::new(CartService::new(project_repository, cart_repository)),
    };

    let router = routes::create_app_router(shared_state);

    info!("🚀 启动 Web Service 在 {}", bind_addr);

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;

    axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(async move {
            shutdown_rx.changed().await.expect("Failed to receive shutdown signal");
            info!("🛑 Web Service 正在关闭...");
        })
        .await?;

    Ok(())
}
