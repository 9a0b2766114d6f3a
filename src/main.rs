use color_eyre::Result;
use shared_lib::models::config::AppConfig;
use tokio::sync::watch;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    // 初始化日志
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("🚀 启动 Project Catalog...");

    // 加载配置
    let config = AppConfig::load()?;

    // 创建数据库连接池并执行迁移
    // 连接池在这里创建，通过参数注入到各个服务中，进程退出时随作用域释放
    let pool = database::initialize_database(config.clone()).await?;

    // 优雅关闭信号
    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("❌ 监听 Ctrl-C 信号失败: {}", e);
            return;
        }

        info!("🛑 收到退出信号，准备关闭服务...");
        let _ = shutdown_tx.send(true);
    });

    web_service::start_web_service(&config.listen_addr, pool.clone(), shutdown_rx).await?;

    // 显式关闭连接池，保证挂起的链接正常释放
    pool.close().await;

    info!("👋 Project Catalog 已退出");
    Ok(())
}
