use crate::{DatabaseError, DatabaseResult};
use shared_lib::models::config::AppConfig;
use sqlx::postgres::PgPoolOptions;
use sqlx::{Pool, Postgres};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// 数据库连接池
pub type DatabasePool = Pool<Postgres>;

/// 创建数据库连接池并执行迁移
///
/// 连接池由启动入口创建后注入到各个服务，生命周期跟随进程：
/// 启动时建立，退出时由调用方显式关闭。
pub async fn initialize_database(config: Arc<AppConfig>) -> DatabaseResult<DatabasePool> {
    // pool内部是智能指针，.clone()即可安全跨线程共享
    let pool = PgPoolOptions::new()
        // 目录服务流量不大，预留少量连接即可
        .min_connections(5)
        .max_connections(30)
        .acquire_timeout(Duration::from_secs(3))
        // 空闲半小时释放
        .idle_timeout(Duration::from_secs(1800))
        // 定期强制重建连接，避免数据库侧的长连接问题
        .max_lifetime(Duration::from_secs(3600 * 4))
        .test_before_acquire(true)
        .connect(&config.postgresql_conn_str)
        .await
        .map_err(|e| DatabaseError::connection(format!("无法连接PostgreSQL: {e}")))?;

    info!("🗄️ 数据库连接池就绪");

    // 迁移脚本内嵌在二进制里，启动时保证表结构就位
    sqlx::migrate!("../../migrations")
        .run(&pool)
        .await
        .map_err(|e| DatabaseError::migration(format!("迁移执行失败: {e}")))?;

    info!("✅ 数据库迁移完成");

    Ok(pool)
}
