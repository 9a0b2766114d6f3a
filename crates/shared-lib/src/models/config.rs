use color_eyre::eyre::Context;
use color_eyre::{Help, Result};
use std::sync::Arc;

/// web服务监听端口的默认值
const DEFAULT_PORT: u16 = 3000;

/// 程序配置
pub struct AppConfig {
    /// postgresql数据库链接字符串
    pub postgresql_conn_str: String,

    /// web服务监听地址，端口来自环境变量 `PORT`（默认3000）
    pub listen_addr: String,
}

impl AppConfig {
    pub fn load() -> Result<Arc<AppConfig>> {
        // 本地开发时从.env注入环境变量；线上部署直接配置环境变量，
        // .env文件不存在不算错误
        let _ = dotenvy::dotenv();

        let db_url = std::env::var("DATABASE_URL")
            .context("DATABASE_URL is not set")
            .suggestion("在环境变量或.env文件中配置 DATABASE_URL")?;

        let port = std::env::var("PORT")
            .ok()
            .and_then(|s| s.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);

        Ok(Arc::new(AppConfig {
            postgresql_conn_str: db_url,
            listen_addr: format!("0.0.0.0:{port}"),
        }))
    }
}
