use thiserror::Error;

/// 数据库操作错误类型
///
/// 上层按变体映射到http状态码，[`NotFound`](Self::NotFound) 的消息
/// 会原样进入对外的404响应体
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// SQLX 错误
    #[error("数据库操作错误: {0}")]
    SqlxError(#[from] sqlx::Error),

    /// 记录不存在
    #[error("{0}")]
    NotFound(String),

    /// 连接错误
    #[error("数据库连接错误: {0}")]
    ConnectionError(String),

    /// 迁移错误
    #[error("数据库迁移错误: {0}")]
    MigrationError(String),
}

impl DatabaseError {
    pub fn not_found<T: ToString>(msg: T) -> Self {
        Self::NotFound(msg.to_string())
    }

    pub fn connection<T: ToString>(msg: T) -> Self {
        Self::ConnectionError(msg.to_string())
    }

    pub fn migration<T: ToString>(msg: T) -> Self {
        Self::MigrationError(msg.to_string())
    }
}
