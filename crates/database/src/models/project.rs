//! 项目数据库模型
//!
//! 定义项目相关的数据库模型结构体

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// 项目信息结构体
///
/// `created_at` 不对外暴露，仅用于固定列表的排序（按创建顺序）。
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ProjectInfo {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub category: String,
    pub author: String,
    pub image_url: String,
    pub created_at: DateTime<Utc>,
}

/// 项目分页查询结果
#[derive(Debug, Clone)]
pub struct ProjectPage {
    pub projects: Vec<ProjectInfo>,
    pub total: u32,
}

/// 项目创建参数
///
/// 所有字段原样入库，这一层不做规范化和校验
#[derive(Debug, Clone)]
pub struct ProjectCreate {
    pub title: String,
    pub description: Option<String>,
    pub category: String,
    pub author: String,
    pub image_url: String,
}
