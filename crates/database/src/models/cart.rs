//! 购物车数据库模型
//!
//! 这里的"购物车"是收藏列表，不涉及结算

use crate::models::project::ProjectInfo;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// 购物车条目
///
/// 创建后不再更新，只会被整条删除
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct CartItemInfo {
    pub id: Uuid,
    pub project_id: Uuid,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
}

/// 购物车条目及其关联的项目信息
///
/// 外键带级联删除，关联的项目一定存在
#[derive(Debug, Clone)]
pub struct CartItemDetail {
    pub item: CartItemInfo,
    pub project: ProjectInfo,
}
