//! 购物车相关的请求/响应模型
//!
//! 购物车条目在线上格式里使用 camelCase 字段名

use crate::models::projects::ProjectInfo;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// 购物车条目
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CartItemInfo {
    #[schema(example = "71b3a586-10c1-4899-8a0a-b3e2a5b038f8")]
    pub id: String,
    pub project_id: String,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
}

impl From<database::CartItemInfo> for CartItemInfo {
    fn from(value: database::CartItemInfo) -> Self {
        Self {
            id: value.id.to_string(),
            project_id: value.project_id.to_string(),
            user_id: value.user_id,
            created_at: value.created_at,
        }
    }
}

/// 购物车条目及其关联的项目
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CartItemDetail {
    pub id: String,
    pub project_id: String,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
    pub project: ProjectInfo,
}

impl From<database::CartItemDetail> for CartItemDetail {
    fn from(value: database::CartItemDetail) -> Self {
        Self {
            id: value.item.id.to_string(),
            project_id: value.item.project_id.to_string(),
            user_id: value.item.user_id,
            created_at: value.item.created_at,
            project: value.project.into(),
        }
    }
}

/// 购物车查询参数
#[derive(Debug, Default, Deserialize, ToSchema, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct CartQuery {
    /// 用户标识，缺失时按游客处理
    pub user_id: Option<String>,
}

/// 加入购物车请求体
///
/// `projectId` 必填，这里声明为 [`Option`] 以便在 handler 里
/// 返回明确的400错误而不是反序列化失败
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CartAddRequest {
    pub project_id: Option<String>,
    pub user_id: Option<String>,
}

/// 加入购物车响应
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CartAddReply {
    #[schema(example = "Project added to cart successfully")]
    pub message: String,
    pub cart_item: CartItemInfo,
}

/// 购物车列表响应
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CartListReply {
    pub cart_items: Vec<CartItemDetail>,
    #[schema(example = 2)]
    pub count: usize,
}
