//! 项目相关的请求/响应模型

use crate::models::common::Pagination;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// 项目信息
///
/// 对外的 `id` 是不透明字符串，`created_at` 属于存储细节不对外暴露
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProjectInfo {
    #[schema(example = "4e1adcc1-90f6-44bc-b132-65eb6b6a4100")]
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub category: String,
    pub author: String,
    pub image_url: String,
}

impl From<database::ProjectInfo> for ProjectInfo {
    fn from(value: database::ProjectInfo) -> Self {
        Self {
            id: value.id.to_string(),
            title: value.title,
            description: value.description,
            category: value.category,
            author: value.author,
            image_url: value.image_url,
        }
    }
}

/// 创建项目请求体
///
/// 字段原样入库。客户端已经做过表单校验，这里不再重复
#[derive(Debug, Deserialize, ToSchema)]
pub struct ProjectCreate {
    pub title: String,
    pub description: Option<String>,
    pub category: String,
    pub author: String,
    pub image_url: String,
}

/// 项目列表响应
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ProjectListReply {
    pub projects: Vec<ProjectInfo>,
    pub pagination: Pagination,
}
