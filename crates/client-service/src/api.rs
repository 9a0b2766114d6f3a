//! 后端 API 客户端
//!
//! [`CatalogApi`] 是视图模型依赖的抽象接口，[`HttpCatalogApi`] 是
//! 基于 reqwest 的实现。后端地址从环境变量 `BACKEND_URL` 读取

use anyhow::Result;
use reqwest::Client as HttpClient;
use serde::{Deserialize, Serialize};
use serde_json::json;

/// 缺省的后端地址
const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// 项目信息（线上格式）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectSummary {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub category: String,
    pub author: String,
    pub image_url: String,
}

/// 分页元数据（线上格式）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub total: u32,
    pub page: u32,
    pub limit: u32,
    pub total_pages: u32,
    pub has_more: bool,
}

/// `GET /projects` 响应
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectPage {
    pub projects: Vec<ProjectSummary>,
    pub pagination: Pagination,
}

/// 购物车条目（线上格式）
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub id: String,
    pub project_id: String,
    pub user_id: String,
    pub created_at: String,
}

/// 购物车条目及内嵌的项目
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItemDetail {
    pub id: String,
    pub project_id: String,
    pub user_id: String,
    pub created_at: String,
    pub project: ProjectSummary,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CartListReply {
    cart_items: Vec<CartItemDetail>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CartAddReply {
    cart_item: CartItem,
}

/// 目录服务的客户端接口
///
/// 视图模型只依赖这个trait，测试时可以替换为内存实现
#[async_trait::async_trait]
pub trait CatalogApi: Send + Sync {
    /// 拉取一页项目
    async fn fetch_projects(&self, page: u32, limit: u32) -> Result<ProjectPage>;

    /// 拉取当前用户（游客）的购物车内容
    async fn fetch_cart(&self) -> Result<Vec<CartItemDetail>>;

    /// 收藏项目，返回创建的购物车条目
    async fn add_to_cart(&self, project_id: &str) -> Result<CartItem>;

    /// 按条目ID取消收藏
    async fn remove_from_cart(&self, cart_item_id: &str) -> Result<()>;
}

/// 基于 reqwest 的客户端实现
#[derive(Debug, Clone)]
pub struct HttpCatalogApi {
    http_client: HttpClient,
    base_url: String,
}

impl HttpCatalogApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http_client: HttpClient::new(),
            base_url: base_url.into(),
        }
    }

    /// 从环境变量 `BACKEND_URL` 构建客户端，缺失时使用本地地址
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("BACKEND_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(base_url)
    }
}

#[async_trait::async_trait]
impl CatalogApi for HttpCatalogApi {
    async fn fetch_projects(&self, page: u32, limit: u32) -> Result<ProjectPage> {
        let url = format!("{}/projects?page={page}&limit={limit}", self.base_url);
        let reply = self
            .http_client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json::<ProjectPage>()
            .await?;
        Ok(reply)
    }

    async fn fetch_cart(&self) -> Result<Vec<CartItemDetail>> {
        let url = format!("{}/cart", self.base_url);
        let reply = self
            .http_client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json::<CartListReply>()
            .await?;
        Ok(reply.cart_items)
    }

    async fn add_to_cart(&self, project_id: &str) -> Result<CartItem> {
        let url = format!("{}/cart", self.base_url);
        let reply = self
            .http_client
            .post(url)
            .json(&json!({ "projectId": project_id }))
            .send()
            .await?
            .error_for_status()?
            .json::<CartAddReply>()
            .await?;
        Ok(reply.cart_item)
    }

    async fn remove_from_cart(&self, cart_item_id: &str) -> Result<()> {
        let url = format!("{}/cart/{cart_item_id}", self.base_url);
        self.http_client.delete(url).send().await?.error_for_status()?;
        Ok(())
    }
}
