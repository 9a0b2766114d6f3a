//! 服务层 trait 定义
//!
//! 定义服务层的抽象接口，handler 通过这些接口访问业务逻辑

use crate::services::project::ProjectListing;
use database::{CartItemDetail, CartItemInfo, DatabaseResult, ProjectCreate, ProjectInfo};

/// 项目服务 trait 定义
///
/// 覆盖项目的分页列表、创建和删除
#[async_trait::async_trait]
pub trait ProjectServiceTrait: Send + Sync + 'static {
    /// 分页查询项目列表并计算分页元数据
    ///
    /// # 参数
    /// - `page`: 页码，从1开始，调用方保证 >= 1
    /// - `limit`: 每页大小，调用方保证 >= 1
    ///
    /// # 返回值
    /// 当前页的项目列表和分页元数据 [`ProjectListing`]。
    /// 页码超出末尾时返回空列表，不是错误。
    async fn list_projects(&self, page: u32, limit: u32) -> DatabaseResult<ProjectListing>;

    /// 创建新项目
    async fn create_project(&self, project: ProjectCreate) -> DatabaseResult<ProjectInfo>;

    /// 删除项目，返回被删除的项目信息
    ///
    /// `project_id` 是边界上的不透明字符串 ID
    async fn delete_project(&self, project_id: &str) -> DatabaseResult<ProjectInfo>;
}

/// 购物车服务 trait 定义
///
/// `user_id` 在所有接口上都是可选的，缺失时按游客处理
#[async_trait::async_trait]
pub trait CartServiceTrait: Send + Sync + 'static {
    /// 把项目加入购物车
    ///
    /// 项目不存在时返回 NotFound 并且不会创建任何条目。
    /// 重复收藏同一个项目会产生多个条目。
    async fn add_to_cart(
        &self,
        project_id: &str,
        user_id: Option<String>,
    ) -> DatabaseResult<CartItemInfo>;

    /// 查询购物车内容，最新收藏的在前
    async fn list_cart(&self, user_id: Option<String>) -> DatabaseResult<Vec<CartItemDetail>>;

    /// 按条目 ID 删除购物车条目
    ///
    /// 条目已经被删除过时返回 NotFound
    async fn remove_from_cart(&self, cart_item_id: &str) -> DatabaseResult<()>;
}
