//! 购物车仓库 trait 定义

use crate::models::cart::{CartItemDetail, CartItemInfo};
use crate::DatabaseResult;
use uuid::Uuid;

/// 购物车仓库trait定义
///
/// 同一个用户可以多次收藏同一个项目，这里不做唯一性约束。
#[async_trait::async_trait]
pub trait CartRepositoryTrait: Send + Sync + 'static {
    /// 创建购物车条目
    ///
    /// # 参数
    /// - `project_id`: 关联的项目 ID，调用方负责保证其存在
    /// - `user_id`: 用户标识
    ///
    /// # 返回值
    /// 返回创建的条目
    async fn create_cart_item(&self, project_id: Uuid, user_id: &str) -> DatabaseResult<CartItemInfo>;

    /// 查询指定用户的全部购物车条目
    ///
    /// 按创建时间倒序（最新的在前），并携带关联的项目信息。
    async fn list_cart_items(&self, user_id: &str) -> DatabaseResult<Vec<CartItemDetail>>;

    /// 按条目自身的 ID 删除购物车条目
    ///
    /// 注意是条目 ID 而不是项目 ID。条目不存在时返回
    /// [`DatabaseError::NotFound`]。
    ///
    /// [`DatabaseError::NotFound`]: crate::DatabaseError::NotFound
    async fn delete_cart_item(&self, id: Uuid) -> DatabaseResult<()>;
}
