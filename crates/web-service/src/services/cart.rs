//! 购物车服务
//!
//! 收藏（加入购物车）前检查项目存在性，并补齐游客身份

use crate::services::parse_id;
use crate::services::traits::CartServiceTrait;
use database::{
    CartItemDetail, CartItemInfo, CartRepositoryTrait, DatabaseResult, ProjectRepositoryTrait,
};
use shared_lib::models::user::UserId;
use std::sync::Arc;

#[derive(Debug)]
pub struct CartService<PR: ProjectRepositoryTrait, CR: CartRepositoryTrait> {
    project_repository: Arc<PR>,
    cart_repository: Arc<CR>,
}

impl<PR: ProjectRepositoryTrait, CR: CartRepositoryTrait> CartService<PR, CR> {
    pub fn new(project_repository: Arc<PR>, cart_repository: Arc<CR>) -> Self {
        Self {
            project_repository,
            cart_repository,
        }
    }
}

#[async_trait::async_trait]
impl<PR: ProjectRepositoryTrait, CR: CartRepositoryTrait> CartServiceTrait for CartService<PR, CR> {
    /// 把项目加入购物车
    ///
    /// 先通过项目仓库确认项目存在，再创建条目。项目不存在时
    /// 整个操作失败，不会留下半成品数据。
    /// 不做重复检查，同一个用户可以反复收藏同一个项目。
    async fn add_to_cart(
        &self,
        project_id: &str,
        user_id: Option<String>,
    ) -> DatabaseResult<CartItemInfo> {
        let id = parse_id(project_id, "Project not found")?;

        // 存在性检查，缺失时直接把NotFound传播出去
        let project = self.project_repository.get_project_by_id(id).await?;

        let user = UserId::or_guest(user_id);
        self.cart_repository.create_cart_item(project.id, user.as_str()).await
    }

    async fn list_cart(&self, user_id: Option<String>) -> DatabaseResult<Vec<CartItemDetail>> {
        let user = UserId::or_guest(user_id);
        self.cart_repository.list_cart_items(user.as_str()).await
    }

    async fn remove_from_cart(&self, cart_item_id: &str) -> DatabaseResult<()> {
        let id = parse_id(cart_item_id, &format!("Cart item {cart_item_id} not found"))?;
        self.cart_repository.delete_cart_item(id).await
    }
}
