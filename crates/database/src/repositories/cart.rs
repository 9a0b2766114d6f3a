//! 购物车仓库
//!
//! 负责购物车条目相关的数据库操作

use crate::models::cart::{CartItemDetail, CartItemInfo};
use crate::models::project::ProjectInfo;
use crate::repositories::traits::CartRepositoryTrait;
use crate::{DatabaseError, DatabaseResult};
use sqlx::{PgPool, Row};
use tracing::debug;
use uuid::Uuid;

/// 购物车仓库结构体
#[derive(Debug, Clone)]
pub struct CartRepository {
    pool: PgPool,
}

impl CartRepository {
    /// 创建新的购物车仓库实例
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl CartRepositoryTrait for CartRepository {
    /// 创建购物车条目
    ///
    /// 不检查重复，同一个用户可以反复收藏同一个项目
    async fn create_cart_item(&self, project_id: Uuid, user_id: &str) -> DatabaseResult<CartItemInfo> {
        debug!("📝 创建购物车条目 - 项目: {}, 用户: {}", project_id, user_id);

        let item = sqlx::query_as::<_, CartItemInfo>(
            r#"
            INSERT INTO cart_items (project_id, user_id)
            VALUES ($1, $2)
            RETURNING id, project_id, user_id, created_at
            "#,
        )
        .bind(project_id)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;

        debug!("✅ 购物车条目创建成功: {:#?}", item);
        Ok(item)
    }

    /// 查询指定用户的全部购物车条目
    ///
    /// # SQL 查询说明
    ///
    /// 内联 JOIN 带出关联的项目信息。外键级联删除保证了条目引用的
    /// 项目一定存在，所以这里不需要 LEFT JOIN。
    /// 项目列使用 `p_` 前缀别名与条目列区分。
    async fn list_cart_items(&self, user_id: &str) -> DatabaseResult<Vec<CartItemDetail>> {
        debug!("🔍 查询购物车 - 用户: {}", user_id);

        let rows = sqlx::query(
            r#"
            SELECT c.id,
                   c.project_id,
                   c.user_id,
                   c.created_at,
                   p.id          AS p_id,
                   p.title       AS p_title,
                   p.description AS p_description,
                   p.category    AS p_category,
                   p.author      AS p_author,
                   p.image_url   AS p_image_url,
                   p.created_at  AS p_created_at
            FROM cart_items c
            JOIN projects p ON p.id = c.project_id
            WHERE c.user_id = $1
            ORDER BY c.created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        let mut items = Vec::with_capacity(rows.len());
        for row in rows {
            items.push(CartItemDetail {
                item: CartItemInfo {
                    id: row.try_get("id")?,
                    project_id: row.try_get("project_id")?,
                    user_id: row.try_get("user_id")?,
                    created_at: row.try_get("created_at")?,
                },
                project: ProjectInfo {
                    id: row.try_get("p_id")?,
                    title: row.try_get("p_title")?,
                    description: row.try_get("p_description")?,
                    category: row.try_get("p_category")?,
                    author: row.try_get("p_author")?,
                    image_url: row.try_get("p_image_url")?,
                    created_at: row.try_get("p_created_at")?,
                },
            });
        }

        debug!("✅ 查询完成 - 共 {} 个条目", items.len());
        Ok(items)
    }

    /// 按条目 ID 删除购物车条目
    async fn delete_cart_item(&self, id: Uuid) -> DatabaseResult<()> {
        debug!("🗑️ 删除购物车条目: {}", id);

        let result = sqlx::query("DELETE FROM cart_items WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DatabaseError::not_found(format!("Cart item {id} not found")));
        }

        debug!("✅ 购物车条目删除成功: {}", id);
        Ok(())
    }
}
