//! 项目仓库
//!
//! 项目表的Postgres存取实现

use crate::models::project::{ProjectCreate, ProjectInfo, ProjectPage};
use crate::repositories::traits::ProjectRepositoryTrait;
use crate::{DatabaseError, DatabaseResult};
use sqlx::PgPool;
use tracing::debug;
use uuid::Uuid;

/// 项目仓库
#[derive(Debug, Clone)]
pub struct ProjectRepository {
    pool: PgPool,
}

impl ProjectRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl ProjectRepositoryTrait for ProjectRepository {
    /// 分页查询项目列表
    ///
    /// # SQL 查询说明
    ///
    /// 总数和窗口分两条语句查询：窗口超出末尾时返回空列表，
    /// 总数依然是真实值，分页元数据不会因此失真。
    ///
    /// 排序固定为 `(created_at, id)`，即创建顺序。`id` 作为第二排序键
    /// 消除同一时间戳下的歧义，保证相同参数的两次查询结果一致。
    async fn list_projects(&self, limit: i64, offset: i64) -> DatabaseResult<ProjectPage> {
        debug!("🔍 查询项目列表 - 页面大小: {}, 偏移量: {}", limit, offset);

        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM projects")
            .fetch_one(&self.pool)
            .await?;

        let projects = sqlx::query_as::<_, ProjectInfo>(
            r#"
            SELECT id, title, description, category, author, image_url, created_at
            FROM projects
            ORDER BY created_at, id
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        debug!("✅ 查询完成 - 本页 {} 个项目，总计 {} 个", projects.len(), total);

        Ok(ProjectPage {
            projects,
            total: total as u32,
        })
    }

    /// 创建新项目
    ///
    /// 所有字段原样写入，不做服务端规范化。`id` 和 `created_at`
    /// 由数据库生成，通过 RETURNING 带回
    async fn create_project(&self, project: ProjectCreate) -> DatabaseResult<ProjectInfo> {
        debug!("📝 写入新项目: {:#?}", project);

        let project_info = sqlx::query_as::<_, ProjectInfo>(
            r#"
            INSERT INTO projects (title, description, category, author, image_url)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, title, description, category, author, image_url, created_at
            "#,
        )
        .bind(project.title)
        .bind(project.description)
        .bind(project.category)
        .bind(project.author)
        .bind(project.image_url)
        .fetch_one(&self.pool)
        .await?;

        debug!("✅ 项目已创建: {:#?}", project_info);
        Ok(project_info)
    }

    /// 根据 ID 获取项目信息
    ///
    /// 找不到时返回NotFound，而不是把空结果交给上层猜
    async fn get_project_by_id(&self, id: Uuid) -> DatabaseResult<ProjectInfo> {
        debug!("🔍 按ID查询项目: {}", id);

        let project = sqlx::query_as::<_, ProjectInfo>(
            r#"
            SELECT id, title, description, category, author, image_url, created_at
            FROM projects
            WHERE id = $1
            LIMIT 1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| DatabaseError::not_found(format!("Project {id} not found")))?;

        debug!("✅ 查询到项目: {:#?}", project);
        Ok(project)
    }

    /// 删除项目
    ///
    /// 外键上的 `ON DELETE CASCADE` 会同时清理依赖的购物车条目
    async fn delete_project(&self, id: Uuid) -> DatabaseResult<ProjectInfo> {
        debug!("🗑️ 按ID删除项目: {}", id);

        let project = sqlx::query_as::<_, ProjectInfo>(
            r#"
            DELETE FROM projects
            WHERE id = $1
            RETURNING id, title, description, category, author, image_url, created_at
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| DatabaseError::not_found(format!("Project {id} not found")))?;

        debug!("✅ 项目已删除: {:#?}", project);
        Ok(project)
    }
}
