//! 项目仓库 trait 定义

use crate::models::project::{ProjectCreate, ProjectInfo, ProjectPage};
use crate::DatabaseResult;
use uuid::Uuid;

/// 项目仓库trait定义
///
/// 覆盖项目的分页列表、创建、查询和删除
#[async_trait::async_trait]
pub trait ProjectRepositoryTrait: Send + Sync + 'static {
    /// 分页查询项目列表
    ///
    /// 结果按创建顺序排列：没有写入的情况下，相同参数的两次调用
    /// 返回完全一致的列表。偏移量超出末尾时返回空窗口，
    /// [`ProjectPage`] 中的总数仍然是真实值。
    async fn list_projects(&self, limit: i64, offset: i64) -> DatabaseResult<ProjectPage>;

    /// 创建新项目，字段原样入库
    async fn create_project(&self, project: ProjectCreate) -> DatabaseResult<ProjectInfo>;

    /// 根据 ID 获取项目信息
    ///
    /// 不存在时返回 [`DatabaseError::NotFound`]
    ///
    /// [`DatabaseError::NotFound`]: crate::DatabaseError::NotFound
    async fn get_project_by_id(&self, id: Uuid) -> DatabaseResult<ProjectInfo>;

    /// 删除项目，返回被删除的记录
    ///
    /// 依赖该项目的购物车条目会被级联删除，不存在时返回
    /// [`DatabaseError::NotFound`]
    ///
    /// [`DatabaseError::NotFound`]: crate::DatabaseError::NotFound
    async fn delete_project(&self, id: Uuid) -> DatabaseResult<ProjectInfo>;
}
