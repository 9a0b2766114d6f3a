//! 项目服务
//!
//! 在仓库之上实现列表分页约定

use crate::models::common::Pagination;
use crate::services::traits::ProjectServiceTrait;
use crate::services::parse_id;
use database::{DatabaseResult, ProjectCreate, ProjectInfo, ProjectRepositoryTrait};
use std::sync::Arc;

/// 项目列表结果：当前页数据加分页元数据
#[derive(Debug, Clone)]
pub struct ProjectListing {
    pub projects: Vec<ProjectInfo>,
    pub pagination: Pagination,
}

#[derive(Debug)]
pub struct ProjectService<PR: ProjectRepositoryTrait> {
    project_repository: Arc<PR>,
}

impl<PR: ProjectRepositoryTrait> ProjectService<PR> {
    pub fn new(project_repository: Arc<PR>) -> Self {
        Self { project_repository }
    }
}

#[async_trait::async_trait]
impl<PR: ProjectRepositoryTrait> ProjectServiceTrait for ProjectService<PR> {
    /// 分页查询项目列表
    ///
    /// 约定：
    /// - `offset = (page - 1) * limit`
    /// - `total_pages = ceil(total / limit)`，总数为0时为0
    /// - `has_more = page < total_pages`
    /// - 页码超出末尾时返回空列表和真实总数，调用方拿到
    ///   `has_more == false`，不会得到错误
    async fn list_projects(&self, page: u32, limit: u32) -> DatabaseResult<ProjectListing> {
        // 入参在模型层已经收敛过，这里兜底保证偏移量非负、不会除零
        let page = page.max(1);
        let limit = limit.max(1);

        // saturating运算保证偏移量>=0且不会溢出
        let offset = (page.saturating_sub(1) as i64).saturating_mul(limit as i64);

        let result = self.project_repository.list_projects(limit as i64, offset).await?;

        let pagination = Pagination::compute(result.total, page, limit);

        Ok(ProjectListing {
            projects: result.projects,
            pagination,
        })
    }

    async fn create_project(&self, project: ProjectCreate) -> DatabaseResult<ProjectInfo> {
        self.project_repository.create_project(project).await
    }

    async fn delete_project(&self, project_id: &str) -> DatabaseResult<ProjectInfo> {
        let id = parse_id(project_id, &format!("Project {project_id} not found"))?;
        self.project_repository.delete_project(id).await
    }
}
