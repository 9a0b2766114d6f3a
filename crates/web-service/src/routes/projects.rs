//! 项目相关接口
//!

use crate::models::common::{MessageReply, PageQuery};
use crate::models::err::AppError;
use crate::models::projects::{ProjectCreate, ProjectListReply};
use crate::services::{CartServiceTrait, ProjectServiceTrait};
use crate::AppState;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use color_eyre::Result;
use tracing::debug;

/// 分页查询项目列表
///
/// `page`/`limit` 缺失或非数字时使用默认值 `page=1, limit=10`，
/// 小于1的值收敛到1。页码超出末尾会得到空列表和 `hasMore: false`，
/// 不是错误。
///
/// ## 返回值
///
/// 返回值的类型是 [`Result<Json<ProjectListReply>, AppError>`]：
///
/// 1. [`Json`] 会对内部类型进行json序列化，保证返回的数据是一个合法的json字符串
/// 2. [`ProjectListReply`] 是实际的业务返回对象，带分页元数据
/// 3. [`AppError`] 是错误时返回的Error类型，会自动转换为相应的http错误码
#[utoipa::path(get,
    path = "/projects",
    tag = "projects",
    params(PageQuery),
    responses(
        (status = 200, description = "Project list with pagination metadata", body = ProjectListReply)
    ),
)]
pub async fn find_projects<PS: ProjectServiceTrait, CS: CartServiceTrait>(
    State(state): State<AppState<PS, CS>>,
    Query(query): Query<PageQuery>,
) -> Result<Json<ProjectListReply>, AppError> {
    debug!("🔍 查询项目列表 {:#?}", query);

    let (page, limit) = query.resolve();

    let listing = state.project_service.list_projects(page, limit).await?;

    Ok(Json(ProjectListReply {
        projects: listing.projects.into_iter().map(Into::into).collect(),
        pagination: listing.pagination,
    }))
}

/// 创建项目
///
/// 根据用户输入参数创建项目信息。字段原样入库，不做服务端校验
#[utoipa::path(post,
    path = "/project",
    tag = "projects",
    request_body = ProjectCreate,
    responses(
        (status = 201, description = "Project created", body = MessageReply)
    )
)]
pub async fn create_project<PS: ProjectServiceTrait, CS: CartServiceTrait>(
    State(state): State<AppState<PS, CS>>,
    Json(project): Json<ProjectCreate>,
) -> Result<(StatusCode, Json<MessageReply>), AppError> {
    debug!("📝 创建项目 {:#?}", project);

    let db_project = database::ProjectCreate {
        title: project.title,
        description: project.description,
        category: project.category,
        author: project.author,
        image_url: project.image_url,
    };
    state.project_service.create_project(db_project).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageReply {
            message: "Project created successfully.".to_string(),
        }),
    ))
}

/// 删除指定的项目
///
/// 依赖该项目的购物车条目会被级联删除
#[utoipa::path(delete,
    path = "/project/{id}",
    tag = "projects",
    params(("id" = String, Path, description = "项目ID")),
    responses(
        (status = 200, description = "Project deleted", body = MessageReply),
        (status = 404, description = "Project not found")
    )
)]
pub async fn delete_project<PS: ProjectServiceTrait, CS: CartServiceTrait>(
    State(state): State<AppState<PS, CS>>,
    Path(project_id): Path<String>,
) -> Result<Json<MessageReply>, AppError> {
    debug!("🗑️ 删除项目 {:#?}", project_id);

    state.project_service.delete_project(&project_id).await?;

    Ok(Json(MessageReply {
        message: "Project deleted successfully".to_string(),
    }))
}
