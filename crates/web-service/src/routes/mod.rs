//! 路由入口
//!
//! 提供 [`create_app_router`] 函数，导出当前App的所有路由。
//!
//! 用户可以在导出路由时传入共享数据 shared_state，这样所有路由函数都可以访问。

use crate::routes::cart::__path_add_to_cart;
use crate::routes::cart::__path_get_cart;
use crate::routes::cart::__path_remove_from_cart;
use crate::routes::cart::{add_to_cart, get_cart, remove_from_cart};
use crate::routes::projects::__path_create_project;
use crate::routes::projects::__path_delete_project;
use crate::routes::projects::__path_find_projects;
use crate::routes::projects::{create_project, delete_project, find_projects};
use crate::services::{CartServiceTrait, ProjectServiceTrait};
use crate::AppState;
use axum::response::Json;
use axum::routing::get;
use axum::Router;
use serde_json::{json, Value};
use tracing::instrument;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;
use utoipa_scalar::{Scalar, Servable};

pub mod cart;
pub mod projects;

/// 导出当前App的所有路由
///
/// ## 参数定义
/// - state: 共享数据，参考 [`AppState`] 定义。存放各个服务的实例。
///
/// ## **❗️注意事项：**
///
/// 由于 [`routes!`] 宏限制，同一个宏调用里只能放同一路径下的handler，
/// 不同路径需要拆开：
///
/// ```text
/// .routes(routes!(get_cart, add_to_cart))   // 都在 /cart 下
/// .routes(routes!(remove_from_cart))        // /cart/{id}
/// ```
fn routers<PS: ProjectServiceTrait, CS: CartServiceTrait>(
    state: AppState<PS, CS>,
) -> OpenApiRouter {
    OpenApiRouter::new()
        .routes(routes!(find_projects))
        .routes(routes!(create_project))
        .routes(routes!(delete_project))
        .routes(routes!(get_cart, add_to_cart))
        .routes(routes!(remove_from_cart))
        .with_state(state)
}

/// 创建当前App的路由
///
/// 完成以下功能：
/// - 生成OpenAPI文档
/// - 生成App路由
/// - 使用Scalar作为最终在线文档格式
///
/// 由于使用了 `utoipa` 库来自动化生成`openapi`文档，因此我们没有使用原生的 [`Router`]，而是使用了
/// [`OpenApiRouter`] 。
pub fn create_app_router<PS: ProjectServiceTrait, CS: CartServiceTrait>(
    shared_state: AppState<PS, CS>,
) -> Router {
    // 当前项目的OpenAPI声明
    #[derive(OpenApi)]
    #[openapi(
        tags(
            (name = "project-catalog", description = r#"
项目目录后端，覆盖场景：

- 项目列表（分页）
- 项目创建/删除
- 购物车（收藏）管理
            "#)
        ),
    )]
    struct ApiDoc;

    // 使用`utoipa_axum`提供的OpenApiRouter来创建路由。
    // 同时传递共享状态数据到路由中供使用。
    // 最终拿到的变量：
    // - router: Axum的Router，实际的路由对象
    // - api: utoipa的OpenApi，生成的OpenAPI对象
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .merge(routers(shared_state))
        .split_for_parts();

    // 健康检查等基础路由不进入OpenAPI文档
    // 合并文档路由，用户可通过 /docs 访问文档网页地址
    router
        .route("/", get(root))
        .route("/health", get(health_check))
        .merge(Scalar::with_url("/docs", api))
}

#[instrument]
async fn root() -> Json<Value> {
    Json(json!({
        "service": "project-catalog",
        "status": "running",
        "message": "Hello from server."
    }))
}

#[instrument]
async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "service": "project-catalog"
    }))
}
