//! 购物车相关接口
//!
//! "购物车"是收藏列表，用户（默认游客）把项目收藏起来稍后查看

use crate::models::cart::{CartAddReply, CartAddRequest, CartListReply, CartQuery};
use crate::models::common::MessageReply;
use crate::models::err::AppError;
use crate::services::{CartServiceTrait, ProjectServiceTrait};
use crate::AppState;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use color_eyre::Result;
use tracing::debug;

/// 查询购物车内容
///
/// 返回指定用户（缺省为游客）的全部购物车条目，最新收藏的在前，
/// 每个条目内嵌关联的项目信息
#[utoipa::path(get,
    path = "/cart",
    tag = "cart",
    params(CartQuery),
    responses(
        (status = 200, description = "Cart items with embedded projects", body = CartListReply)
    ),
)]
pub async fn get_cart<PS: ProjectServiceTrait, CS: CartServiceTrait>(
    State(state): State<AppState<PS, CS>>,
    Query(query): Query<CartQuery>,
) -> Result<Json<CartListReply>, AppError> {
    debug!("🔍 查询购物车 {:#?}", query);

    let items = state.cart_service.list_cart(query.user_id).await?;

    let cart_items: Vec<_> = items.into_iter().map(Into::into).collect();
    let count = cart_items.len();

    Ok(Json(CartListReply { cart_items, count }))
}

/// 把项目加入购物车
///
/// `projectId` 必填，缺失返回400；项目不存在返回404并且不会创建条目。
/// 不做重复检查，同一个用户可以反复收藏同一个项目
#[utoipa::path(post,
    path = "/cart",
    tag = "cart",
    request_body = CartAddRequest,
    responses(
        (status = 201, description = "Cart item created", body = CartAddReply),
        (status = 400, description = "projectId missing"),
        (status = 404, description = "Project not found")
    )
)]
pub async fn add_to_cart<PS: ProjectServiceTrait, CS: CartServiceTrait>(
    State(state): State<AppState<PS, CS>>,
    Json(request): Json<CartAddRequest>,
) -> Result<(StatusCode, Json<CartAddReply>), AppError> {
    debug!("📝 加入购物车 {:#?}", request);

    let Some(project_id) = request.project_id else {
        return Err(AppError::MissingField("Project ID"));
    };

    let cart_item = state.cart_service.add_to_cart(&project_id, request.user_id).await?;

    Ok((
        StatusCode::CREATED,
        Json(CartAddReply {
            message: "Project added to cart successfully".to_string(),
            cart_item: cart_item.into(),
        }),
    ))
}

/// 从购物车删除条目
///
/// 按条目自身的ID删除（不是项目ID），条目不存在返回404
#[utoipa::path(delete,
    path = "/cart/{id}",
    tag = "cart",
    params(("id" = String, Path, description = "购物车条目ID")),
    responses(
        (status = 200, description = "Cart item removed", body = MessageReply),
        (status = 404, description = "Cart item not found")
    )
)]
pub async fn remove_from_cart<PS: ProjectServiceTrait, CS: CartServiceTrait>(
    State(state): State<AppState<PS, CS>>,
    Path(cart_item_id): Path<String>,
) -> Result<Json<MessageReply>, AppError> {
    debug!("🗑️ 删除购物车条目 {:#?}", cart_item_id);

    state.cart_service.remove_from_cart(&cart_item_id).await?;

    Ok(Json(MessageReply {
        message: "Cart item removed successfully.".to_string(),
    }))
}
