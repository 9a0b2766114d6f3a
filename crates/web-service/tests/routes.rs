//! 接口层测试
//!
//! 直接调用handler函数，检查状态码和线上JSON格式

mod common;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use common::InMemoryStore;
use std::sync::Arc;
use web_service::models::cart::CartAddRequest;
use web_service::models::common::PageQuery;
use web_service::models::projects::ProjectCreate;
use web_service::routes::{cart, projects};
use web_service::services::{CartService, ProjectService};
use web_service::AppState;

type TestState =
    AppState<ProjectService<InMemoryStore>, CartService<InMemoryStore, InMemoryStore>>;

fn setup() -> (Arc<InMemoryStore>, TestState) {
    let store = Arc::new(InMemoryStore::new());
    let state = AppState {
        project_service: Arc::new(ProjectService::new(store.clone())),
        cart_service: Arc::new(CartService::new(store.clone(), store.clone())),
    };
    (store, state)
}

fn page_query(page: &str, limit: &str) -> PageQuery {
    PageQuery {
        page: Some(page.to_string()),
        limit: Some(limit.to_string()),
    }
}

#[tokio::test]
async fn create_project_replies_201_with_message() {
    let (_, state) = setup();

    let (status, Json(reply)) = projects::create_project(
        State(state),
        Json(ProjectCreate {
            title: "Komputer Dasar".to_string(),
            description: Some("Pengenalan dasar-dasar komputer".to_string()),
            category: "Technology".to_string(),
            author: "Teknologi Indonesia".to_string(),
            image_url: "https://picsum.photos/600/400".to_string(),
        }),
    )
    .await
    .unwrap();

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(reply.message, "Project created successfully.");
}

#[tokio::test]
async fn project_list_uses_camel_case_pagination_keys() {
    let (store, state) = setup();
    store.seed_projects(9).await;

    let Json(reply) =
        projects::find_projects(State(state), Query(page_query("1", "3"))).await.unwrap();

    let value = serde_json::to_value(&reply).unwrap();
    assert_eq!(value["projects"].as_array().unwrap().len(), 3);
    assert_eq!(value["pagination"]["total"], 9);
    assert_eq!(value["pagination"]["page"], 1);
    assert_eq!(value["pagination"]["limit"], 3);
    assert_eq!(value["pagination"]["totalPages"], 3);
    assert_eq!(value["pagination"]["hasMore"], true);
}

#[tokio::test]
async fn page_past_the_end_is_not_an_error() {
    let (store, state) = setup();
    store.seed_projects(9).await;

    let Json(reply) =
        projects::find_projects(State(state), Query(page_query("4", "3"))).await.unwrap();

    assert!(reply.projects.is_empty());
    assert_eq!(reply.pagination.total, 9);
    assert!(!reply.pagination.has_more);
}

#[tokio::test]
async fn add_to_cart_without_project_id_is_400() {
    let (_, state) = setup();

    let err = cart::add_to_cart(
        State(state),
        Json(CartAddRequest {
            project_id: None,
            user_id: None,
        }),
    )
    .await
    .unwrap_err();

    assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn add_to_cart_with_unknown_project_is_404() {
    let (_, state) = setup();

    let err = cart::add_to_cart(
        State(state.clone()),
        Json(CartAddRequest {
            project_id: Some("doesnotexist".to_string()),
            user_id: None,
        }),
    )
    .await
    .unwrap_err();

    assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);

    // 失败的请求没有留下条目
    let Json(reply) = cart::get_cart(State(state), Query(Default::default())).await.unwrap();
    assert_eq!(reply.count, 0);
}

#[tokio::test]
async fn cart_item_lifecycle_over_handlers() {
    let (store, state) = setup();
    let ids = store.seed_projects(1).await;

    let (status, Json(added)) = cart::add_to_cart(
        State(state.clone()),
        Json(CartAddRequest {
            project_id: Some(ids[0].to_string()),
            user_id: None,
        }),
    )
    .await
    .unwrap();

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(added.message, "Project added to cart successfully");
    assert_eq!(added.cart_item.user_id, "guest");

    let Json(listed) =
        cart::get_cart(State(state.clone()), Query(Default::default())).await.unwrap();
    assert_eq!(listed.count, 1);
    assert_eq!(listed.cart_items[0].project.id, ids[0].to_string());

    // 线上格式：条目字段是camelCase
    let value = serde_json::to_value(&listed).unwrap();
    assert!(value["cartItems"][0].get("projectId").is_some());
    assert!(value["cartItems"][0].get("createdAt").is_some());

    // 第一次删除成功，第二次404
    let item_id = added.cart_item.id.clone();
    let Json(removed) =
        cart::remove_from_cart(State(state.clone()), Path(item_id.clone())).await.unwrap();
    assert_eq!(removed.message, "Cart item removed successfully.");

    let err = cart::remove_from_cart(State(state), Path(item_id)).await.unwrap_err();
    assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
}
